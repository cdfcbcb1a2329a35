use crate::display::{TerminalCard, render_page};

use super::Context;

pub fn show_board(ctx: &Context) {
    let mut page = ctx.mount_loaded();
    print!("{}", render_page(&mut page, &TerminalCard));
}
