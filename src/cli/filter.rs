use crate::display::{TerminalCard, render_page};
use crate::error::ChallsError;

use super::Context;

pub fn toggle_category(ctx: &Context, category: &str) {
    let mut page = ctx.mount_loaded();

    if !page.categories().contains(category) {
        eprintln!("Error: {}", ChallsError::UnknownCategory(category.to_string()));
        std::process::exit(1);
    }

    let selected = page.toggle_category(category);
    println!(
        "Category '{}' {}",
        category,
        if selected { "selected" } else { "deselected" }
    );
    println!();
    print!("{}", render_page(&mut page, &TerminalCard));
}

pub fn set_show_solved(ctx: &Context, show_solved: bool) {
    let mut page = ctx.mount();
    page.set_show_solved(show_solved);
    println!(
        "Solved challenges are now {}",
        if show_solved { "shown" } else { "hidden" }
    );
}

pub fn reset(ctx: &Context) {
    let mut page = ctx.mount();
    page.reset_preferences();
    println!("Filters reset.");
}
