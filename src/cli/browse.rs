use std::io::{self, BufRead, Write};

use crate::display::{ProblemView, TerminalCard, render_page};
use crate::error::ChallsError;
use crate::page::ChallengePage;
use crate::store::PreferencesStore;

use super::Context;

const HELP: &str = "\
Commands:
  list                   show the board
  solve <id>             mark a challenge as solved
  toggle <category>      flip a category filter
  show-solved [on|off]   show or hide solved challenges
  reset                  clear all filters
  help                   show this help
  quit                   leave the session";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    List,
    Solve(String),
    Toggle(String),
    ShowSolved(Option<bool>),
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };

    let command = match (word, arg) {
        ("list" | "ls", "") => SessionCommand::List,
        ("solve", id) if !id.is_empty() => SessionCommand::Solve(id.to_string()),
        ("toggle", category) if !category.is_empty() => {
            SessionCommand::Toggle(category.to_string())
        }
        ("show-solved", "") => SessionCommand::ShowSolved(None),
        ("show-solved", "on") => SessionCommand::ShowSolved(Some(true)),
        ("show-solved", "off") => SessionCommand::ShowSolved(Some(false)),
        ("reset", "") => SessionCommand::Reset,
        ("help" | "?", "") => SessionCommand::Help,
        ("quit" | "exit" | "q", "") => SessionCommand::Quit,
        _ => return Err(format!("Unrecognized command: '{}'. Type 'help'.", line)),
    };
    Ok(Some(command))
}

pub fn browse(ctx: &Context) {
    let mut page = ctx.mount_loaded();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_session(&mut page, &TerminalCard, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Runs commands from `input` against the page until `quit` or end of input.
/// The board is printed on start and after every state change.
fn run_session<S, R, W>(
    page: &mut ChallengePage<S>,
    card: &dyn ProblemView,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    S: PreferencesStore,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_page(page, card))?;
    writeln!(output, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            SessionCommand::List => {}
            SessionCommand::Solve(id) => {
                if page.find(&id).is_none() {
                    writeln!(output, "{}", ChallsError::UnknownChallenge(id))?;
                    continue;
                }
                page.mark_solved(&id);
                writeln!(output, "Marked '{}' as solved.", id)?;
            }
            SessionCommand::Toggle(category) => {
                if !page.categories().contains(&category) {
                    writeln!(output, "{}", ChallsError::UnknownCategory(category))?;
                    continue;
                }
                page.toggle_category(&category);
            }
            SessionCommand::ShowSolved(value) => match value {
                Some(show) => page.set_show_solved(show),
                None => {
                    page.toggle_show_solved();
                }
            },
            SessionCommand::Reset => page.reset_preferences(),
            SessionCommand::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            SessionCommand::Quit => break,
        }

        write!(output, "{}", render_page(page, card))?;
    }

    output.flush()
}
