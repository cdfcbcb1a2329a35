use crate::loader::LoadState;
use crate::models::Challenge;
use crate::page::ChallengePage;
use crate::store::PreferencesStore;

pub const NOT_STARTED_MESSAGE: &str = "The CTF has not started yet.";
pub const EMPTY_MESSAGE: &str = "There are no challenges.";
pub const SOLVED_ALL_MESSAGE: &str = "You solved all the challenges!";

const RULE_WIDTH: usize = 60;

/// Renders a single challenge card.
pub trait ProblemView {
    fn render(&self, problem: &Challenge, solved: bool) -> String;
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalCard;

impl ProblemView for TerminalCard {
    fn render(&self, problem: &Challenge, solved: bool) -> String {
        let mut out = String::new();
        let mark = if solved { "[solved] " } else { "" };
        push_line(
            &mut out,
            format!(
                "{}{}/{}  ({} pts, {} solves)  id: {}",
                mark, problem.category, problem.name, problem.points, problem.solves, problem.id
            ),
        );
        if !problem.author.is_empty() {
            push_line(&mut out, format!("  by {}", problem.author));
        }
        for line in problem.description.lines() {
            push_line(&mut out, format!("  {}", line));
        }
        for file in &problem.files {
            push_line(&mut out, format!("  file: {} <{}>", file.name, file.url));
        }
        out
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn push_header(out: &mut String, title: &str) {
    push_line(out, "=".repeat(RULE_WIDTH));
    push_line(out, format!("  {}", title));
    push_line(out, "-".repeat(RULE_WIDTH));
}

/// Renders the whole board for the page's current state. Returns an empty
/// string while the load is still pending.
pub fn render_page<S: PreferencesStore>(
    page: &mut ChallengePage<S>,
    card: &dyn ProblemView,
) -> String {
    match page.load_state() {
        LoadState::Pending => return String::new(),
        LoadState::NotStarted => return format!("{}\n", NOT_STARTED_MESSAGE),
        LoadState::Loaded { empty: true } => return format!("{}\n", EMPTY_MESSAGE),
        LoadState::Loaded { empty: false } => {}
    }

    let show_solved = page.show_solved();
    let derived = page.derived().clone();
    let mut out = String::new();

    push_header(&mut out, "Filters");
    push_line(
        &mut out,
        format!(
            "  {} Show solved ({}/{} solved)",
            checkbox(show_solved),
            derived.solved_count,
            derived.total
        ),
    );

    push_header(&mut out, "Categories");
    for (category, selected) in page.categories().iter() {
        let tally = derived.tallies.get(category).copied().unwrap_or_default();
        push_line(
            &mut out,
            format!(
                "  {} {} ({}/{} solved)",
                checkbox(selected),
                category,
                tally.solved,
                tally.total
            ),
        );
    }

    push_line(&mut out, "=".repeat(RULE_WIDTH));
    if derived.solved_all(show_solved) {
        push_line(&mut out, SOLVED_ALL_MESSAGE);
    } else {
        for problem in &derived.display {
            out.push_str(&card.render(problem, page.is_solved(&problem.id)));
            push_line(&mut out, "-".repeat(RULE_WIDTH));
        }
    }

    out
}
