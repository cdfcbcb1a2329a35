mod browse;
mod config_cmd;
mod filter;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config;
use crate::loader::LoadState;
use crate::notify::TerminalNotifier;
use crate::page::ChallengePage;
use crate::source::source_for;
use crate::store::{FilePreferencesStore, default_preferences_path};

#[derive(Parser)]
#[command(name = "challs")]
#[command(about = "Browse CTF challenges from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Challenge JSON file or http(s) endpoint
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Path of the stored filter preferences
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(self) -> bool {
        self == Switch::On
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the challenge board (default)
    List,
    /// Interactive session: mark solves and change filters
    Browse,
    /// Flip the filter flag of a category
    Toggle { category: String },
    /// Show or hide solved challenges
    ShowSolved {
        #[arg(value_enum)]
        value: Switch,
    },
    /// Clear all stored filters
    Reset,
    /// Show or change the configured challenge source
    Config {
        /// New challenge file path or URL
        #[arg(long, value_name = "SOURCE")]
        set_source: Option<String>,
    },
}

pub fn run(cli: Cli) {
    let ctx = Context {
        source: cli.source,
        state: cli.state,
    };
    match cli.command {
        None | Some(Commands::List) => list::show_board(&ctx),
        Some(Commands::Browse) => browse::browse(&ctx),
        Some(Commands::Toggle { category }) => filter::toggle_category(&ctx, &category),
        Some(Commands::ShowSolved { value }) => filter::set_show_solved(&ctx, value.enabled()),
        Some(Commands::Reset) => filter::reset(&ctx),
        Some(Commands::Config { set_source }) => config_cmd::handle_config(set_source),
    }
}

pub struct Context {
    pub source: Option<String>,
    pub state: Option<PathBuf>,
}

impl Context {
    fn store(&self) -> FilePreferencesStore {
        if let Some(ref path) = self.state {
            return FilePreferencesStore::new(path);
        }
        match default_preferences_path() {
            Ok(path) => FilePreferencesStore::new(path),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Mounts a page without fetching anything.
    fn mount(&self) -> ChallengePage<FilePreferencesStore> {
        ChallengePage::mount(self.store())
    }

    /// Mounts a page and performs the one-shot load. Exits if the fetch
    /// failed; the notifier has already shown why.
    fn mount_loaded(&self) -> ChallengePage<FilePreferencesStore> {
        let source = match config::load_config().resolve_source(self.source.as_deref()) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        let mut page = self.mount();
        page.load(source_for(&source).as_ref(), &TerminalNotifier);
        if page.load_state() == LoadState::Pending {
            std::process::exit(1);
        }
        page
    }
}
