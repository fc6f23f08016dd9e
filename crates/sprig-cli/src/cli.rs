use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sprig")]
#[command(about = "Render a note and replay clicks and shortcuts against it")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Keyboard configuration file (JSON); defaults to the user config dir
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a note (JSON note or markdown file)
    Show {
        /// Note file; `.json` is read as a note, anything else as markdown
        file: PathBuf,
        /// Route prefix for generated links (e.g. /p/work)
        #[arg(long, default_value = "", value_name = "URI")]
        base: String,
        /// Click the favorite indicator
        #[arg(long)]
        favorite: bool,
        /// Click the checkbox with this data-task value (repeatable)
        #[arg(long = "task", value_name = "N")]
        tasks: Vec<String>,
        /// Press a key combination such as `down` or `shift+3` (repeatable)
        #[arg(long = "key", value_name = "COMBO")]
        keys: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the completed-task percentage
    Progress {
        /// Completed tasks
        completed: u32,
        /// All tasks
        all: u32,
    },
    /// Show the effective keyboard configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
