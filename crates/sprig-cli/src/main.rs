//! Sprig CLI - render a note and replay interactions against it
//!
//! Useful for checking how a note renders, what its task progress is, and
//! which links its shortcuts navigate to.

mod cli;
mod commands;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::config::{resolve_configs, run_config};
use crate::commands::progress::run_progress;
use crate::commands::show::{run_show, ShowOptions};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sprig=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            file,
            base,
            favorite,
            tasks,
            keys,
            json,
            output,
        } => {
            let configs = resolve_configs(cli.config.as_deref())?;
            let options = ShowOptions {
                base: &base,
                favorite,
                tasks: &tasks,
                keys: &keys,
            };
            run_show(&file, configs, &options, json, output.as_deref())?;
        }
        Commands::Progress { completed, all } => run_progress(completed, all),
        Commands::Config { json } => {
            let configs = resolve_configs(cli.config.as_deref())?;
            run_config(&configs, json)?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
