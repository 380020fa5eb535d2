//! Wrench CLI
//!
//! The command-line interface for resolving layered deployment configuration.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, SourceArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warning".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.source),
        None => {
            println!("{} Layered configuration resolver", "wrench".green().bold());
            println!();
            println!("Run {} for available commands.", "wrench --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, source: &SourceArgs) -> Result<()> {
    match cmd {
        Commands::Resolve {
            target,
            format,
            output,
        } => commands::run_resolve(source, target.as_deref(), format, output.as_deref()),
        Commands::Targets => commands::run_targets(source),
        Commands::Properties { json } => commands::run_properties(source, json),
        Commands::Tree { format } => commands::run_tree(source, format),
        Commands::ShortenVersion { version } => commands::run_shorten_version(&version),
    }
}
