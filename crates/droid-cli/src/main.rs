//! droidpatch CLI
//!
//! Prepares a Capacitor/Android project for signed release builds.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use droid_patch::{Pipeline, Stages};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(cmd) = cli.command else {
        println!("{} Android build patcher", "droidpatch".green().bold());
        println!();
        println!("Run {} for available commands.", "droidpatch --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let pipeline = commands::open_pipeline(&cwd, cli.project.as_deref(), cli.config.as_deref())?;
    execute_command(cmd, &pipeline)
}

fn execute_command(cmd: Commands, pipeline: &Pipeline) -> Result<()> {
    match cmd {
        Commands::Apply { dry_run, json } => {
            commands::run_apply(pipeline, Stages::ALL, dry_run, json)
        }
        Commands::Signing { dry_run } => {
            commands::run_apply(pipeline, Stages::SIGNING, dry_run, false)
        }
        Commands::JavaVersion { dry_run } => {
            commands::run_apply(pipeline, Stages::TARGETS, dry_run, false)
        }
        Commands::StampVersion { dry_run } => {
            commands::run_apply(pipeline, Stages::VERSION, dry_run, false)
        }
        Commands::BumpVersion => commands::run_bump_version(pipeline),
        Commands::Check { json } => commands::run_check(pipeline, json),
    }
}
