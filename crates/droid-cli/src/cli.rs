//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// droidpatch - Prepare an Android build file for signed release builds
#[derive(Parser, Debug)]
#[command(name = "droidpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory holding
    /// droidpatch.toml or android/app/build.gradle)
    #[arg(short = 'C', long, global = true, env = "DROIDPATCH_PROJECT")]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to <project>/droidpatch.toml if present)
    #[arg(short, long, global = true, env = "DROIDPATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run every stage: signing, version stamp, Java version targets
    ///
    /// The build file is written at most once. If any required anchor is
    /// missing nothing is written at all.
    ///
    /// Examples:
    ///   droidpatch apply              # Patch the project in place
    ///   droidpatch apply --dry-run    # Show the diff, write nothing
    ///   droidpatch apply --json       # Machine-readable report
    Apply {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },

    /// Inject the release signing configuration into the build file
    Signing {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Pin the Java version in dependency-generated build files
    JavaVersion {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Copy versionCode/versionName from the version file into the build file
    StampVersion {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Increment versionCode in the version file
    BumpVersion,

    /// Report what apply would find, without writing anything
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
