//! Apply command and its single-stage variants
//!
//! `apply`, `signing`, `java-version` and `stamp-version` all run the same
//! pipeline with a different set of stages.

use colored::Colorize;

use droid_patch::{
    Pipeline, RunOptions, RunReport, SigningOutcome, Stages, StampOutcome, SubstitutionOutcome,
};

use super::print_diff;
use crate::error::Result;

/// Run the selected stages and print the report.
pub fn run_apply(pipeline: &Pipeline, stages: Stages, dry_run: bool, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} Patching {}{}",
            "=>".blue().bold(),
            pipeline.root().as_str().yellow(),
            if dry_run { " (dry run)".dimmed().to_string() } else { String::new() }
        );
    }

    let report = pipeline.run(RunOptions { stages, dry_run })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    let would = if report.dry_run { "would be " } else { "" };

    if let Some(signing) = &report.signing {
        match signing {
            SigningOutcome::Applied { inserted_lines } => println!(
                "   {} Signing configuration {}applied to {} (+{} lines)",
                "OK".green().bold(),
                would,
                report.build_file.cyan(),
                inserted_lines
            ),
            SigningOutcome::AlreadyApplied => println!(
                "   {} Signing configuration already present in {}",
                "OK".green().bold(),
                report.build_file.cyan()
            ),
        }
    }

    if let Some(version) = &report.version {
        match version {
            StampOutcome::Stamped {
                version_code,
                version_name,
            } => println!(
                "   {} Version {}set to {} ({})",
                "OK".green().bold(),
                would,
                version_code.to_string().cyan(),
                version_name.cyan()
            ),
            StampOutcome::Unchanged => println!(
                "   {} Version already up to date",
                "OK".green().bold()
            ),
            StampOutcome::Skipped { version_file } => println!(
                "   {} {} not found, version not stamped",
                "SKIP".yellow().bold(),
                version_file.cyan()
            ),
        }
    }

    for target in &report.targets {
        match &target.outcome {
            SubstitutionOutcome::Patched { replacements } => println!(
                "   {} {}: {} replacement(s){}",
                "OK".green().bold(),
                target.path.cyan(),
                replacements,
                if report.dry_run { " pending" } else { "" }
            ),
            SubstitutionOutcome::Unchanged => println!(
                "   {} {}: nothing to replace",
                "OK".green().bold(),
                target.path.cyan()
            ),
            SubstitutionOutcome::Skipped => println!(
                "   {} {} not found",
                "SKIP".yellow().bold(),
                target.path.cyan()
            ),
        }
    }

    if report.dry_run {
        let diffs = report
            .build_file_diff
            .iter()
            .chain(report.targets.iter().filter_map(|t| t.diff.as_ref()));
        let mut any = false;
        for diff in diffs {
            if !any {
                println!();
                any = true;
            }
            print_diff(diff);
        }
        println!();
        if any {
            println!("Run without {} to apply these changes.", "--dry-run".cyan());
        } else {
            println!("{} No changes needed.", "OK".green().bold());
        }
    }
}
