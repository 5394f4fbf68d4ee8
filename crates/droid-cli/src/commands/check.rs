//! Check command implementation
//!
//! Reports what `apply` would find without writing anything.

use colored::Colorize;

use droid_patch::{CheckReport, Pipeline};

use crate::error::Result;

pub fn run_check(pipeline: &Pipeline, json: bool) -> Result<()> {
    let report = pipeline.check()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_check(pipeline, &report);
    }

    Ok(())
}

fn print_check(pipeline: &Pipeline, report: &CheckReport) {
    println!(
        "{} Checking {}",
        "=>".blue().bold(),
        pipeline.root().as_str().yellow()
    );

    if !report.build_file_exists {
        println!(
            "   {} {} not found",
            "MISSING".red().bold(),
            report.build_file.cyan()
        );
    } else if report.signing_configured {
        println!(
            "   {} Signing already configured in {}",
            "OK".green().bold(),
            report.build_file.cyan()
        );
    } else {
        for anchor in &report.anchors {
            match anchor.line {
                Some(line) => println!(
                    "   {} {} at line {}",
                    "OK".green().bold(),
                    anchor.kind,
                    line
                ),
                None => println!(
                    "   {} {} ({})",
                    "MISSING".red().bold(),
                    anchor.kind,
                    anchor.pattern.dimmed()
                ),
            }
        }
    }

    match &report.version {
        Some(info) => println!(
            "   {} {}: versionCode {}, versionName {}",
            "OK".green().bold(),
            report.version_file.cyan(),
            info.version_code,
            info.version_name
        ),
        None => println!(
            "   {} {} not found",
            "SKIP".yellow().bold(),
            report.version_file.cyan()
        ),
    }

    for target in &report.targets {
        if target.present {
            println!(
                "   {} {}: {} match(es)",
                "OK".green().bold(),
                target.path.cyan(),
                target.matches
            );
        } else {
            println!("   {} {} not found", "SKIP".yellow().bold(), target.path.cyan());
        }
    }

    println!();
    if report.is_ready() {
        println!("Ready. Run {} to patch.", "droidpatch apply".cyan());
    } else {
        println!("{} apply would fail for this project.", "!".red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::open_pipeline;
    use droid_test_utils::TestProject;

    #[test]
    fn test_check_basic() {
        let project = TestProject::new().with_capacitor_build_gradle();
        let pipeline = open_pipeline(project.root(), None, None).unwrap();

        assert!(run_check(&pipeline, false).is_ok());
    }

    #[test]
    fn test_check_json_on_empty_project() {
        let project = TestProject::new();
        let pipeline = open_pipeline(project.root(), None, None).unwrap();

        assert!(run_check(&pipeline, true).is_ok());
    }
}
