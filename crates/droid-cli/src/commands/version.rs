//! Version bump command implementation

use colored::Colorize;

use droid_patch::Pipeline;

use crate::error::Result;

/// Increment versionCode in the version file.
pub fn run_bump_version(pipeline: &Pipeline) -> Result<()> {
    let bump = pipeline.bump_version()?;

    println!(
        "{} Version code incremented: {} -> {}",
        "OK".green().bold(),
        bump.previous_code,
        bump.current.version_code.to_string().cyan()
    );
    println!("   Version name: {}", bump.current.version_name);

    Ok(())
}
