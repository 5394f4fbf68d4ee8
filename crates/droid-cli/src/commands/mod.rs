//! Command implementations for droid-cli

pub mod apply;
pub mod check;
pub mod version;

use std::path::Path;

use droid_fs::NormalizedPath;
use droid_patch::{PatchConfig, Pipeline};

use crate::context::detect_context;
use crate::error::{CliError, Result};

pub use apply::run_apply;
pub use check::run_check;
pub use version::run_bump_version;

/// Resolve the project root and configuration into a [`Pipeline`].
///
/// An explicit `project` must exist. Without one the root is detected by
/// walking up from `cwd`, falling back to `cwd` itself.
pub fn open_pipeline(cwd: &Path, project: Option<&Path>, config: Option<&Path>) -> Result<Pipeline> {
    let root = match project {
        Some(dir) => {
            let dir = if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                cwd.join(dir)
            };
            if !dir.is_dir() {
                return Err(CliError::user(format!(
                    "Project directory not found: {}",
                    dir.display()
                )));
            }
            NormalizedPath::canonicalize(&dir)?
        }
        None => {
            let ctx = detect_context(cwd);
            tracing::debug!(?ctx, "Detected project context");
            NormalizedPath::canonicalize(ctx.root_path().unwrap_or(cwd))?
        }
    };

    let explicit = config.map(|path| {
        if path.is_absolute() {
            NormalizedPath::new(path)
        } else {
            NormalizedPath::new(cwd.join(path))
        }
    });

    let config = PatchConfig::load(&root, explicit.as_ref())?;
    tracing::debug!(root = %root, build_file = %config.build_file, "Resolved project");

    Ok(Pipeline::new(root, config))
}

/// Print a unified diff with +/- lines colored.
pub(crate) fn print_diff(diff: &str) {
    use colored::Colorize;

    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("   {}", line.bold());
        } else if line.starts_with('+') {
            println!("   {}", line.green());
        } else if line.starts_with('-') {
            println!("   {}", line.red());
        } else if line.starts_with("@@") {
            println!("   {}", line.cyan());
        } else {
            println!("   {}", line);
        }
    }
}
