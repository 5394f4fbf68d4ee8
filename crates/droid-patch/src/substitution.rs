//! Auxiliary patch targets.
//!
//! Each target is an optional file plus one find/replace pair. All targets
//! go through [`patch_if_present`]; a missing file is reported as skipped
//! and never stops the remaining targets.

use droid_fs::{NormalizedPath, io};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::diff::unified_diff;
use crate::error::Result;

/// How `find` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Literal,
    /// `find` is a regex; `replace` may use `$1`-style group references.
    Regex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionTarget {
    /// File path relative to the project root.
    pub path: String,
    pub find: String,
    pub replace: String,
    #[serde(default)]
    pub mode: MatchMode,
}

impl SubstitutionTarget {
    pub fn literal(
        path: impl Into<String>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            find: find.into(),
            replace: replace.into(),
            mode: MatchMode::Literal,
        }
    }

    pub fn regex(
        path: impl Into<String>,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            mode: MatchMode::Regex,
            ..Self::literal(path, find, replace)
        }
    }

    /// Check that `find` compiles, without touching any file.
    pub fn validate(&self) -> Result<()> {
        if self.mode == MatchMode::Regex {
            Regex::new(&self.find)?;
        }
        Ok(())
    }

    /// Replace every match in `content`, returning the new text and the
    /// number of matches.
    pub fn apply(&self, content: &str) -> Result<(String, usize)> {
        match self.mode {
            MatchMode::Literal if self.find.is_empty() => Ok((content.to_string(), 0)),
            MatchMode::Literal => {
                let count = content.matches(&self.find).count();
                Ok((content.replace(&self.find, &self.replace), count))
            }
            MatchMode::Regex => {
                let re = Regex::new(&self.find)?;
                let count = re.find_iter(content).count();
                Ok((re.replace_all(content, self.replace.as_str()).into_owned(), count))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubstitutionOutcome {
    /// Matches were replaced (or would be, on a dry run).
    Patched { replacements: usize },
    /// The file exists but the pattern does not occur.
    Unchanged,
    /// The file does not exist.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: SubstitutionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Apply one target under `root`.
///
/// With `dry_run` the file is left untouched and the report carries the
/// diff that would have been written.
pub fn patch_if_present(
    root: &NormalizedPath,
    target: &SubstitutionTarget,
    dry_run: bool,
) -> Result<SubstitutionReport> {
    let path = root.join(&target.path);

    let Some(content) = io::read_optional_text(&path)? else {
        tracing::warn!(path = %target.path, "Auxiliary target not found, skipping");
        return Ok(SubstitutionReport {
            path: target.path.clone(),
            outcome: SubstitutionOutcome::Skipped,
            diff: None,
        });
    };

    let (updated, replacements) = target.apply(&content)?;
    if replacements == 0 || updated == content {
        tracing::debug!(path = %target.path, "Pattern not found, nothing to replace");
        return Ok(SubstitutionReport {
            path: target.path.clone(),
            outcome: SubstitutionOutcome::Unchanged,
            diff: None,
        });
    }

    let diff = if dry_run {
        unified_diff(&target.path, &content, &updated)
    } else {
        io::write_text(&path, &updated)?;
        tracing::info!(path = %target.path, replacements, "Patched auxiliary target");
        None
    };

    Ok(SubstitutionReport {
        path: target.path.clone(),
        outcome: SubstitutionOutcome::Patched { replacements },
        diff,
    })
}

/// Apply every target in order. Only I/O and pattern errors abort.
///
/// Patterns are not pre-checked here; [`crate::Pipeline::run`] validates
/// them before anything is written.
pub fn patch_all(
    root: &NormalizedPath,
    targets: &[SubstitutionTarget],
    dry_run: bool,
) -> Result<Vec<SubstitutionReport>> {
    targets
        .iter()
        .map(|target| patch_if_present(root, target, dry_run))
        .collect()
}
