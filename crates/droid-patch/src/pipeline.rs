//! Composition of the patching stages against a project root.
//!
//! The main build file is read once, taken through the signing and
//! version stages in memory, and written back at most once. A fatal error
//! in any stage therefore leaves it untouched. Auxiliary targets are
//! independent files and run last; their patterns are validated before
//! the build file is written.

use droid_fs::{NormalizedPath, io};
use serde::Serialize;

use crate::anchor::{AnchorKind, AnchorScan};
use crate::config::PatchConfig;
use crate::diff::unified_diff;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::patcher::{PatchOutcome, StructuralPatcher};
use crate::substitution::{self, SubstitutionReport};
use crate::version::{self, VersionInfo};

/// Which stages a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stages {
    pub signing: bool,
    pub version: bool,
    pub targets: bool,
}

impl Stages {
    pub const ALL: Stages = Stages {
        signing: true,
        version: true,
        targets: true,
    };
    pub const SIGNING: Stages = Stages {
        signing: true,
        version: false,
        targets: false,
    };
    pub const VERSION: Stages = Stages {
        signing: false,
        version: true,
        targets: false,
    };
    pub const TARGETS: Stages = Stages {
        signing: false,
        version: false,
        targets: true,
    };

    fn touches_build_file(&self) -> bool {
        self.signing || self.version
    }
}

impl Default for Stages {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub stages: Stages,
    /// Compute everything, write nothing.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SigningOutcome {
    Applied { inserted_lines: usize },
    AlreadyApplied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StampOutcome {
    Stamped {
        version_code: u32,
        version_name: String,
    },
    /// The record was loaded but the build file already carries it, or
    /// has neither scalar.
    Unchanged,
    /// No version record on disk.
    Skipped { version_file: String },
}

/// Everything a run did, or would have done on a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub build_file: String,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing: Option<SigningOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<StampOutcome>,
    /// True if the build file changed (or would change, on a dry run).
    pub build_file_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_file_diff: Option<String>,
    pub targets: Vec<SubstitutionReport>,
}

impl RunReport {
    pub fn skipped_targets(&self) -> impl Iterator<Item = &SubstitutionReport> {
        self.targets
            .iter()
            .filter(|r| r.outcome == substitution::SubstitutionOutcome::Skipped)
    }
}

/// Status of one anchor in a [`CheckReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorStatus {
    pub kind: AnchorKind,
    pub pattern: String,
    /// 1-based line number, if found.
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetStatus {
    pub path: String,
    pub present: bool,
    pub matches: usize,
}

/// Read-only view of what a run would find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub build_file: String,
    pub build_file_exists: bool,
    pub signing_configured: bool,
    pub anchors: Vec<AnchorStatus>,
    pub version_file: String,
    pub version: Option<VersionInfo>,
    pub targets: Vec<TargetStatus>,
}

impl CheckReport {
    /// True when `apply` would succeed.
    pub fn is_ready(&self) -> bool {
        self.build_file_exists
            && (self.signing_configured || self.anchors.iter().all(|a| a.line.is_some()))
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    root: NormalizedPath,
    config: PatchConfig,
}

impl Pipeline {
    pub fn new(root: NormalizedPath, config: PatchConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn run(&self, options: RunOptions) -> Result<RunReport> {
        let mut report = RunReport {
            build_file: self.config.build_file.clone(),
            dry_run: options.dry_run,
            signing: None,
            version: None,
            build_file_changed: false,
            build_file_diff: None,
            targets: Vec::new(),
        };

        // Every fatal condition must surface before the first write.
        if options.stages.targets {
            for target in &self.config.targets {
                target.validate()?;
            }
        }

        if options.stages.touches_build_file() {
            self.run_build_file(options, &mut report)?;
        }

        if options.stages.targets {
            report.targets =
                substitution::patch_all(&self.root, &self.config.targets, options.dry_run)?;
        }

        Ok(report)
    }

    fn run_build_file(&self, options: RunOptions, report: &mut RunReport) -> Result<()> {
        let path = self.config.build_file_path(&self.root);
        let original = io::read_optional_text(&path)?.ok_or_else(|| Error::MissingFile {
            path: path.to_native(),
        })?;
        let mut content = original.clone();

        if options.stages.signing {
            let patcher = StructuralPatcher::signing(&self.config.signing)?;
            report.signing = Some(match patcher.patch_content(&content, &path.to_native())? {
                PatchOutcome::AlreadyApplied => SigningOutcome::AlreadyApplied,
                PatchOutcome::Patched {
                    content: patched,
                    inserted_lines,
                } => {
                    content = patched;
                    SigningOutcome::Applied { inserted_lines }
                }
            });
        }

        if options.stages.version {
            let version_path = self.config.version_file_path(&self.root);
            report.version = Some(match version::load_version(&version_path)? {
                None => {
                    tracing::warn!(path = %version_path, "Version file not found, skipping");
                    StampOutcome::Skipped {
                        version_file: self.config.version_file.clone(),
                    }
                }
                Some(info) => {
                    let stamped = version::stamp_version(&content, &info);
                    if stamped == content {
                        StampOutcome::Unchanged
                    } else {
                        content = stamped;
                        StampOutcome::Stamped {
                            version_code: info.version_code,
                            version_name: info.version_name,
                        }
                    }
                }
            });
        }

        if content != original {
            report.build_file_changed = true;
            if options.dry_run {
                report.build_file_diff = unified_diff(&self.config.build_file, &original, &content);
            } else {
                io::write_text(&path, &content)?;
                tracing::info!(path = %path, "Build file updated");
            }
        }

        Ok(())
    }

    /// Inspect the project without writing anything.
    pub fn check(&self) -> Result<CheckReport> {
        let path = self.config.build_file_path(&self.root);
        let content = io::read_optional_text(&path)?;
        let patterns = self.config.signing.anchor_patterns();

        let (signing_configured, scan) = match &content {
            Some(text) => {
                let doc = Document::parse(text);
                (
                    doc.contains(&self.config.signing.marker),
                    AnchorScan::scan(&doc, &patterns),
                )
            }
            None => (false, AnchorScan::default()),
        };

        let anchors = AnchorKind::ALL
            .iter()
            .map(|kind| AnchorStatus {
                kind: *kind,
                pattern: patterns.pattern(*kind).to_string(),
                line: scan.line(*kind).map(|idx| idx + 1),
            })
            .collect();

        let version = version::load_version(&self.config.version_file_path(&self.root))?;

        let mut targets = Vec::with_capacity(self.config.targets.len());
        for target in &self.config.targets {
            let text = io::read_optional_text(&self.root.join(&target.path))?;
            let matches = match &text {
                Some(text) => target.apply(text)?.1,
                None => 0,
            };
            targets.push(TargetStatus {
                path: target.path.clone(),
                present: text.is_some(),
                matches,
            });
        }

        Ok(CheckReport {
            build_file: self.config.build_file.clone(),
            build_file_exists: content.is_some(),
            signing_configured,
            anchors,
            version_file: self.config.version_file.clone(),
            version,
            targets,
        })
    }

    /// Increment the version code in the configured version record.
    pub fn bump_version(&self) -> Result<version::VersionBump> {
        version::bump_version(&self.config.version_file_path(&self.root))
    }
}
