//! The idempotent structural patcher.
//!
//! Locates the anchor lines of a build file and splices the configured
//! insertion blocks in around them. A marker string guards the whole
//! operation: once it is present the patcher leaves the file alone, so
//! running it repeatedly is always safe.

use std::path::Path;

use droid_fs::{NormalizedPath, io};

use crate::anchor::{AnchorPatterns, AnchorScan};
use crate::block::{InsertionBlock, signing_blocks};
use crate::config::SigningSettings;
use crate::document::Document;
use crate::error::{Error, Result};

/// Result of a successful patch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The marker was already present; nothing changed.
    AlreadyApplied,
    /// Every block was inserted.
    Patched {
        content: String,
        inserted_lines: usize,
    },
}

#[derive(Debug, Clone)]
pub struct StructuralPatcher {
    marker: String,
    patterns: AnchorPatterns,
    blocks: Vec<InsertionBlock>,
}

impl StructuralPatcher {
    /// Build a patcher from explicit parts.
    ///
    /// # Errors
    /// Returns `Error::EmptyMarker` for an empty marker, which every
    /// document contains, and `Error::MarkerNotInBlocks` if none of the
    /// blocks contains the marker, since such a patcher would insert again
    /// on every run.
    pub fn new(
        marker: impl Into<String>,
        patterns: AnchorPatterns,
        blocks: Vec<InsertionBlock>,
    ) -> Result<Self> {
        let marker = marker.into();
        if marker.trim().is_empty() {
            return Err(Error::EmptyMarker);
        }
        if !blocks.iter().any(|block| block.text.contains(&marker)) {
            return Err(Error::MarkerNotInBlocks { marker });
        }
        Ok(Self {
            marker,
            patterns,
            blocks,
        })
    }

    /// The release-signing patcher described by `settings`.
    pub fn signing(settings: &SigningSettings) -> Result<Self> {
        Self::new(
            settings.marker.clone(),
            settings.anchor_patterns(),
            signing_blocks(&settings.properties_file),
        )
    }

    /// Patch in-memory content.
    ///
    /// # Errors
    /// Returns `Error::MissingAnchor` listing every anchor that could not
    /// be found. The marker check runs first, so already-patched content
    /// never fails.
    pub fn patch(&self, content: &str) -> Result<PatchOutcome> {
        self.patch_content(content, Path::new("<content>"))
    }

    pub(crate) fn patch_content(&self, content: &str, origin: &Path) -> Result<PatchOutcome> {
        let mut doc = Document::parse(content);
        let scan = AnchorScan::scan(&doc, &self.patterns);

        if doc.contains(&self.marker) {
            tracing::debug!(origin = %origin.display(), marker = %self.marker, "Marker present, skipping");
            return Ok(PatchOutcome::AlreadyApplied);
        }

        let missing = scan.absent(&self.patterns);
        if !missing.is_empty() {
            return Err(Error::MissingAnchor {
                path: origin.to_path_buf(),
                missing,
            });
        }

        let insertions = self
            .blocks
            .iter()
            .filter_map(|block| block.resolve(&scan))
            .collect::<Vec<_>>();
        tracing::debug!(
            targets = ?insertions.iter().map(|i| i.index).collect::<Vec<_>>(),
            "Applying insertions"
        );

        let inserted_lines = doc.insert_all(insertions)?;

        Ok(PatchOutcome::Patched {
            content: doc.to_text(),
            inserted_lines,
        })
    }

    /// Patch a file in place.
    ///
    /// Reads the file once and, unless the marker is already present,
    /// replaces it atomically. Nothing is written on any error.
    pub fn patch_file(&self, path: &NormalizedPath) -> Result<PatchOutcome> {
        let content = io::read_optional_text(path)?.ok_or_else(|| Error::MissingFile {
            path: path.to_native(),
        })?;

        let outcome = self.patch_content(&content, &path.to_native())?;
        if let PatchOutcome::Patched {
            content,
            inserted_lines,
        } = &outcome
        {
            io::write_text(path, content)?;
            tracing::info!(path = %path, inserted_lines, "Signing configuration applied");
        }

        Ok(outcome)
    }
}
