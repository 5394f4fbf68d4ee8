//! Anchor discovery.
//!
//! Anchors are located by plain substring search over the document's
//! lines. The Gradle grammar is never parsed; the only structure tracked
//! is brace depth, to keep the `release {` search inside the
//! `buildTypes { ... }` block.

use serde::{Deserialize, Serialize};

use crate::document::Document;

pub const DEFAULT_PLUGIN_PATTERN: &str = "apply plugin: 'com.android.application'";
pub const DEFAULT_BUILD_TYPES_PATTERN: &str = "buildTypes {";
pub const DEFAULT_RELEASE_PATTERN: &str = "release {";

/// The structural points insertion blocks are positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    PluginDeclaration,
    BuildTypesBlock,
    ReleaseBlock,
}

impl AnchorKind {
    pub const ALL: [AnchorKind; 3] = [
        AnchorKind::PluginDeclaration,
        AnchorKind::BuildTypesBlock,
        AnchorKind::ReleaseBlock,
    ];
}

impl std::fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PluginDeclaration => "plugin declaration",
            Self::BuildTypesBlock => "buildTypes block",
            Self::ReleaseBlock => "release build type",
        };
        f.write_str(name)
    }
}

/// The substrings that identify each anchor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPatterns {
    pub plugin: String,
    pub build_types: String,
    pub release: String,
}

impl Default for AnchorPatterns {
    fn default() -> Self {
        Self {
            plugin: DEFAULT_PLUGIN_PATTERN.to_string(),
            build_types: DEFAULT_BUILD_TYPES_PATTERN.to_string(),
            release: DEFAULT_RELEASE_PATTERN.to_string(),
        }
    }
}

impl AnchorPatterns {
    pub fn pattern(&self, kind: AnchorKind) -> &str {
        match kind {
            AnchorKind::PluginDeclaration => &self.plugin,
            AnchorKind::BuildTypesBlock => &self.build_types,
            AnchorKind::ReleaseBlock => &self.release,
        }
    }
}

/// An anchor that was looked for and not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsentAnchor {
    pub kind: AnchorKind,
    pub pattern: String,
}

impl std::fmt::Display for AbsentAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.pattern)
    }
}

/// Zero-based line indices of the anchors found in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorScan {
    plugin: Option<usize>,
    build_types: Option<usize>,
    release: Option<usize>,
}

impl AnchorScan {
    /// Scan `doc` top to bottom for the first match of each pattern.
    ///
    /// The release anchor is only searched for inside the block opened on
    /// the build-types line: an earlier `release {` elsewhere in the file,
    /// or one after the block closes, is ignored.
    pub fn scan(doc: &Document, patterns: &AnchorPatterns) -> Self {
        let plugin = doc.find_from(0, &patterns.plugin);
        let build_types = doc.find_from(0, &patterns.build_types);
        let release = build_types.and_then(|start| find_nested(doc, start, &patterns.release));

        tracing::debug!(?plugin, ?build_types, ?release, "Anchor scan complete");

        Self {
            plugin,
            build_types,
            release,
        }
    }

    pub fn line(&self, kind: AnchorKind) -> Option<usize> {
        match kind {
            AnchorKind::PluginDeclaration => self.plugin,
            AnchorKind::BuildTypesBlock => self.build_types,
            AnchorKind::ReleaseBlock => self.release,
        }
    }

    pub fn is_complete(&self) -> bool {
        AnchorKind::ALL.iter().all(|kind| self.line(*kind).is_some())
    }

    /// Every anchor that was not found, in declaration order.
    pub fn absent(&self, patterns: &AnchorPatterns) -> Vec<AbsentAnchor> {
        AnchorKind::ALL
            .iter()
            .filter(|kind| self.line(**kind).is_none())
            .map(|kind| AbsentAnchor {
                kind: *kind,
                pattern: patterns.pattern(*kind).to_string(),
            })
            .collect()
    }
}

/// First line after `start` containing `pattern` that sits directly inside
/// the block opened at or after `start`.
///
/// Lines in deeper blocks (a `release {` inside `debug { ... }`) are not
/// candidates. The search ends when the block closes.
fn find_nested(doc: &Document, start: usize, pattern: &str) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut opened = false;

    for (idx, line) in doc.lines().iter().enumerate().skip(start) {
        if idx > start && opened && depth == 1 && line.contains(pattern) {
            return Some(idx);
        }
        depth += brace_delta(line);
        if depth > 0 {
            opened = true;
        } else if opened {
            return None;
        }
    }

    None
}

fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}
