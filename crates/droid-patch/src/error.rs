//! Error types for droid-patch

use std::path::PathBuf;

use crate::anchor::AbsentAnchor;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] droid_fs::Error),

    #[error("Required file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("Could not find required sections in {path}: {}", describe_anchors(.missing))]
    MissingAnchor {
        path: PathBuf,
        missing: Vec<AbsentAnchor>,
    },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Idempotence marker must not be empty")]
    EmptyMarker,

    #[error("Idempotence marker {marker:?} does not occur in any insertion block")]
    MarkerNotInBlocks { marker: String },

    #[error("Insertion at line {index} is past the end of a {len}-line document")]
    InsertionOutOfBounds { index: usize, len: usize },

    #[error("versionCode {0} cannot be incremented")]
    VersionOverflow(u32),
}

fn describe_anchors(missing: &[AbsentAnchor]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
