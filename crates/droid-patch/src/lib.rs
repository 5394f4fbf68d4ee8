//! Idempotent Gradle build-file patching for droidpatch.
//!
//! The core is the [`StructuralPatcher`]: it finds three anchor lines in an
//! Android app's `build.gradle` (the application plugin declaration, the
//! `buildTypes {` block and the `release {` build type inside it) and
//! inserts the release-signing blocks around them. A marker string makes
//! the operation idempotent.
//!
//! Around it sit two simpler transforms:
//!
//! - [`substitution`]: literal or regex find/replace over a list of
//!   optional auxiliary files (the Java version pin in generated Capacitor
//!   build files by default).
//! - [`version`]: stamping `versionCode`/`versionName` from
//!   `android-version.json`, and bumping the code in that record.
//!
//! [`Pipeline`] composes the three against a project root so the main
//! build file is written at most once per run.

pub mod anchor;
pub mod block;
pub mod config;
pub mod diff;
pub mod document;
pub mod error;
pub mod patcher;
pub mod pipeline;
pub mod substitution;
pub mod version;

pub use anchor::{AbsentAnchor, AnchorKind, AnchorPatterns, AnchorScan};
pub use block::{InsertionBlock, Placement, signing_blocks};
pub use config::{PatchConfig, SigningSettings};
pub use document::{Document, Insertion};
pub use error::{Error, Result};
pub use patcher::{PatchOutcome, StructuralPatcher};
pub use pipeline::{
    CheckReport, Pipeline, RunOptions, RunReport, SigningOutcome, Stages, StampOutcome,
};
pub use substitution::{
    MatchMode, SubstitutionOutcome, SubstitutionReport, SubstitutionTarget, patch_if_present,
};
pub use version::{VersionBump, VersionInfo, bump_version, stamp_version};
