//! Shared test utilities for the droidpatch workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: sample build files
//! - [`project`]: [`TestProject`](project::TestProject) builder for an
//!   Android project on disk

pub mod fixtures;
pub mod project;

pub use project::TestProject;
