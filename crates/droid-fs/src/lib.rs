//! Filesystem layer for droidpatch
//!
//! Provides normalized path handling, atomic writes and format-agnostic
//! config loading for the patching crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
