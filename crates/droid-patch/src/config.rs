//! droidpatch configuration.
//!
//! Every field has a default, so a project without a `droidpatch.toml`
//! gets the stock Capacitor layout.

use droid_fs::{ConfigStore, NormalizedPath, ProjectPath};
use serde::{Deserialize, Serialize};

use crate::anchor::{
    AnchorPatterns, DEFAULT_BUILD_TYPES_PATTERN, DEFAULT_PLUGIN_PATTERN, DEFAULT_RELEASE_PATTERN,
};
use crate::block::DEFAULT_MARKER;
use crate::error::{Error, Result};
use crate::substitution::SubstitutionTarget;

/// Java version constant emitted by generated Capacitor build files.
pub const GENERATED_JAVA_VERSION: &str = "JavaVersion.VERSION_21";
/// Java version the app toolchain is pinned to.
pub const PINNED_JAVA_VERSION: &str = "JavaVersion.VERSION_17";

/// Dependency-generated build files that carry the Java version constant.
pub const GENERATED_BUILD_FILES: [&str; 3] = [
    "android/app/capacitor.build.gradle",
    "android/capacitor-cordova-android-plugins/build.gradle",
    "node_modules/@capacitor/android/capacitor/build.gradle",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Main build file, relative to the project root.
    pub build_file: String,
    /// JSON version record, relative to the project root.
    pub version_file: String,
    pub signing: SigningSettings,
    /// Auxiliary find/replace targets. Replaces the default list entirely
    /// when given.
    pub targets: Vec<SubstitutionTarget>,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            build_file: ProjectPath::AppBuildGradle.as_str().to_string(),
            version_file: ProjectPath::VersionFile.as_str().to_string(),
            signing: SigningSettings::default(),
            targets: GENERATED_BUILD_FILES
                .iter()
                .map(|path| {
                    SubstitutionTarget::literal(*path, GENERATED_JAVA_VERSION, PINNED_JAVA_VERSION)
                })
                .collect(),
        }
    }
}

impl PatchConfig {
    /// Load the configuration for the project at `root`.
    ///
    /// An explicit path must exist. Without one, `droidpatch.toml` in the
    /// project root is used if present and defaults apply otherwise.
    pub fn load(root: &NormalizedPath, explicit: Option<&NormalizedPath>) -> Result<Self> {
        let store = ConfigStore::new();
        match explicit {
            Some(path) => store.load(path).map_err(|e| {
                if e.is_not_found() {
                    Error::MissingFile {
                        path: path.to_native(),
                    }
                } else {
                    e.into()
                }
            }),
            None => {
                let path = root.join(ProjectPath::ConfigFile.as_str());
                let config = store.load_optional(&path)?;
                if config.is_some() {
                    tracing::debug!(path = %path, "Loaded project configuration");
                }
                Ok(config.unwrap_or_default())
            }
        }
    }

    pub fn build_file_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.build_file)
    }

    pub fn version_file_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.version_file)
    }
}

/// Settings for the release-signing patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningSettings {
    /// Keystore properties path, resolved by Gradle against the root project.
    pub properties_file: String,
    pub marker: String,
    pub plugin_anchor: String,
    pub build_types_anchor: String,
    pub release_anchor: String,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            properties_file: ProjectPath::KeyProperties.as_str().to_string(),
            marker: DEFAULT_MARKER.to_string(),
            plugin_anchor: DEFAULT_PLUGIN_PATTERN.to_string(),
            build_types_anchor: DEFAULT_BUILD_TYPES_PATTERN.to_string(),
            release_anchor: DEFAULT_RELEASE_PATTERN.to_string(),
        }
    }
}

impl SigningSettings {
    pub fn anchor_patterns(&self) -> AnchorPatterns {
        AnchorPatterns {
            plugin: self.plugin_anchor.clone(),
            build_types: self.build_types_anchor.clone(),
            release: self.release_anchor.clone(),
        }
    }
}
