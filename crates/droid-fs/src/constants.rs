//! Well-known paths inside an Android/Capacitor project.

use std::path::Path;

/// Standard project-relative paths the patcher works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The application module's Gradle build file
    AppBuildGradle,
    /// JSON record holding `versionCode` and `versionName`
    VersionFile,
    /// Keystore properties file, resolved by Gradle against the root project
    KeyProperties,
    /// Optional droidpatch configuration
    ConfigFile,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppBuildGradle => "android/app/build.gradle",
            Self::VersionFile => "android-version.json",
            Self::KeyProperties => "key.properties",
            Self::ConfigFile => "droidpatch.toml",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
