//! Project root detection
//!
//! Lets commands run from anywhere inside an Android project, the way
//! `git` works from any subdirectory.

use std::path::{Path, PathBuf};

use droid_fs::ProjectPath;

/// How the project root was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectContext {
    /// An ancestor holds `droidpatch.toml`
    Configured { path: PathBuf },

    /// An ancestor holds `android/app/build.gradle`
    Android { path: PathBuf },

    /// No marker found anywhere up the tree
    Unknown,
}

impl ProjectContext {
    pub fn root_path(&self) -> Option<&Path> {
        match self {
            ProjectContext::Configured { path } | ProjectContext::Android { path } => Some(path),
            ProjectContext::Unknown => None,
        }
    }
}

/// Walk up from `cwd` to the nearest directory that looks like a project root.
///
/// A config file takes precedence over a build file in the same directory.
pub fn detect_context(cwd: &Path) -> ProjectContext {
    detect_context_within(cwd, None)
}

/// Like [`detect_context`], but directories above `ceiling` are not
/// searched.
fn detect_context_within(cwd: &Path, ceiling: Option<&Path>) -> ProjectContext {
    for dir in cwd.ancestors() {
        if ceiling.is_some_and(|ceiling| !dir.starts_with(ceiling)) {
            break;
        }
        if dir.join(ProjectPath::ConfigFile.as_str()).is_file() {
            return ProjectContext::Configured {
                path: dir.to_path_buf(),
            };
        }
        if dir.join(ProjectPath::AppBuildGradle.as_str()).is_file() {
            return ProjectContext::Android {
                path: dir.to_path_buf(),
            };
        }
    }

    ProjectContext::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_android_root_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("android/app/src/main")).unwrap();
        fs::write(temp.path().join("android/app/build.gradle"), "").unwrap();

        let ctx = detect_context(&temp.path().join("android/app/src/main"));

        assert_eq!(
            ctx,
            ProjectContext::Android {
                path: temp.path().to_path_buf()
            }
        );
    }

    #[test]
    fn test_config_file_marks_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("web/src")).unwrap();
        fs::write(temp.path().join("droidpatch.toml"), "").unwrap();

        let ctx = detect_context(&temp.path().join("web/src"));

        assert_eq!(ctx.root_path(), Some(temp.path()));
        assert!(matches!(ctx, ProjectContext::Configured { .. }));
    }

    #[test]
    fn test_unknown_without_markers() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("web/src");
        fs::create_dir_all(&nested).unwrap();

        let ctx = detect_context_within(&nested, Some(temp.path()));

        assert_eq!(ctx, ProjectContext::Unknown);
        assert_eq!(ctx.root_path(), None);
    }

    #[test]
    fn test_ceiling_itself_is_searched() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("android/app")).unwrap();
        fs::write(temp.path().join("android/app/build.gradle"), "").unwrap();

        let ctx = detect_context_within(&temp.path().join("android"), Some(temp.path()));

        assert_eq!(
            ctx,
            ProjectContext::Android {
                path: temp.path().to_path_buf()
            }
        );
    }
}
