use droid_fs::{NormalizedPath, ProjectPath};
use rstest::rstest;

#[rstest]
#[case("android/app/build.gradle", "android/app/build.gradle")]
#[case("android\\app\\build.gradle", "android/app/build.gradle")]
#[case("android/app\\build.gradle", "android/app/build.gradle")]
fn test_normalize_separators(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("/project");
    let joined = base.join(ProjectPath::AppBuildGradle.as_str());
    assert_eq!(joined.as_str(), "/project/android/app/build.gradle");
}

#[test]
fn test_join_trailing_slash() {
    let base = NormalizedPath::new("/project/");
    assert_eq!(base.join("key.properties").as_str(), "/project/key.properties");
}

#[test]
fn test_join_empty_segment_is_identity() {
    let base = NormalizedPath::new("/project");
    assert_eq!(base.join(""), base);
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("android/app/build.gradle");
    assert_eq!(path.file_name(), Some("build.gradle"));
}

#[rstest]
#[case("droidpatch.toml", Some("toml"))]
#[case("android-version.json", Some("json"))]
#[case(".hidden", None)]
#[case("Makefile", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_canonicalize_missing_path_fails() {
    let result = NormalizedPath::canonicalize("/nonexistent/path/that/does/not/exist");
    assert!(result.is_err());
}

#[test]
fn test_canonicalize_existing_dir() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = NormalizedPath::canonicalize(temp.path()).unwrap();
    assert!(path.to_native().is_dir());
}
