//! Sample file contents used across test suites.

/// A stock Capacitor `android/app/build.gradle`.
pub const CAPACITOR_BUILD_GRADLE: &str =
    include_str!("../../../test-fixtures/android/app/build.gradle");

/// The smallest build file carrying all three anchors:
/// `[L0, L1, plugin, L3, buildTypes {, release {, L6]`.
pub const MINIMAL_BUILD_GRADLE: &str = concat!(
    "// L0\n",
    "// L1\n",
    "apply plugin: 'com.android.application'\n",
    "// L3\n",
    "    buildTypes {\n",
    "        release {\n",
    "// L6\n",
);

/// A generated Capacitor build file pinning Java 21.
pub const GENERATED_CAPACITOR_GRADLE: &str = concat!(
    "android {\n",
    "    compileOptions {\n",
    "        sourceCompatibility JavaVersion.VERSION_21\n",
    "        targetCompatibility JavaVersion.VERSION_21\n",
    "    }\n",
    "}\n",
);

/// Render an `android-version.json` body.
pub fn version_json(version_code: u32, version_name: &str) -> String {
    format!(
        "{{\n  \"versionCode\": {version_code},\n  \"versionName\": \"{version_name}\"\n}}\n"
    )
}
