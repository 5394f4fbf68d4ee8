//! Version record loading, stamping and bumping.

use std::sync::LazyLock;

use droid_fs::{ConfigStore, NormalizedPath};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static VERSION_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(versionCode\s+)\d+").expect("Invalid versionCode regex")
});

// Groovy accepts either quote style; group 2 is set for a double-quoted name.
static VERSION_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(versionName\s+)(?:(")(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#)
        .expect("Invalid versionName regex")
});

/// The `android-version.json` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version_code: u32,
    pub version_name: String,
    /// Any other keys in the record, kept so a bump does not drop them.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VersionInfo {
    pub fn new(version_code: u32, version_name: impl Into<String>) -> Self {
        Self {
            version_code,
            version_name: version_name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Load the version record, or `None` if the file does not exist.
pub fn load_version(path: &NormalizedPath) -> Result<Option<VersionInfo>> {
    Ok(ConfigStore::new().load_optional(path)?)
}

/// Overwrite the `versionCode` and `versionName` scalars in build-file text.
///
/// Only the literal following each keyword changes; the rest of the text,
/// other numbers and strings included, is left as is. A name keeps the
/// quote style it was written with. Text without either keyword comes back
/// unchanged.
pub fn stamp_version(content: &str, info: &VersionInfo) -> String {
    let with_code = VERSION_CODE_REGEX.replace_all(content, |caps: &Captures| {
        format!("{}{}", &caps[1], info.version_code)
    });

    VERSION_NAME_REGEX
        .replace_all(&with_code, |caps: &Captures| {
            let quote = if caps.get(2).is_some() { '"' } else { '\'' };
            format!(
                "{}{quote}{}{quote}",
                &caps[1],
                escape_quoted(&info.version_name, quote)
            )
        })
        .into_owned()
}

fn escape_quoted(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Outcome of [`bump_version`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionBump {
    pub previous_code: u32,
    pub current: VersionInfo,
}

/// Increment `versionCode` in the record at `path` and write it back.
///
/// # Errors
/// Returns `Error::MissingFile` if the record does not exist and
/// `Error::VersionOverflow` if the code is already `u32::MAX`.
pub fn bump_version(path: &NormalizedPath) -> Result<VersionBump> {
    let mut info = load_version(path)?.ok_or_else(|| Error::MissingFile {
        path: path.to_native(),
    })?;

    let previous_code = info.version_code;
    info.version_code = previous_code
        .checked_add(1)
        .ok_or(Error::VersionOverflow(previous_code))?;

    ConfigStore::new().save(path, &info)?;
    tracing::info!(path = %path, from = previous_code, to = info.version_code, "Version code incremented");

    Ok(VersionBump {
        previous_code,
        current: info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stamp_replaces_both_scalars() {
        let content = "        versionCode 1\n        versionName \"0.0.1\"\n";
        let stamped = stamp_version(content, &VersionInfo::new(42, "2.3.1"));
        assert_eq!(stamped, "        versionCode 42\n        versionName \"2.3.1\"\n");
    }

    #[test]
    fn test_stamp_ignores_lookalike_identifiers() {
        let content = "def minVersionCode 3\nversionCodeOverride 9\nversionCode 1\n";
        let stamped = stamp_version(content, &VersionInfo::new(5, "x"));
        assert_eq!(stamped, "def minVersionCode 3\nversionCodeOverride 9\nversionCode 5\n");
    }

    #[test]
    fn test_stamp_escapes_quotes_in_name() {
        let stamped = stamp_version("versionName \"a\"", &VersionInfo::new(1, "2.0 \"beta\""));
        assert_eq!(stamped, r#"versionName "2.0 \"beta\"""#);
    }

    #[test]
    fn test_stamp_keeps_single_quotes() {
        let content = "        versionCode 1\n        versionName '0.0.1'\n";
        let stamped = stamp_version(content, &VersionInfo::new(9, "it's 2.0"));
        assert_eq!(stamped, "        versionCode 9\n        versionName 'it\\'s 2.0'\n");
    }

    #[test]
    fn test_stamp_treats_dollar_literally() {
        let stamped = stamp_version("versionName \"a\"", &VersionInfo::new(1, "$1"));
        assert_eq!(stamped, "versionName \"$1\"");
    }

    #[test]
    fn test_stamp_without_keywords_is_noop() {
        let content = "android {\n    compileSdk 34\n}\n";
        assert_eq!(stamp_version(content, &VersionInfo::new(7, "7.0")), content);
    }
}
