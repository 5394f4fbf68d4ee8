//! Insertion blocks and the signing templates.

use crate::anchor::{AnchorKind, AnchorScan};
use crate::document::Insertion;

/// Placeholder replaced by the keystore properties path in templates.
pub const PROPERTIES_FILE_PLACEHOLDER: &str = "@PROPERTIES_FILE@";

/// Marker whose presence means signing is already configured.
pub const DEFAULT_MARKER: &str = "keystorePropertiesFile";

const KEYSTORE_TEMPLATE: &str = r#"
def keystorePropertiesFile = rootProject.file("@PROPERTIES_FILE@")
def keystoreProperties = new Properties()
if (keystorePropertiesFile.exists()) {
    keystoreProperties.load(new FileInputStream(keystorePropertiesFile))
}
"#;

const SIGNING_CONFIGS_TEMPLATE: &str = r#"
    signingConfigs {
        release {
            if (keystorePropertiesFile.exists()) {
                keyAlias keystoreProperties['keyAlias']
                keyPassword keystoreProperties['keyPassword']
                storeFile file(keystoreProperties['storeFile'])
                storePassword keystoreProperties['storePassword']
            }
        }
    }
"#;

const RELEASE_SIGNING_TEMPLATE: &str = r#"            if (keystorePropertiesFile.exists()) {
                signingConfig signingConfigs.release
            }
"#;

/// Where a block goes relative to its anchor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Directly below the anchor line.
    After,
    /// Directly above the anchor line.
    Before,
    /// `n` lines below the anchor line; `LinesAfter(1)` equals `After`.
    LinesAfter(usize),
}

impl Placement {
    pub fn target(&self, anchor_line: usize) -> usize {
        match self {
            Self::After => anchor_line + 1,
            Self::Before => anchor_line,
            Self::LinesAfter(n) => anchor_line + n,
        }
    }
}

/// A literal text template positioned against an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionBlock {
    pub anchor: AnchorKind,
    pub placement: Placement,
    pub text: String,
}

impl InsertionBlock {
    pub fn new(anchor: AnchorKind, placement: Placement, text: impl Into<String>) -> Self {
        Self {
            anchor,
            placement,
            text: text.into(),
        }
    }

    /// Resolve against a scan of the original document.
    ///
    /// Returns `None` if this block's anchor was not found.
    pub fn resolve(&self, scan: &AnchorScan) -> Option<Insertion> {
        scan.line(self.anchor)
            .map(|line| Insertion::new(self.placement.target(line), self.text.clone()))
    }
}

/// The three blocks that configure release signing from a properties file.
///
/// `properties_file` is inlined verbatim into the Gradle source.
pub fn signing_blocks(properties_file: &str) -> Vec<InsertionBlock> {
    vec![
        InsertionBlock::new(
            AnchorKind::PluginDeclaration,
            Placement::After,
            KEYSTORE_TEMPLATE.replace(PROPERTIES_FILE_PLACEHOLDER, properties_file),
        ),
        InsertionBlock::new(
            AnchorKind::BuildTypesBlock,
            Placement::Before,
            SIGNING_CONFIGS_TEMPLATE,
        ),
        InsertionBlock::new(
            AnchorKind::ReleaseBlock,
            Placement::After,
            RELEASE_SIGNING_TEMPLATE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_targets() {
        assert_eq!(Placement::After.target(4), 5);
        assert_eq!(Placement::Before.target(4), 4);
        assert_eq!(Placement::LinesAfter(3).target(4), 7);
        assert_eq!(Placement::LinesAfter(1).target(4), Placement::After.target(4));
    }

    #[test]
    fn test_signing_blocks_inline_properties_path() {
        let blocks = signing_blocks("signing/release.properties");
        assert!(blocks[0]
            .text
            .contains(r#"rootProject.file("signing/release.properties")"#));
        assert!(!blocks[0].text.contains(PROPERTIES_FILE_PLACEHOLDER));
    }

    #[test]
    fn test_every_signing_block_carries_marker() {
        for block in signing_blocks("key.properties") {
            assert!(block.text.contains(DEFAULT_MARKER), "{:?}", block.anchor);
        }
    }
}
