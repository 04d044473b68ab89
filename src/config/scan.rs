//! `[scan]` section configuration.
//!
//! Controls which files are scanned for tags and which front-matter
//! fields are harvested.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[scan]` section in taxogen.toml - tag harvesting settings.
///
/// # Example
/// ```toml
/// [scan]
/// keys = ["tags", "categories"]
/// extensions = ["md", "html"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Front-matter fields harvested for tags.
    #[serde(default = "defaults::scan::keys")]
    #[educe(Default = defaults::scan::keys())]
    pub keys: Vec<String>,

    /// File extensions scanned in the content directory.
    #[serde(default = "defaults::scan::extensions")]
    #[educe(Default = defaults::scan::extensions())]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_scan_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.scan.keys, vec!["tags", "categories"]);
        assert_eq!(config.scan.extensions, vec!["md", "html"]);
    }

    #[test]
    fn test_scan_config_full() {
        let config = r#"
            [scan]
            keys = ["topics"]
            extensions = ["markdown", "md", "typ"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.scan.keys, vec!["topics"]);
        assert_eq!(config.scan.extensions, vec!["markdown", "md", "typ"]);
    }
}
