//! `[build]` section configuration.
//!
//! Directory layout of the site this tool runs against.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in taxogen.toml - site directory layout.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"
/// categories = "categories"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Site root directory. Set from the CLI, not the config file.
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory scanned for tagged documents, relative to root.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Category collection directory, relative to root.
    ///
    /// Owned by the regenerator: recursively deleted and recreated on
    /// every run. Must never point at a directory holding anything other
    /// than generated category pages.
    #[serde(default = "defaults::build::categories")]
    #[educe(Default = defaults::build::categories())]
    pub categories: PathBuf,
}
