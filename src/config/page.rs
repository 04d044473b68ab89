//! `[page]` section configuration.
//!
//! Shape of the generated category pages.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[page]` section in taxogen.toml - generated page settings.
///
/// # Example
/// ```toml
/// [page]
/// layout = "category"
/// permalink = "/categories"
/// slug_filenames = false
/// sorted = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Front-matter `layout` value of every generated page.
    #[serde(default = "defaults::page::layout")]
    #[educe(Default = defaults::page::layout())]
    pub layout: String,

    /// URL prefix for the front-matter `parmalink` field.
    /// Must start with `/`.
    #[serde(default = "defaults::page::permalink")]
    #[educe(Default = defaults::page::permalink())]
    pub permalink: String,

    /// Name generated files with the slug instead of the raw tag.
    ///
    /// Off by default: the file keeps the raw tag name while the permalink
    /// uses the slug, matching the upstream generator this tool replaces.
    /// Raw tags containing path separators will escape the collection
    /// directory or fail the write; turn this on to rule that out.
    #[serde(default)]
    pub slug_filenames: bool,

    /// Sort tags lexicographically instead of keeping first-seen order.
    #[serde(default)]
    pub sorted: bool,
}
