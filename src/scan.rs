//! Tag collection from content front matter.
//!
//! Walks the content directory after a site build and harvests every tag
//! named in the front-matter fields listed in `[scan].keys`. The result is
//! an order-stable set: first-seen order is preserved and duplicates are
//! dropped.
//!
//! The scan is best effort. A file that has no front matter, fails to
//! parse, or is not valid UTF-8 contributes nothing; it must not fail the
//! post-build step.

use crate::config::SiteConfig;
use anyhow::Result;
use rustc_hash::FxHashSet;
use std::{ffi::OsStr, fs, path::Path};
use walkdir::WalkDir;

// ============================================================================
// TagSet
// ============================================================================

/// Deduplicated tag collection preserving first-seen order.
#[derive(Debug, Default)]
pub struct TagSet {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl TagSet {
    /// Insert a tag. Returns false if it was already present.
    ///
    /// Comparison is case-sensitive: `Rust` and `rust` are distinct tags
    /// (they may still collide later at the slug level).
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.seen.contains(&tag) {
            return false;
        }
        self.seen.insert(tag.clone());
        self.order.push(tag);
        true
    }

    /// Iterate tags in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reorder tags lexicographically.
    pub fn sort(&mut self) {
        self.order.sort();
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Collect the tag set from the configured content directory.
///
/// Files are visited in lexicographic path order so the first-seen tag
/// order is stable across runs and platforms.
pub fn scan_tags(config: &SiteConfig) -> Result<TagSet> {
    let content = &config.build.content;
    let mut tags = TagSet::default();

    if !content.is_dir() {
        return Ok(tags);
    }

    for entry in WalkDir::new(content)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !has_scanned_extension(path, &config.scan.extensions) {
            continue;
        }
        let Ok(text) = fs::read_to_string(path) else {
            continue;
        };
        harvest_tags(&text, &config.scan.keys, &mut tags);
    }

    Ok(tags)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check whether a file's extension is in the scan list.
fn has_scanned_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Extract tags from one document's front matter into `tags`.
fn harvest_tags(text: &str, keys: &[String], tags: &mut TagSet) {
    let Some(block) = front_matter(text) else {
        return;
    };
    let Ok(doc) = serde_yaml::from_str::<serde_yaml::Value>(block) else {
        return;
    };

    for key in keys {
        match doc.get(key.as_str()) {
            Some(serde_yaml::Value::Sequence(seq)) => {
                for value in seq {
                    if let Some(tag) = value.as_str() {
                        tags.insert(tag);
                    }
                }
            }
            Some(serde_yaml::Value::String(tag)) => {
                tags.insert(tag.as_str());
            }
            _ => {}
        }
    }
}

/// Slice out the leading `---`-fenced front-matter block, if any.
fn front_matter(text: &str) -> Option<&str> {
    let rest = text.trim_start().strip_prefix("---")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

// ============================================================================
// Tests
// ============================================================================
