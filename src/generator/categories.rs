//! Category page regeneration.
//!
//! Runs once after a site build. Wipes the category collection directory
//! and writes one stub page per known tag; the host site generator picks
//! the stubs up on its next pass and renders them with the category layout.
//!
//! # Generated page format
//!
//! ```text
//! ---
//! layout: category
//! parmalink: "/categories/go-lang"
//! category: Go Lang
//! ---
//! ```
//!
//! The directory is fully owned by this module between the delete and the
//! last write: no stale page survives a run, and a failed run may leave
//! partial output behind (the next run starts from the wipe again).

use crate::{
    config::SiteConfig,
    log,
    scan::TagSet,
    utils::slug::{escape_path, slugify},
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

// ============================================================================
// Public API
// ============================================================================

/// Result of one regeneration run, for the caller's final log line.
#[derive(Debug)]
pub struct RegenSummary {
    /// The collection directory that was wiped and recreated.
    pub dir: PathBuf,
    /// Number of pages written.
    pub pages: usize,
}

/// Wipe and regenerate the category collection directory.
///
/// The directory's parent must already exist; any filesystem error aborts
/// the run immediately and may leave partial output.
pub fn regenerate(config: &SiteConfig, tags: &TagSet) -> Result<RegenSummary> {
    let dir = &config.build.categories;

    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to delete {}", dir.display()))?;
        log!("categories"; "delete {}", dir.display());
    }

    fs::create_dir(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    log!("categories"; "create {}", dir.display());

    let mut pages = 0;
    for tag in tags.iter() {
        let file = dir.join(page_file_name(tag, config));
        fs::write(&file, page_content(tag, config))
            .with_context(|| format!("Failed to write {}", file.display()))?;
        log!("categories"; "generated {}", file.display());
        pages += 1;
    }

    Ok(RegenSummary {
        dir: dir.clone(),
        pages,
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// File name for a tag's page: the raw tag by default, the slug when
/// `[page].slug_filenames` is on.
fn page_file_name(tag: &str, config: &SiteConfig) -> String {
    if config.page.slug_filenames {
        format!("{}.html", slugify(tag))
    } else {
        format!("{tag}.html")
    }
}

/// Front-matter stub consumed by the host site generator.
fn page_content(tag: &str, config: &SiteConfig) -> String {
    format!(
        "---\nlayout: {}\nparmalink: \"{}/{}\"\ncategory: {}\n---\n",
        config.page.layout,
        config.page.permalink,
        escape_path(tag),
        tag,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_config(categories: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.categories = categories.to_path_buf();
        config
    }

    fn read_dir_sorted(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_page_content_format() {
        let config = SiteConfig::default();
        assert_eq!(
            page_content("Go Lang", &config),
            "---\nlayout: category\nparmalink: \"/categories/go-lang\"\ncategory: Go Lang\n---\n"
        );
    }

    #[test]
    fn test_page_content_uses_configured_layout_and_permalink() {
        let mut config = SiteConfig::default();
        config.page.layout = "tag".into();
        config.page.permalink = "/tags".into();

        assert_eq!(
            page_content("rust", &config),
            "---\nlayout: tag\nparmalink: \"/tags/rust\"\ncategory: rust\n---\n"
        );
    }

    #[test]
    fn test_page_file_name_raw_vs_slug() {
        let mut config = SiteConfig::default();
        assert_eq!(page_file_name("Go Lang", &config), "Go Lang.html");

        config.page.slug_filenames = true;
        assert_eq!(page_file_name("Go Lang", &config), "go-lang.html");
    }

    #[test]
    fn test_regenerate_writes_one_page_per_tag() {
        let root = tempfile::tempdir().unwrap();
        let config = test_config(&root.path().join("categories"));
        let tags: TagSet = ["Go Lang", "rust"].into_iter().collect();

        let summary = regenerate(&config, &tags).unwrap();
        assert_eq!(summary.pages, 2);

        assert_eq!(
            read_dir_sorted(&summary.dir),
            vec!["Go Lang.html", "rust.html"]
        );
        let page = fs::read_to_string(summary.dir.join("Go Lang.html")).unwrap();
        assert!(page.contains("parmalink: \"/categories/go-lang\""));
        assert!(page.contains("category: Go Lang"));
    }

    #[test]
    fn test_regenerate_wipes_stale_files() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("categories");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("stale.txt"), "left over").unwrap();
        fs::write(dir.join("old-tag.html"), "old page").unwrap();

        let config = test_config(&dir);
        let tags: TagSet = ["rust"].into_iter().collect();
        regenerate(&config, &tags).unwrap();

        assert_eq!(read_dir_sorted(&dir), vec!["rust.html"]);
    }

    #[test]
    fn test_regenerate_empty_tag_set_leaves_empty_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("categories");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("stale.txt"), "left over").unwrap();

        let config = test_config(&dir);
        let summary = regenerate(&config, &TagSet::default()).unwrap();

        assert_eq!(summary.pages, 0);
        assert!(read_dir_sorted(&dir).is_empty());
    }

    #[test]
    fn test_regenerate_missing_parent_aborts_before_writes() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("missing-parent").join("categories");

        let config = test_config(&dir);
        let tags: TagSet = ["rust"].into_iter().collect();

        let err = regenerate(&config, &tags).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create"));
        assert!(!dir.exists());
    }

    #[test]
    fn test_regenerate_twice_is_byte_identical() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("categories");
        let config = test_config(&dir);
        let tags: TagSet = ["Go Lang", "rust", "你好"].into_iter().collect();

        regenerate(&config, &tags).unwrap();
        let first: Vec<_> = read_dir_sorted(&dir)
            .into_iter()
            .map(|name| {
                let bytes = fs::read(dir.join(&name)).unwrap();
                (name, bytes)
            })
            .collect();

        regenerate(&config, &tags).unwrap();
        let second: Vec<_> = read_dir_sorted(&dir)
            .into_iter()
            .map(|name| {
                let bytes = fs::read(dir.join(&name)).unwrap();
                (name, bytes)
            })
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_regenerate_slug_filenames() {
        let root = tempfile::tempdir().unwrap();
        let mut config = test_config(&root.path().join("categories"));
        config.page.slug_filenames = true;
        let tags: TagSet = ["Go Lang"].into_iter().collect();

        let summary = regenerate(&config, &tags).unwrap();
        assert_eq!(read_dir_sorted(&summary.dir), vec!["go-lang.html"]);
    }
}
