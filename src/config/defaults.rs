//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn categories() -> PathBuf {
        "categories".into()
    }
}

// ============================================================================
// [page] Section Defaults
// ============================================================================

pub mod page {
    pub fn layout() -> String {
        "category".into()
    }

    pub fn permalink() -> String {
        "/categories".into()
    }
}

// ============================================================================
// [scan] Section Defaults
// ============================================================================

pub mod scan {
    pub fn keys() -> Vec<String> {
        vec!["tags".into(), "categories".into()]
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into(), "html".into()]
    }
}
