//! Template filter registry.
//!
//! The host templating layer resolves filters by name; this module is the
//! registration table it consumes. Each filter is a plain stateless
//! string-to-string function.
//!
//! # Registered filters
//!
//! | Name            | Effect                                        |
//! |-----------------|-----------------------------------------------|
//! | `escape_path`   | slugify, then percent-encode for a URL path   |
//! | `unescape_path` | percent-decode back to the literal form       |

use crate::utils::slug;

/// A registered filter: pure string transformation, no shared state.
pub type FilterFn = fn(&str) -> String;

/// Name → function table consumed by the host templating layer.
pub const FILTERS: &[(&str, FilterFn)] = &[
    ("escape_path", slug::escape_path),
    ("unescape_path", slug::unescape_path),
];

/// Resolve a filter by its registered name.
pub fn lookup(name: &str) -> Option<FilterFn> {
    FILTERS
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, filter)| *filter)
}

/// Iterate over all registered filter names.
pub fn names() -> impl Iterator<Item = &'static str> {
    FILTERS.iter().map(|(name, _)| *name)
}
