//! URL slugification and path escaping.
//!
//! Converts tag labels to URL-safe slugs and escapes them for use in
//! permalink paths.
//!
//! # Pipeline
//!
//! ```text
//! "Go Lang"  ──slugify──►  "go-lang"  ──escape_path──►  "go-lang"
//! "C++ 笔记" ──slugify──►  "c-笔记"   ──escape_path──►  "c-%E7%AC%94%E8%AE%B0"
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes percent-encoded in a URL path.
///
/// Everything except unreserved characters (RFC 3986 §2.3), sub-delims,
/// `:`, `@`, and the segment separator `/`.
const PATH_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/');

// ============================================================================
// Slugification
// ============================================================================

/// Convert a tag label to a URL-safe slug.
///
/// Lowercases the input, collapses every run of characters that are not
/// Unicode letters, marks, or digits into a single `-`, and trims leading
/// and trailing separators. Idempotent: `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(input: &str) -> String {
    static RE_NON_ALNUM: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}]+").unwrap());

    let replaced = RE_NON_ALNUM.replace_all(input, "-");
    replaced.trim_matches('-').to_lowercase()
}

// ============================================================================
// Path Escaping
// ============================================================================

/// Slugify `input`, then percent-encode it for use as a URL path.
///
/// Slugification is lossy; the percent-encoding step only touches bytes
/// that are invalid in a path segment (for a slug that means non-ASCII).
pub fn escape_path(input: &str) -> String {
    utf8_percent_encode(&slugify(input), PATH_ESCAPE).to_string()
}

/// Percent-decode `input` back to its literal form.
///
/// Inverse of the encoding step only; slugification is not reversed.
/// Invalid UTF-8 sequences decode lossily.
pub fn unescape_path(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

// ============================================================================
// Tests
// ============================================================================
