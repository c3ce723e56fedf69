//! Dot-delimited path strings.
//!
//! A path such as `"user.profile.name"` names one location inside nested
//! data, one segment per nesting level. Paths are taken literally: empty
//! segments (`"a..b"`, `".a"`) are real, empty keys, and a segment addresses
//! a list item only when it is a canonical decimal index.
//!
//! ```
//! use sundry::path;
//!
//! let segments: Vec<&str> = path::segments("user.profile.name").collect();
//! assert_eq!(segments, ["user", "profile", "name"]);
//!
//! assert_eq!(path::split_last("user.profile.name"), (Some("user.profile"), "name"));
//! assert_eq!(path::split_last("user"), (None, "user"));
//! ```

/// The character separating path segments.
pub const DELIMITER: char = '.';

/// Splits a path into its segments.
///
/// Always yields at least one segment; the empty path yields one empty segment.
pub fn segments(path: &str) -> std::str::Split<'_, char> {
    path.split(DELIMITER)
}

/// Splits a path into its parent path and its final segment.
pub fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once(DELIMITER) {
        Some((parent, last)) => (Some(parent), last),
        None => (None, path),
    }
}

/// Appends `key` to a prefix, for building flattened keys.
///
/// The prefix carries its own trailing delimiter, so an empty prefix yields
/// the bare key.
pub fn join(prefix: &str, key: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + key.len());
    joined.push_str(prefix);
    joined.push_str(key);
    joined
}

/// Parses a segment as a list index.
///
/// Only canonical decimals qualify: `"0"` and `"12"`, but not `"012"`, `"+1"`
/// or `" 1"`.
pub fn index(segment: &str) -> Option<usize> {
    if !is_canonical_digits(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Parses a key as a canonical signed integer (`"-3"`, `"0"`, `"42"`).
///
/// `"-0"`, leading zeros and explicit plus signs are not canonical.
pub fn integer_key(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    if !is_canonical_digits(digits) || key == "-0" {
        return None;
    }
    key.parse().ok()
}

fn is_canonical_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'))
}
