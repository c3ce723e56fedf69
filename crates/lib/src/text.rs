//! String helpers: case conversion, truncation, slugs and random tokens.
//!
//! ```
//! use sundry::text;
//!
//! assert_eq!(text::slug("Hello World, Again!", "-"), "hello-world-again");
//! assert_eq!(text::camel("user name"), "userName");
//! assert_eq!(text::limit("The quick brown fox", 9, "..."), "The quick...");
//! assert_eq!(text::random(24)?.len(), 24);
//! # Ok::<(), sundry::Error>(())
//! ```

use base64ct::{Base64, Encoding};
use rand::{RngCore, rngs::OsRng, seq::SliceRandom};
use thiserror::Error;

/// Characters [`quick_random`] draws from.
const POOL: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Copies of [`POOL`] shuffled by [`quick_random`], bounding its output length.
const POOL_REPEAT: usize = 5;

/// Longest token [`random`] will generate.
pub const MAX_RANDOM_LENGTH: usize = 1 << 20;

/// Most random bytes drawn from the OS per round in [`random`].
const RANDOM_CHUNK: usize = 1024;

/// Characters `limit` strips from the end of a truncated string.
const TRAILING: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Errors raised by the text helpers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The operating system could not supply random bytes
    #[error("Unable to generate random string: {reason}")]
    RandomSource { reason: String },

    /// A random string longer than [`MAX_RANDOM_LENGTH`] was requested
    #[error("Random string length {requested} exceeds the maximum of {max}")]
    LengthTooLarge { requested: usize, max: usize },
}

impl TextError {
    /// Check if this error comes from the random source
    pub fn is_random_error(&self) -> bool {
        matches!(self, TextError::RandomSource { .. })
    }

    /// Check if this error was caused by an oversized length
    pub fn is_length_error(&self) -> bool {
        matches!(self, TextError::LengthTooLarge { .. })
    }
}

impl From<TextError> for crate::Error {
    fn from(err: TextError) -> Self {
        crate::Error::Text(err)
    }
}

/// Transliterates to plain ASCII.
pub fn ascii(value: &str) -> String {
    deunicode::deunicode(value)
}

/// Converts to `camelCase`, see [`studly`].
pub fn camel(value: &str) -> String {
    lcfirst(&studly(value))
}

/// Converts to `StudlyCase`.
///
/// Dashes and underscores are removed outright, then every whitespace
/// separated word is capitalized and the spaces dropped. Only whitespace
/// separates words: `"foo_bar"` becomes `"Foobar"`.
pub fn studly(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut word_start = true;
    for c in value.chars().filter(|c| !matches!(c, '-' | '_')) {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        word_start = c.is_whitespace();
    }
    result.retain(|c| c != ' ');
    result
}

/// Lowercases the first character.
pub fn lcfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns true if `haystack` contains any of `needles`.
///
/// Empty needles never match.
pub fn contains<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles
        .iter()
        .map(AsRef::as_ref)
        .any(|needle| !needle.is_empty() && haystack.contains(needle))
}

/// Truncates to `limit` characters and appends `end`.
///
/// Strings within the limit are returned unchanged. Whitespace left at the
/// end of the cut is trimmed before `end` is appended.
pub fn limit(value: &str, limit: usize, end: &str) -> String {
    match value.char_indices().nth(limit) {
        None => value.to_string(),
        Some((cut, _)) => {
            let mut result = value[..cut].trim_end_matches(TRAILING).to_string();
            result.push_str(end);
            result
        }
    }
}

pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word starts after any character other than a letter, a digit or an
/// apostrophe.
///
/// ```
/// # use sundry::text::title;
/// assert_eq!(title("hELLO wORLD-wide o'neil"), "Hello World-Wide O'neil");
/// ```
pub fn title(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut word_start = true;
    for c in value.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        word_start = !(c.is_alphanumeric() || c == '\'');
    }
    result
}

/// Builds a URL-friendly slug.
///
/// The title is transliterated to ASCII and lowercased. Whitespace, the
/// separator and the opposite of `-`/`_` split words; every other
/// character that is not a letter or digit is dropped.
pub fn slug(title: &str, separator: &str) -> String {
    let flip = if separator == "-" { '_' } else { '-' };
    let is_gap = |c: char| c == flip || c.is_whitespace() || separator.contains(c);

    let mut result = String::with_capacity(title.len());
    let mut pending_gap = false;
    for c in lower(&ascii(title)).chars() {
        if is_gap(c) {
            pending_gap = true;
        } else if c.is_alphanumeric() {
            if pending_gap && !result.is_empty() {
                result.push_str(separator);
            }
            pending_gap = false;
            result.push(c);
        }
    }
    result
}

/// Generates a random alphanumeric string from the OS random source.
///
/// Random bytes are base64 encoded with `/`, `+` and `=` removed, drawing
/// more bytes until the string is long enough. Lengths above
/// [`MAX_RANDOM_LENGTH`] are rejected.
pub fn random(length: usize) -> Result<String, TextError> {
    if length > MAX_RANDOM_LENGTH {
        return Err(TextError::LengthTooLarge {
            requested: length,
            max: MAX_RANDOM_LENGTH,
        });
    }
    let mut token = String::with_capacity(length);
    while token.len() < length {
        let wanted = (length - token.len()).saturating_mul(2).min(RANDOM_CHUNK);
        let mut bytes = vec![0u8; wanted];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TextError::RandomSource {
                reason: e.to_string(),
            })?;
        token.extend(
            Base64::encode_string(&bytes)
                .chars()
                .filter(|c| !matches!(c, '/' | '+' | '=')),
        );
    }
    token.truncate(length);
    Ok(token)
}

/// Like [`random`], but falls back to [`quick_random`] when [`random`]
/// fails, including for lengths above [`MAX_RANDOM_LENGTH`].
pub fn random_or_quick(length: usize) -> String {
    random(length).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Falling back to non-cryptographic random string");
        quick_random(length)
    })
}

/// Generates a random alphanumeric string without the OS random source.
///
/// Not suitable for secrets. Characters are drawn without replacement from
/// five copies of the alphanumeric pool, so at most 310 are returned.
pub fn quick_random(length: usize) -> String {
    let mut pool: Vec<char> = POOL.repeat(POOL_REPEAT).chars().collect();
    pool.shuffle(&mut rand::thread_rng());
    pool.into_iter().take(length).collect()
}
