use std::fmt;

use super::CollectionError;
use crate::{Value, path};

/// A collection key: an integer or a string.
///
/// Strings holding a canonical decimal integer are normalized to
/// [`Key::Int`], so `"3"` and `3` address the same entry while `"03"` stays
/// a string.
///
/// ```
/// # use sundry::Key;
/// assert_eq!(Key::from("3"), Key::Int(3));
/// assert_eq!(Key::from("03"), Key::Str("03".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Parses a string key, normalizing canonical integers.
    pub fn parse(key: &str) -> Self {
        path::integer_key(key).map_or_else(|| Key::Str(key.to_string()), Key::Int)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    /// The key as a value, for operations that move keys into values.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(n) => Value::Int(*n),
            Key::Str(s) => Value::Text(s.clone()),
        }
    }

    /// Turns an integer or text value into a key.
    ///
    /// Every other value is rejected.
    pub fn from_value(value: &Value) -> Result<Self, CollectionError> {
        match value {
            Value::Int(n) => Ok(Key::Int(*n)),
            Value::Text(s) => Ok(Key::parse(s)),
            other => Err(CollectionError::InvalidKey {
                found: other.type_name(),
            }),
        }
    }

    /// Turns any scalar value into a key.
    ///
    /// Booleans become `0`/`1`, floats are truncated and `null` becomes the
    /// empty string. Containers are rejected.
    pub fn coerce(value: &Value) -> Result<Self, CollectionError> {
        match value {
            Value::Null => Ok(Key::Str(String::new())),
            Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
            Value::Float(n) => Ok(Key::Int(n.trunc() as i64)),
            other => Key::from_value(other),
        }
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Key::Int(key)
    }
}

impl From<i32> for Key {
    fn from(key: i32) -> Self {
        Key::Int(key.into())
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::parse(key)
    }
}

impl From<&String> for Key {
    fn from(key: &String) -> Self {
        Key::parse(key)
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        match path::integer_key(&key) {
            Some(n) => Key::Int(n),
            None => Key::Str(key),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}
