//! Dynamic values for nested, JSON-like data.
//!
//! [`Value`] is the tagged union every path and collection operation works
//! over. Maps keep insertion order, so iterating, flattening and serializing
//! a value always reproduces the order keys were written in.
//!
//! ```
//! use sundry::value::{Map, Value};
//!
//! let mut user = Map::new();
//! user.insert("name".to_string(), Value::from("Alice"));
//! user.insert("age".to_string(), Value::from(30));
//! let value = Value::from(user);
//!
//! assert_eq!(value.child("name"), Some(&Value::from("Alice")));
//! assert_eq!(value.to_json_string(), r#"{"name":"Alice","age":30}"#);
//! ```

use std::{borrow::Cow, fmt};

use indexmap::IndexMap;

use crate::path;

mod conversions;
pub mod errors;

pub use errors::ValueError;

/// Insertion-ordered string-keyed map of values.
pub type Map = IndexMap<String, Value>;

/// A dynamically typed value.
///
/// ## Leaf values
/// - [`Value::Null`], [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`]
///
/// ## Branch values
/// - [`Value::List`] - ordered sequence, addressed by decimal index in paths
/// - [`Value::Map`] - ordered mapping, addressed by key in paths
///
/// `Value` implements `PartialEq` with primitive types:
///
/// ```
/// # use sundry::Value;
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::from(42) == 42);
/// assert!(Value::Bool(true) == true);
/// assert!(!(Value::from(42) == "42"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Ordered mapping of string keys to values
    Map(Map),
}

impl Value {
    /// Returns true if this is a leaf value
    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this value can hold other values
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Number of direct children; zero for leaf values.
    pub fn len(&self) -> usize {
        match self {
            Value::List(list) => list.len(),
            Value::Map(map) => map.len(),
            _ => 0,
        }
    }

    /// Returns true for leaf values and for empty containers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up one path segment: a key of a map or a decimal index of a list.
    pub fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(segment),
            Value::List(list) => path::index(segment).and_then(|i| list.get(i)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Value::child`].
    pub fn child_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(segment),
            Value::List(list) => path::index(segment).and_then(|i| list.get_mut(i)),
            _ => None,
        }
    }

    /// Removes one direct child, returning it if present.
    ///
    /// Map removal keeps the order of the remaining keys; list removal shifts
    /// later items down by one.
    pub fn remove_child(&mut self, segment: &str) -> Option<Value> {
        match self {
            Value::Map(map) => map.shift_remove(segment),
            Value::List(list) => match path::index(segment) {
                Some(i) if i < list.len() => Some(list.remove(i)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Iterates the direct children with their path segment.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            Value::Map(map) => Entries::Map(map.iter()),
            Value::List(list) => Entries::List(list.iter().enumerate()),
            _ => Entries::Empty,
        }
    }

    /// Returns the map inside this value, converting it first if needed.
    ///
    /// Lists become maps keyed by their decimal indexes; leaf values are
    /// replaced by an empty map.
    pub fn ensure_map(&mut self) -> &mut Map {
        if !matches!(self, Value::Map(_)) {
            let converted = match std::mem::take(self) {
                Value::List(list) => list
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
                replaced => {
                    if !replaced.is_null() {
                        tracing::debug!(
                            replaced = replaced.type_name(),
                            "Overwriting leaf value with an empty map"
                        );
                    }
                    Map::new()
                }
            };
            *self = Value::Map(converted);
        }
        match self {
            Value::Map(map) => map,
            _ => unreachable!("value was converted to a map above"),
        }
    }

    /// The string a leaf value compares as, or `None` for containers.
    ///
    /// `null` and `false` become the empty string and `true` becomes `"1"`,
    /// so loosely equal scalars produce identical forms.
    pub fn string_form(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null | Value::Bool(false) => Some(Cow::Borrowed("")),
            Value::Bool(true) => Some(Cow::Borrowed("1")),
            Value::Int(n) => Some(Cow::Owned(n.to_string())),
            Value::Float(n) => Some(Cow::Owned(n.to_string())),
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::List(_) | Value::Map(_) => None,
        }
    }

    /// Loose equality: scalars compare by [`Value::string_form`], containers
    /// compare structurally.
    ///
    /// ```
    /// # use sundry::Value;
    /// assert!(Value::from(1).loose_eq(&Value::from("1")));
    /// assert!(Value::from(1.0).loose_eq(&Value::from(1)));
    /// assert!(!Value::from(1).loose_eq(&Value::from(2)));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self.string_form(), other.string_form()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// Serializes to a compact JSON string.
    pub fn to_json_string(&self) -> String {
        // Serializing a tree of strings, numbers and string-keyed maps cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

/// Iterator over the direct children of a [`Value`].
///
/// List children are yielded with their index rendered as the segment.
pub enum Entries<'a> {
    Map(indexmap::map::Iter<'a, String, Value>),
    List(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Cow<'a, str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Map(iter) => iter.next().map(|(k, v)| (Cow::Borrowed(k.as_str()), v)),
            Entries::List(iter) => iter.next().map(|(i, v)| (Cow::Owned(i.to_string()), v)),
            Entries::Empty => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
