//! Small general-purpose helpers shared by the other modules.
//!
//! The central piece is [`Fallback`], the deferred default accepted wherever
//! a lookup may miss: either a ready value or a closure that is only run
//! when the fallback is actually needed.
//!
//! ```
//! use sundry::util::{Fallback, data_get_or};
//! use sundry::Value;
//!
//! let data = Value::from(serde_json::json!({"user": {"name": "Alice"}}));
//!
//! assert_eq!(data_get_or(&data, "user.name", Value::Null), "Alice");
//! assert_eq!(data_get_or(&data, "user.email", Value::from("n/a")), "n/a");
//!
//! let lazy = data_get_or(&data, "user.age", Fallback::lazy(|| Value::from(18)));
//! assert_eq!(lazy, 18);
//! ```

use std::fmt;

use crate::Value;

/// A fallback value supplied directly or computed on demand.
pub enum Fallback<'a, T> {
    /// A ready value.
    Value(T),
    /// A computation run only if the fallback is needed.
    Lazy(Box<dyn FnOnce() -> T + 'a>),
}

impl<'a, T> Fallback<'a, T> {
    /// Wraps a closure so it runs only when the fallback is resolved.
    pub fn lazy(f: impl FnOnce() -> T + 'a) -> Self {
        Fallback::Lazy(Box::new(f))
    }

    /// Produces the fallback value, running the closure if there is one.
    pub fn resolve(self) -> T {
        match self {
            Fallback::Value(value) => value,
            Fallback::Lazy(f) => f(),
        }
    }
}

impl<T> From<T> for Fallback<'_, T> {
    fn from(value: T) -> Self {
        Fallback::Value(value)
    }
}

impl<T: Default> Default for Fallback<'_, T> {
    fn default() -> Self {
        Fallback::Value(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Fallback<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// Resolves a fallback.
pub fn value<'a, T>(fallback: impl Into<Fallback<'a, T>>) -> T {
    fallback.into().resolve()
}

/// Gets a nested value by dot path, segment by segment.
///
/// Unlike [`crate::arr::get`] there is no literal-key shortcut: `"a.b"` always
/// means key `b` inside key `a`. The empty path returns `target` itself.
pub fn data_get<'v>(target: &'v Value, key: &str) -> Option<&'v Value> {
    if key.is_empty() {
        return Some(target);
    }
    crate::path::segments(key).try_fold(target, |current, segment| current.child(segment))
}

/// [`data_get`] with a fallback for missing paths.
pub fn data_get_or<'a>(
    target: &Value,
    key: &str,
    default: impl Into<Fallback<'a, Value>>,
) -> Value {
    match data_get(target, key) {
        Some(found) => found.clone(),
        None => default.into().resolve(),
    }
}

/// Returns the last segment of a qualified type name.
///
/// Accepts `::`, `\` and `/` separated names and ignores generic arguments.
///
/// ```
/// # use sundry::util::class_basename;
/// assert_eq!(class_basename("my_app::events::UserCreated"), "UserCreated");
/// assert_eq!(class_basename("alloc::vec::Vec<my_app::Item>"), "Vec");
/// assert_eq!(class_basename("App\\Events\\Saved"), "Saved");
/// ```
pub fn class_basename(name: &str) -> &str {
    let head = name.split('<').next().unwrap_or(name);
    head.rsplit([':', '\\', '/']).next().unwrap_or(head)
}

/// Returns the first item, if any.
pub fn head<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().next()
}

/// Returns the last item, if any.
pub fn last<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().last()
}

/// Checks whether `index` addresses an element of a container or a byte of text.
///
/// Always false for other values.
pub fn valid_index(index: i64, value: &Value) -> bool {
    let len = match value {
        Value::List(_) | Value::Map(_) => value.len(),
        Value::Text(s) => s.len(),
        _ => return false,
    };
    usize::try_from(index).is_ok_and(|i| i < len)
}
