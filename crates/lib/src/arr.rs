//! Dot-notation access to nested values.
//!
//! Every operation takes a [`Value`] and a path string such as `"a.b.c"`
//! (see [`crate::path`]). The empty path stands for the whole value.
//!
//! # Lookups
//!
//! [`get`] first checks for a literal key equal to the entire path, and only
//! then walks segment by segment. A flat key therefore wins over nested data
//! reachable by splitting the same string:
//!
//! ```
//! use sundry::{arr, Value};
//!
//! let data = Value::from(serde_json::json!({"a.b": 5, "a": {"b": 10}}));
//! assert_eq!(arr::get_or(&data, "a.b", Value::Null), 5);
//! ```
//!
//! # Writes
//!
//! [`set`] creates missing intermediate maps and overwrites leaf values
//! standing in the way:
//!
//! ```
//! use sundry::{arr, Value};
//!
//! let mut data = Value::from(serde_json::json!({"a": 1}));
//! arr::set(&mut data, "a.b.c", "deep");
//! assert_eq!(data.to_json_string(), r#"{"a":{"b":{"c":"deep"}}}"#);
//!
//! arr::forget(&mut data, "a.b.c");
//! assert_eq!(data.to_json_string(), r#"{"a":{"b":{}}}"#);
//! ```

use crate::{
    Value,
    path,
    util::Fallback,
    value::Map,
};

/// Gets a value by path.
///
/// A non-null value stored under the literal key `path` is returned before
/// any segment traversal. Lists are traversed by decimal index.
pub fn get<'v>(target: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(target);
    }

    if let Some(literal) = target.child(path).filter(|v| !v.is_null()) {
        return Some(literal);
    }

    path::segments(path).try_fold(target, |current, segment| current.child(segment))
}

/// Gets a value by path, resolving `default` when the path is missing.
pub fn get_or<'a>(target: &Value, path: &str, default: impl Into<Fallback<'a, Value>>) -> Value {
    match get(target, path) {
        Some(found) => found.clone(),
        None => default.into().resolve(),
    }
}

/// Returns true if the path resolves to a value, `null` included.
pub fn has(target: &Value, path: &str) -> bool {
    get(target, path).is_some()
}

/// Sets a value by path, creating intermediate maps as needed.
///
/// The empty path replaces `target` wholesale. Intermediate leaf values are
/// replaced by empty maps. A list on the way is followed when the segment is
/// an existing index or its length (which appends); for any other segment
/// the list becomes a map keyed by its indexes so the new key fits.
///
/// Returns `target` for chaining.
pub fn set<'v>(target: &'v mut Value, path: &str, value: impl Into<Value>) -> &'v mut Value {
    let value = value.into();
    if path.is_empty() {
        *target = value;
        return target;
    }

    let (parents, last) = path::split_last(path);
    let mut current = &mut *target;
    for segment in parents.into_iter().flat_map(path::segments) {
        let next = slot(current, segment);
        if !next.is_container() {
            if !next.is_null() {
                tracing::debug!(
                    path,
                    segment,
                    replaced = next.type_name(),
                    "Replacing leaf value with a map to continue the write"
                );
            }
            *next = Value::Map(Map::new());
        }
        current = next;
    }
    *slot(current, last) = value;

    target
}

enum Slot {
    Index(usize),
    Key,
}

/// Returns the child for `segment`, inserting `Null` if it does not exist yet.
fn slot<'v>(container: &'v mut Value, segment: &str) -> &'v mut Value {
    let kind = match &*container {
        Value::List(list) => match path::index(segment) {
            Some(i) if i <= list.len() => Slot::Index(i),
            _ => Slot::Key,
        },
        _ => Slot::Key,
    };

    match (kind, container) {
        (Slot::Index(i), Value::List(list)) => {
            if i == list.len() {
                list.push(Value::Null);
            }
            &mut list[i]
        }
        (_, container) => container
            .ensure_map()
            .entry(segment.to_string())
            .or_insert(Value::Null),
    }
}

/// Sets a value by path only if nothing (or `null`) is stored there yet.
pub fn add<'v>(target: &'v mut Value, path: &str, value: impl Into<Value>) -> &'v mut Value {
    if get(target, path).is_none_or(Value::is_null) {
        set(target, path, value);
    }
    target
}

/// Removes the value at `path`.
///
/// Missing paths are ignored, as are paths running through a leaf value.
pub fn forget(target: &mut Value, path: &str) {
    if path.is_empty() {
        return;
    }

    let (parents, last) = path::split_last(path);
    let mut current = target;
    for segment in parents.into_iter().flat_map(path::segments) {
        match current.child_mut(segment) {
            Some(next) if next.is_container() => current = next,
            _ => return,
        }
    }

    if current.remove_child(last).is_some() {
        tracing::trace!(path, "Removed value");
    }
}

/// Removes every path in `paths`, in order.
pub fn forget_many<I>(target: &mut Value, paths: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for path in paths {
        forget(target, path.as_ref());
    }
}

/// Gets a value by path and removes it.
pub fn pull<'a>(target: &mut Value, path: &str, default: impl Into<Fallback<'a, Value>>) -> Value {
    let value = get_or(target, path, default);
    forget(target, path);
    value
}

/// Flattens nested data into a single map keyed by dot paths.
///
/// `prefix` is prepended verbatim to every key. Empty containers produce no
/// keys.
///
/// ```
/// use sundry::{arr, Value};
///
/// let data = Value::from(serde_json::json!({"db": {"host": "localhost", "ports": [5432, 5433]}}));
/// let flat = arr::dot(&data, "");
/// let keys: Vec<_> = flat.keys().cloned().collect();
/// assert_eq!(keys, ["db.host", "db.ports.0", "db.ports.1"]);
/// ```
pub fn dot(target: &Value, prefix: &str) -> Map {
    let mut result = Map::new();
    dot_into(target, prefix, &mut result);
    result
}

fn dot_into(target: &Value, prefix: &str, result: &mut Map) {
    for (key, value) in target.entries() {
        if value.is_container() {
            let nested = path::join(prefix, &key) + ".";
            dot_into(value, &nested, result);
        } else {
            result.insert(path::join(prefix, &key), value.clone());
        }
    }
}

/// Rebuilds nested maps from a map keyed by dot paths.
///
/// This is the inverse of [`dot`] up to list-ness: list indexes come back as
/// map keys.
pub fn undot(flat: &Map) -> Value {
    let mut result = Value::Map(Map::new());
    for (key, value) in flat {
        set(&mut result, key, value.clone());
    }
    result
}

/// Collects every leaf value, depth first, discarding keys.
pub fn flatten(target: &Value) -> Vec<Value> {
    let mut result = Vec::new();
    flatten_into(target, &mut result);
    result
}

fn flatten_into(target: &Value, result: &mut Vec<Value>) {
    if target.is_container() {
        for (_, value) in target.entries() {
            flatten_into(value, result);
        }
    } else {
        result.push(target.clone());
    }
}

/// Builds a new map by passing every entry through `f`.
///
/// Later entries overwrite earlier ones mapped to the same key.
pub fn build<F>(map: &Map, mut f: F) -> Map
where
    F: FnMut(&str, &Value) -> (String, Value),
{
    map.iter().map(|(k, v)| f(k, v)).collect()
}

/// Splits a map into its keys and its values.
pub fn divide(map: &Map) -> (Vec<String>, Vec<Value>) {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).unzip()
}

/// Returns all entries except the given keys.
pub fn except<K: AsRef<str>>(map: &Map, keys: &[K]) -> Map {
    map.iter()
        .filter(|(k, _)| !keys.iter().any(|key| key.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Returns only the given keys.
pub fn only<K: AsRef<str>>(map: &Map, keys: &[K]) -> Map {
    map.iter()
        .filter(|(k, _)| keys.iter().any(|key| key.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Plucks a nested path out of every item of a container.
///
/// Each segment of `path` is applied across the whole previous result; items
/// lacking the segment are dropped.
///
/// ```
/// use sundry::{arr, Value};
///
/// let users = Value::from(serde_json::json!([
///     {"profile": {"name": "Ada"}},
///     {"profile": {"name": "Grace"}},
///     {"other": true},
/// ]));
/// assert_eq!(arr::fetch(&users, "profile.name"), [Value::from("Ada"), Value::from("Grace")]);
/// ```
pub fn fetch(target: &Value, path: &str) -> Vec<Value> {
    let mut current: Vec<&Value> = target.entries().map(|(_, v)| v).collect();
    for segment in path::segments(path) {
        current = current
            .into_iter()
            .filter_map(|item| item.child(segment))
            .collect();
    }
    current.into_iter().cloned().collect()
}

/// Returns the first entry passing `predicate`.
pub fn first<'m, F>(map: &'m Map, mut predicate: F) -> Option<&'m Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    map.iter().find(|(k, v)| predicate(k, v)).map(|(_, v)| v)
}

/// Returns the last entry passing `predicate`.
pub fn last<'m, F>(map: &'m Map, mut predicate: F) -> Option<&'m Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    map.iter().rev().find(|(k, v)| predicate(k, v)).map(|(_, v)| v)
}

/// Collects one field from every item of a container.
///
/// Without `key` the result is a list. With `key` it is a map keyed by the
/// string form of each item's `key` field; items whose key field is a
/// container are skipped. Missing fields read as `null`.
pub fn pluck(target: &Value, value: &str, key: Option<&str>) -> Value {
    let items = target.entries().map(|(_, item)| item);
    let field = |item: &Value, name: &str| item.child(name).cloned().unwrap_or_default();

    match key {
        None => items.map(|item| field(item, value)).collect(),
        Some(key) => items
            .filter_map(|item| {
                let item_key = field(item, key).string_form()?.into_owned();
                Some((item_key, field(item, value)))
            })
            .collect(),
    }
}
