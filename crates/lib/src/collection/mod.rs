//! An insertion-ordered keyed container.
//!
//! [`Collection`] owns one ordered mapping from [`Key`] to [`Value`].
//! Mutating operations (`put`, `push`, `forget`) change the receiver;
//! transformations (`diff`, `flip`, `group_by`, `collapse`, `first_where`)
//! return a new collection and leave the receiver untouched.
//!
//! ```
//! use sundry::{Collection, Value};
//!
//! let people = Collection::try_from(serde_json::json!([
//!     {"name": "Ada", "team": "core"},
//!     {"name": "Grace", "team": "tools"},
//!     {"name": "Linus", "team": "core"},
//! ]))?;
//!
//! let teams = people.group_by("team")?;
//! assert_eq!(teams.value("core").map(Value::len), Some(2));
//! assert_eq!(teams.value("tools").map(Value::len), Some(1));
//! # Ok::<(), sundry::Error>(())
//! ```

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::{
    Value,
    util::{Fallback, data_get},
    value::Map,
};

pub mod errors;
mod key;

pub use errors::CollectionError;
pub use key::Key;

/// An ordered mapping of keys to values.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "Value")]
pub struct Collection {
    items: IndexMap<Key, Value>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the underlying mapping.
    pub fn all(&self) -> &IndexMap<Key, Value> {
        &self.items
    }

    /// Copies the entries into a string-keyed map.
    pub fn to_map(&self) -> Map {
        self.items
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    pub fn into_inner(self) -> IndexMap<Key, Value> {
        self.items
    }

    /// Gets the value under `key`, resolving `default` if it is missing or `null`.
    pub fn get<'a>(&self, key: impl Into<Key>, default: impl Into<Fallback<'a, Value>>) -> Value {
        match self.items.get(&key.into()).filter(|v| !v.is_null()) {
            Some(found) => found.clone(),
            None => default.into().resolve(),
        }
    }

    /// Borrows the value under `key`, `null` included.
    pub fn value(&self, key: impl Into<Key>) -> Option<&Value> {
        self.items.get(&key.into())
    }

    /// Returns true if `key` holds a non-null value.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.value(key).is_some_and(|v| !v.is_null())
    }

    /// Returns true if `key` exists, even when it holds `null`.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Stores `value` under `key`, keeping the position of an existing key.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Appends `value` under the next integer key.
    ///
    /// The next key is one past the largest integer key, or `0` when there
    /// is none. Fails without changing the collection when the largest key
    /// is already `i64::MAX`.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<&mut Self, CollectionError> {
        let next = match self.items.keys().filter_map(Key::as_int).max() {
            None => 0,
            Some(max) => max
                .checked_add(1)
                .ok_or(CollectionError::KeySpaceExhausted { last: max })?,
        };
        self.items.insert(Key::Int(next), value.into());
        Ok(self)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn forget(&mut self, key: impl Into<Key>) -> &mut Self {
        self.items.shift_remove(&key.into());
        self
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.items.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.items.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }

    /// Calls `f` on every value in order.
    ///
    /// The callback only observes values; nothing it computes is stored.
    pub fn each<F: FnMut(&Value)>(&self, f: F) -> &Self {
        self.items.values().for_each(f);
        self
    }

    /// The first value in insertion order, or the resolved default when empty.
    pub fn first<'a>(&self, default: impl Into<Fallback<'a, Value>>) -> Value {
        match self.items.values().next() {
            Some(first) => first.clone(),
            None => default.into().resolve(),
        }
    }

    /// Every entry whose value passes `predicate`, with keys preserved.
    ///
    /// Despite the name this is a filter: all matches are returned.
    pub fn first_where<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value) -> bool,
    {
        self.items
            .iter()
            .filter(|(_, v)| predicate(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns true if some value loosely equals `needle`.
    ///
    /// Scalars compare by string form, so `1`, `1.0` and `"1"` all match.
    pub fn contains(&self, needle: &Value) -> bool {
        self.items.values().any(|v| v.loose_eq(needle))
    }

    /// Returns true if some value passes `predicate`.
    pub fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Value) -> bool,
    {
        self.items.values().any(predicate)
    }

    /// Entries whose value is not present in `other`, with keys preserved.
    ///
    /// Values are compared loosely, keys of `other` are ignored.
    pub fn diff(&self, other: &Collection) -> Collection {
        self.items
            .iter()
            .filter(|(_, v)| !other.contains(v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Swaps keys and values.
    ///
    /// Only integer and text values can become keys. When several entries
    /// share a value the last one wins.
    pub fn flip(&self) -> Result<Collection, CollectionError> {
        self.items
            .iter()
            .map(|(k, v)| Ok((Key::from_value(v)?, k.to_value())))
            .collect()
    }

    /// Groups values by the value found at `path` inside each of them.
    ///
    /// Values lacking `path` are grouped under the empty string key.
    pub fn group_by(&self, path: &str) -> Result<Collection, CollectionError> {
        self.group_by_with(|value, _| data_get(value, path).cloned().unwrap_or_default())
    }

    /// Groups values by the identifier `f` computes from each value and key.
    ///
    /// Each group becomes a list of its members in collection order.
    /// Identifiers are turned into keys with [`Key::coerce`].
    pub fn group_by_with<F>(&self, mut f: F) -> Result<Collection, CollectionError>
    where
        F: FnMut(&Value, &Key) -> Value,
    {
        let mut groups: IndexMap<Key, Vec<Value>> = IndexMap::new();
        for (key, value) in &self.items {
            let group = Key::coerce(&f(value, key))?;
            groups.entry(group).or_default().push(value.clone());
        }
        Ok(groups
            .into_iter()
            .map(|(key, values)| (key, Value::List(values)))
            .collect())
    }

    /// Merges the children of every entry into one collection.
    ///
    /// List items and integer-keyed map entries are appended under fresh
    /// integer keys; string-keyed map entries overwrite in place. Every entry
    /// must be a list or a map.
    pub fn collapse(&self) -> Result<Collection, CollectionError> {
        let mut result = Collection::new();
        for (key, entry) in &self.items {
            match entry {
                Value::List(items) => {
                    for item in items {
                        result.push(item.clone())?;
                    }
                }
                Value::Map(map) => {
                    for (child, value) in map {
                        match Key::parse(child) {
                            Key::Int(_) => result.push(value.clone())?,
                            named => result.put(named, value.clone()),
                        };
                    }
                }
                other => {
                    return Err(CollectionError::NonAggregable {
                        key: key.to_string(),
                        found: other.type_name(),
                    });
                }
            }
        }
        Ok(result)
    }

    /// Returns true if the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(i, k)| k.as_int() == i64::try_from(i).ok())
    }

    /// Converts into a [`Value`]: a list when [`is_list`](Self::is_list), a map otherwise.
    pub fn to_value(&self) -> Value {
        if self.is_list() {
            Value::List(self.items.values().cloned().collect())
        } else {
            Value::Map(self.to_map())
        }
    }

    /// Serializes to a compact JSON string, an array when list-shaped.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_list() {
            serializer.collect_seq(self.items.values())
        } else {
            serializer.collect_map(self.items.iter().map(|(k, v)| (k.to_string(), v)))
        }
    }
}

impl From<Vec<Value>> for Collection {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().enumerate().map(|(i, v)| (Key::Int(i as i64), v)).collect()
    }
}

impl From<Map> for Collection {
    fn from(map: Map) -> Self {
        map.into_iter().map(|(k, v)| (Key::from(k), v)).collect()
    }
}

impl TryFrom<Value> for Collection {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list.into()),
            Value::Map(map) => Ok(map.into()),
            other => Err(CollectionError::NotAContainer {
                found: other.type_name(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for Collection {
    type Error = CollectionError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Value::from(value).try_into()
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Key, Value)> for Collection {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
