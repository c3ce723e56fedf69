//! Collection integration tests

use serde_json::json;
use sundry::{Collection, Fallback, Key, Value, collection::CollectionError};

use crate::helpers::{collection, value};

#[test]
fn test_contains_and_diff_are_value_based() {
    let items = collection(json!({"x": 1, "y": 2, "z": 1}));

    assert!(items.contains(&Value::from(1)));
    assert!(!items.contains(&Value::from(3)));

    let diff = items.diff(&collection(json!({"x": 1})));
    assert_eq!(diff.to_value(), value(json!({"y": 2})));
    assert_eq!(diff.value("y"), Some(&Value::from(2)));
}

#[test]
fn test_diff_compares_loosely_and_keeps_keys() {
    let items = collection(json!(["1", 2, "three"]));
    let diff = items.diff(&collection(json!({"a": 1, "b": "three"})));
    assert_eq!(diff.keys().collect::<Vec<_>>(), [&Key::Int(1)]);
    assert!(!diff.is_list());
}

#[test]
fn test_contains_where_uses_predicate() {
    let items = collection(json!([1, 5, 9]));
    assert!(items.contains_where(|v| v.as_int() == Some(9)));
    assert!(!items.contains_where(|v| v.as_int() == Some(2)));
}

#[test]
fn test_group_by_path() {
    let items = collection(json!([
        {"type": "a", "v": 1},
        {"type": "b", "v": 2},
        {"type": "a", "v": 3},
    ]));

    let grouped = items.group_by("type").unwrap();
    assert_eq!(
        grouped.to_value(),
        value(json!({
            "a": [{"type": "a", "v": 1}, {"type": "a", "v": 3}],
            "b": [{"type": "b", "v": 2}],
        }))
    );
    assert_eq!(grouped.to_json_string().unwrap(), grouped.to_value().to_json_string());
}

#[test]
fn test_group_by_missing_path_uses_empty_key() {
    let items = collection(json!([{"team": "x"}, {"other": true}]));
    let grouped = items.group_by("team").unwrap();
    assert_eq!(grouped.keys().cloned().collect::<Vec<_>>(), [Key::from("x"), Key::from("")]);
}

#[test]
fn test_group_by_with_callback_and_invalid_key() {
    let items = collection(json!([1, 2, 3, 4]));
    let parity = items
        .group_by_with(|v, _| Value::from(v.as_int().unwrap_or(0) % 2 == 0))
        .unwrap();
    assert_eq!(parity.value(0), Some(&value(json!([1, 3]))));
    assert_eq!(parity.value(1), Some(&value(json!([2, 4]))));

    let err = items.group_by_with(|_, _| value(json!([1]))).unwrap_err();
    assert_eq!(err, CollectionError::InvalidKey { found: "list" });
}

#[test]
fn test_first_where_returns_every_match() {
    let items = collection(json!({"a": 1, "b": 10, "c": 20}));
    let matches = items.first_where(|v| v.as_int().is_some_and(|n| n >= 10));
    assert_eq!(matches.to_value(), value(json!({"b": 10, "c": 20})));
}

#[test]
fn test_first_and_default() {
    assert_eq!(collection(json!([7, 8])).first(Value::Null), 7);
    assert_eq!(Collection::new().first(Fallback::lazy(|| Value::from("none"))), "none");
}

#[test]
fn test_flip_swaps_keys_and_values() {
    let flipped = collection(json!({"a": "x", "b": 2})).flip().unwrap();
    assert_eq!(flipped.value("x"), Some(&Value::from("a")));
    assert_eq!(flipped.value(2), Some(&Value::from("b")));

    let err = collection(json!({"a": 1.5})).flip().unwrap_err();
    assert!(err.is_key_error());
}

#[test]
fn test_collapse_merges_lists_and_maps() {
    let items = collection(json!([[1, 2], {"name": "x", "0": 3}, [4]]));
    let collapsed = items.collapse().unwrap();
    assert_eq!(collapsed.to_value(), value(json!({"0": 1, "1": 2, "name": "x", "2": 3, "3": 4})));

    let lists = collection(json!([["a"], ["b", "c"]])).collapse().unwrap();
    assert_eq!(lists.to_value(), value(json!(["a", "b", "c"])));
}

#[test]
fn test_collapse_rejects_scalar_entries() {
    let err = collection(json!({"ok": [1], "bad": 2})).collapse().unwrap_err();
    assert_eq!(
        err,
        CollectionError::NonAggregable {
            key: "bad".to_string(),
            found: "int"
        }
    );
    let err: sundry::Error = err.into();
    assert_eq!(err.module(), "collection");
    assert!(err.is_type_error());
}

#[test]
fn test_transformations_leave_receiver_untouched() {
    let items = collection(json!({"x": 1, "y": 2}));
    let before = items.clone();
    let _ = items.diff(&collection(json!([1])));
    let _ = items.flip();
    let _ = items.group_by("missing");
    let _ = items.first_where(|_| true);
    assert_eq!(items, before);
}

#[test]
fn test_get_has_and_null_values() {
    let mut items = collection(json!({"a": 1, "n": null}));
    assert_eq!(items.get("a", Value::Null), 1);
    assert_eq!(items.get("n", Value::from("dflt")), "dflt");
    assert!(items.has("a"));
    assert!(!items.has("n"));
    assert!(items.contains_key("n"));

    items.put("b", 2).forget("a");
    assert_eq!(items.keys().cloned().collect::<Vec<_>>(), [Key::from("n"), Key::from("b")]);
}

#[test]
fn test_integer_string_keys_normalize() {
    let mut items = Collection::new();
    items.put("5", "five");
    assert_eq!(items.value(5), Some(&Value::from("five")));
    items.push("six").unwrap();
    assert_eq!(items.value(6), Some(&Value::from("six")));
    items.put("05", "padded");
    assert_eq!(items.count(), 3);
}

#[test]
fn test_push_starts_at_zero_and_follows_largest_int_key() {
    let mut items = Collection::new();
    items.push("a").unwrap().put("name", "x").put(10, "ten");
    items.push("b").unwrap();
    assert_eq!(
        items.keys().cloned().collect::<Vec<_>>(),
        [Key::Int(0), Key::from("name"), Key::Int(10), Key::Int(11)]
    );
}

#[test]
fn test_push_after_max_key_fails_without_overwriting() {
    let mut items = Collection::new();
    items.put(i64::MAX, "last");

    let err = items.push("overflow").unwrap_err();
    assert!(err.is_exhausted());
    assert_eq!(err, CollectionError::KeySpaceExhausted { last: i64::MAX });
    assert_eq!(items.count(), 1);
    assert_eq!(items.value(i64::MAX), Some(&Value::from("last")));
}

#[test]
fn test_each_visits_in_order_without_mutating() {
    let items = collection(json!({"b": 2, "a": 1}));
    let mut seen = Vec::new();
    let same = items.each(|v| seen.push(v.clone()));
    assert_eq!(seen, [Value::from(2), Value::from(1)]);
    assert_eq!(same.count(), 2);
}

#[test]
fn test_json_projection_preserves_shape_and_order() {
    let list = collection(json!([1, "two", null]));
    assert_eq!(list.to_json_string().unwrap(), r#"[1,"two",null]"#);

    let map = collection(json!({"z": true, "a": [1.5]}));
    assert_eq!(map.to_json_string().unwrap(), r#"{"z":true,"a":[1.5]}"#);

    let parsed: Collection = serde_json::from_str(r#"{"z":true,"a":[1.5]}"#).unwrap();
    assert_eq!(parsed, map);
    assert!(serde_json::from_str::<Collection>("3").is_err());
}

#[test]
fn test_iteration_and_conversions() {
    let items: Collection = vec![Value::from("a"), Value::from("b")].into();
    assert!(items.is_list());

    let pairs: Vec<(Key, Value)> = items.clone().into_iter().collect();
    assert_eq!(pairs[1], (Key::Int(1), Value::from("b")));

    let rebuilt: Collection = pairs.into_iter().collect();
    assert_eq!(rebuilt, items);

    let count = (&items).into_iter().filter(|(k, _)| k.as_int().is_some()).count();
    assert_eq!(count, 2);

    assert!(Collection::try_from(json!("scalar")).is_err());
}
