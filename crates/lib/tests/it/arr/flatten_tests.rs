use serde_json::json;
use sundry::{Map, Value, arr};

use crate::helpers::{config, value};

#[test]
fn test_dot_produces_dotted_keys_in_order() {
    let flat = arr::dot(&config(), "");
    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "app.name",
            "app.debug",
            "app.features.0",
            "app.features.1",
            "db.host",
            "db.port",
            "db.replica",
        ]
    );
    assert_eq!(flat["db.port"], 5432);
}

#[test]
fn test_dot_applies_prefix_and_drops_empty_containers() {
    let data = value(json!({"a": {"b": 1}, "empty": {}, "none": []}));
    let flat = arr::dot(&data, "cfg.");
    assert_eq!(flat.len(), 1);
    assert_eq!(flat["cfg.a.b"], 1);
}

#[test]
fn test_undot_round_trips_through_dot() {
    let flat = arr::dot(&config(), "");
    let rebuilt = arr::undot(&flat);
    assert_eq!(arr::dot(&rebuilt, ""), flat);
}

#[test]
fn test_flatten_collects_leaves_depth_first() {
    let data = value(json!({"a": [1, {"b": 2}], "c": "three", "d": null}));
    assert_eq!(
        arr::flatten(&data),
        [Value::from(1), Value::from(2), Value::from("three"), Value::Null]
    );
    assert_eq!(arr::flatten(&Value::from(7)), [Value::from(7)]);
}

#[test]
fn test_except_and_only() {
    let Value::Map(map) = value(json!({"a": 1, "b": 2, "c": 3})) else {
        panic!("fixture is a map");
    };
    let except = arr::except(&map, &["b"]);
    let only = arr::only(&map, &["c", "a"]);
    assert_eq!(except.keys().collect::<Vec<_>>(), ["a", "c"]);
    assert_eq!(only.keys().collect::<Vec<_>>(), ["a", "c"]);
}

#[test]
fn test_divide_and_build() {
    let Value::Map(map) = value(json!({"x": 1, "y": 2})) else {
        panic!("fixture is a map");
    };
    let (keys, values) = arr::divide(&map);
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(values, [Value::from(1), Value::from(2)]);

    let built: Map = arr::build(&map, |k, v| (k.to_uppercase(), v.clone()));
    assert_eq!(built.keys().collect::<Vec<_>>(), ["X", "Y"]);
}

#[test]
fn test_first_and_last_with_predicate() {
    let Value::Map(map) = value(json!({"a": 1, "b": 20, "c": 30, "d": 4})) else {
        panic!("fixture is a map");
    };
    let big = |_: &str, v: &Value| v.as_int().is_some_and(|n| n > 10);
    assert_eq!(arr::first(&map, big), Some(&Value::from(20)));
    assert_eq!(arr::last(&map, big), Some(&Value::from(30)));
    assert_eq!(arr::first(&map, |k, _| k == "z"), None);
}

#[test]
fn test_pluck_with_and_without_keys() {
    let users = value(json!([
        {"id": 1, "name": "Ada"},
        {"id": 2, "name": "Grace"},
        {"id": 3},
    ]));
    assert_eq!(arr::pluck(&users, "name", None), value(json!(["Ada", "Grace", null])));
    assert_eq!(
        arr::pluck(&users, "name", Some("id")),
        value(json!({"1": "Ada", "2": "Grace", "3": null}))
    );
}

#[test]
fn test_fetch_skips_items_missing_a_segment() {
    let data = value(json!({
        "first": {"meta": {"tag": "x"}},
        "second": {"meta": {}},
        "third": {"meta": {"tag": "z"}},
    }));
    assert_eq!(arr::fetch(&data, "meta.tag"), [Value::from("x"), Value::from("z")]);
}
