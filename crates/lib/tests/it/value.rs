//! Value integration tests

use serde_json::json;
use sundry::{Value, value::ValueError};

use crate::helpers::value;

#[test]
fn test_json_round_trip_preserves_order_and_types() {
    let source = r#"{"z":null,"b":true,"i":-3,"f":2.5,"s":"x","l":[1,[2]],"m":{"k":"v"}}"#;
    let parsed: Value = serde_json::from_str(source).unwrap();
    assert_eq!(parsed.to_json_string(), source);
    assert_eq!(parsed.child("i"), Some(&Value::Int(-3)));
    assert_eq!(parsed.child("f"), Some(&Value::Float(2.5)));
}

#[test]
fn test_serde_json_value_conversions() {
    let original = json!({"a": [1, 2.5, "x", null, false]});
    let converted = Value::from(original.clone());
    assert_eq!(serde_json::Value::from(converted), original);
    assert_eq!(serde_json::Value::from(Value::Float(f64::NAN)), serde_json::Value::Null);
}

#[test]
fn test_try_from_reports_type_mismatch() {
    let text = Value::from("hello");
    assert_eq!(String::try_from(&text), Ok("hello".to_string()));

    let err = i64::try_from(&text).unwrap_err();
    assert_eq!(
        err,
        ValueError::TypeMismatch {
            expected: "int",
            actual: "text"
        }
    );
    let err: sundry::Error = err.into();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "value");
}

#[test]
fn test_loose_equality() {
    assert!(Value::Null.loose_eq(&Value::from("")));
    assert!(Value::Bool(false).loose_eq(&Value::Null));
    assert!(Value::Bool(true).loose_eq(&Value::from(1)));
    assert!(!Value::from("a").loose_eq(&Value::from("b")));
    assert!(value(json!([1, 2])).loose_eq(&value(json!([1, 2]))));
    assert!(!value(json!([1])).loose_eq(&Value::from("1")));
}

#[test]
fn test_display() {
    assert_eq!(value(json!({"a": [1, "x"], "b": null})).to_string(), "{a: [1, x], b: null}");
}

#[test]
fn test_large_unsigned_widens_to_float() {
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert_eq!(Value::from(7u64), Value::Int(7));
}
