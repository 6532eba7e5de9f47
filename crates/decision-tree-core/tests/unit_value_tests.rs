//! Unit tests for the dynamic Value type

use decision_tree_core::{DecisionError, Value};
use serde_json::json;

#[test]
fn test_from_json_nested() {
    let val = Value::from(json!({
        "user": {
            "name": "Bob",
            "age": 30,
            "tags": ["vip", "new"],
            "manager": null
        }
    }));

    assert_eq!(
        val.get_path(&["user", "name"]).and_then(Value::as_str),
        Some("Bob")
    );
    assert_eq!(
        val.get_path(&["user", "age"]).and_then(Value::as_f64),
        Some(30.0)
    );
    assert_eq!(
        val.get_path(&["user", "tags"]),
        Some(&Value::Array(vec![Value::from("vip"), Value::from("new")]))
    );
    assert!(val
        .get_path(&["user", "manager"])
        .is_some_and(Value::is_null));
}

#[test]
fn test_get_path_missing() {
    let val = Value::from(json!({"a": {"b": 1}}));

    assert_eq!(val.get_path(&["a", "c"]), None);
    assert_eq!(val.get_path(&["a", "b", "c"]), None);
    assert_eq!(val.get_path(&[]), Some(&val));
}

#[test]
fn test_field_missing_is_error() {
    let val = Value::from(json!({"a": true}));

    assert_eq!(val.field("a").ok().and_then(Value::as_bool), Some(true));
    assert_eq!(
        val.field("b"),
        Err(DecisionError::FieldNotFound("b".to_string()))
    );
}

#[test]
fn test_deserialize_untagged() -> anyhow::Result<()> {
    let val: Value = serde_json::from_str(r#"{"amount": 12.5, "ok": false}"#)?;

    assert_eq!(val.get("amount"), Some(&Value::Number(12.5)));
    assert_eq!(val.get("ok"), Some(&Value::Bool(false)));
    assert_eq!(val.type_name(), "object");
    Ok(())
}

#[test]
fn test_primitive_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(3_i64), Value::Number(3.0));
    assert_eq!(Value::from(String::from("s")), Value::String("s".to_string()));
    assert_eq!(Value::from(vec![Value::Null]).type_name(), "array");
}
