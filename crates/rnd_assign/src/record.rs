//! Name-based field access for dynamic JSON records.
//!
//! The toolkit's canonical accessor type is a closure; these helpers
//! build such closures from field names for `serde_json::Value`
//! targets, so call sites can say "group by `type`, overwrite `name`"
//! without writing the closure bodies themselves.
//!
//! Getter contract: `None` for non-record subjects, absent fields, and
//! explicit nulls. Setter contract: writing a named field onto a
//! non-record subject is an argument fault.

use serde_json::Value;

use rnd_core::{CanonicalKey, DrawError};

/// Read field `name` out of a JSON record.
///
/// `None` when the subject is not an object, the field is missing, or
/// it holds an explicit null.
pub fn get_field(subject: &Value, name: &str) -> Option<Value> {
    match subject {
        Value::Object(map) => match map.get(name) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v.clone()),
        },
        _ => None,
    }
}

/// Write `value` into field `name` of a JSON record, overwriting only
/// that field.
pub fn set_field(subject: &mut Value, name: &str, value: Value) -> Result<(), DrawError> {
    match subject {
        Value::Object(map) => {
            map.insert(name.to_string(), value);
            Ok(())
        }
        _ => Err(DrawError::InvalidArgument(
            "named-field write requires a JSON object",
        )),
    }
}

/// Key-selector factory: extracts the string form of field `name`.
///
/// Feed the result to the grouped assignment entry points.
pub fn field_key(name: &str) -> impl FnMut(&Value, usize) -> Option<String> + '_ {
    move |subject, _ix| get_field(subject, name).map(|v| v.canonical_key())
}

/// Setter factory for the engine's `apply` slot: writes each drawn
/// value into field `name` of the target record.
pub fn field_setter(name: &str) -> impl FnMut(&mut Value, Value, usize) -> Result<(), DrawError> + '_ {
    move |subject, value, _ix| set_field(subject, name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_field_returns_absent_for_non_records() {
        assert_eq!(get_field(&json!(7), "name"), None);
        assert_eq!(get_field(&json!(["a"]), "name"), None);
        assert_eq!(get_field(&json!({"name": null}), "name"), None);
        assert_eq!(
            get_field(&json!({"name": "sword"}), "name"),
            Some(json!("sword"))
        );
    }

    #[test]
    fn set_field_overwrites_only_the_named_field() {
        let mut subject = json!({"name": "sword_001", "type": "melee"});
        set_field(&mut subject, "name", json!("axe_004")).unwrap();
        assert_eq!(subject, json!({"name": "axe_004", "type": "melee"}));
    }

    #[test]
    fn set_field_rejects_non_records() {
        let mut subject = json!(42);
        let err = set_field(&mut subject, "name", json!("x")).unwrap_err();
        assert!(matches!(err, DrawError::InvalidArgument(_)));
    }

    #[test]
    fn field_key_reads_the_string_form() {
        let mut key_of = field_key("type");
        assert_eq!(key_of(&json!({"type": "melee"}), 0), Some("melee".to_string()));
        assert_eq!(key_of(&json!({"type": 3}), 1), Some("3".to_string()));
        assert_eq!(key_of(&json!({"other": true}), 2), None);
    }
}
