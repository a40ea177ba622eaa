//! Dynamic back-office record

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// A dynamic record from a back-office endpoint.
///
/// The list screens never agree on a record schema, so records hold
/// their fields as raw JSON and expose typed getters. The client never
/// inspects a record's shape beyond what callers ask for.
///
/// # Example
///
/// ```
/// use opsboard_api::model::Record;
///
/// let record = Record::new()
///     .set("name", "North depot")
///     .set("zone_id", 12);
///
/// assert_eq!(record.get_str("name"), Some("North depot"));
/// assert_eq!(record.get_i64("zone_id"), Some(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Sets a field value (builder style, for create/update payloads).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns a field's raw JSON value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns a field as a string slice.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Returns a field as a signed integer.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.fields.get(key).and_then(Value::as_i64)
    }

    /// Returns a field as a float.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    /// Returns a field as a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    /// Returns the record id as a string.
    ///
    /// Endpoints disagree on whether ids are numbers or strings; both
    /// are accepted.
    pub fn id(&self) -> Option<String> {
        match self.fields.get("id") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns a field coerced to display text.
    ///
    /// Scalars render naturally, null renders empty, and structured
    /// values fall back to compact JSON.
    pub fn display(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(value) => value.to_string(),
        }
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over the record's field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2, 3])).is_none());
        assert!(Record::from_value(json!("plain")).is_none());
        assert!(Record::from_value(json!({"id": 1})).is_some());
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let numeric = Record::from_value(json!({"id": 42})).unwrap();
        assert_eq!(numeric.id(), Some("42".to_string()));

        let text = Record::from_value(json!({"id": "abc-1"})).unwrap();
        assert_eq!(text.id(), Some("abc-1".to_string()));

        let missing = Record::new();
        assert_eq!(missing.id(), None);
    }

    #[test]
    fn test_display_coercion() {
        let record = Record::from_value(json!({
            "name": "North depot",
            "active": true,
            "count": 7,
            "note": null,
        }))
        .unwrap();

        assert_eq!(record.display("name"), "North depot");
        assert_eq!(record.display("active"), "true");
        assert_eq!(record.display("count"), "7");
        assert_eq!(record.display("note"), "");
        assert_eq!(record.display("missing"), "");
    }
}
