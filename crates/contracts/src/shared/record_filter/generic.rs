use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::FilterableRecord;

/// Loosely typed record loaded from JSON.
///
/// Any field besides `id` and `status` lands in `fields`. Missing or oddly
/// shaped values never fail deserialization; they read as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericRecord {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl GenericRecord {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    fn integer(&self, name: &str) -> Option<i64> {
        match self.fields.get(name)? {
            // Whole floats only; 50.5 falls between buckets
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().replace(',', "").parse::<i64>().ok(),
            _ => None,
        }
    }
}

impl FilterableRecord for GenericRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn text_field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => return Some(Cow::Borrowed(self.id.as_str())),
            "status" => return Some(Cow::Borrowed(self.status.as_str())),
            _ => {}
        }
        match self.fields.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    fn date_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    fn amount_field(&self, name: &str) -> Option<i64> {
        self.integer(name)
    }

    fn progress_field(&self, name: &str) -> Option<i64> {
        self.integer(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flattened_fields() {
        let json = r#"{"id":"1","status":"未手配","amount":500000,"requiredDate":"2025-04-20","name":"ポンプ部品"}"#;
        let record: GenericRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status(), "未手配");
        assert_eq!(record.amount_field("amount"), Some(500_000));
        assert_eq!(record.date_field("requiredDate"), Some("2025-04-20"));
        assert_eq!(record.text_field("name").as_deref(), Some("ポンプ部品"));
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let record = GenericRecord::new("9", "手配中")
            .with_field("amount", "abc")
            .with_field("requiredDate", 20250420)
            .with_field("memo", Value::Null);
        assert_eq!(record.amount_field("amount"), None);
        assert_eq!(record.date_field("requiredDate"), None);
        assert_eq!(record.text_field("memo"), None);
        assert_eq!(record.text_field("client"), None);
        assert_eq!(record.progress_field("progress"), None);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let record = GenericRecord::new("2", "完了")
            .with_field("amount", "1,200,000")
            .with_field("progress", 40.0);
        assert_eq!(record.amount_field("amount"), Some(1_200_000));
        assert_eq!(record.progress_field("progress"), Some(40));
    }

    #[test]
    fn test_fractional_numbers_are_rejected() {
        let record = GenericRecord::new("3", "進行中")
            .with_field("progress", 50.5)
            .with_field("amount", 999_999.9);
        assert_eq!(record.progress_field("progress"), None);
        assert_eq!(record.amount_field("amount"), None);
    }

    #[test]
    fn test_status_missing_defaults_to_empty() {
        let record: GenericRecord = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(record.status(), "");
        assert_eq!(record.text_field("id").as_deref(), Some("x"));
    }
}
