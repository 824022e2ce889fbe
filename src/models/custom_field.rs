//! Ticket custom fields.
//!
//! A custom field's `value` is polymorphic on the wire: it is missing or
//! `null`, a boolean (checkbox fields), a string (text, dropdown, date),
//! or an array of strings (multi-select). Anything else is rejected, and
//! an array with a single non-string element fails the whole decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ZendeskError;

/// The decoded value of a custom field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    /// The field has no value (`null` or missing).
    #[default]
    Absent,
    /// Checkbox fields.
    Bool(bool),
    /// Text, dropdown, numeric-as-text and date fields.
    String(String),
    /// Multi-select fields, in the order the server sent them.
    StringList(Vec<String>),
}

impl CustomFieldValue {
    /// Decodes a raw JSON value, enforcing the allowed shapes.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::InvalidCustomFieldValue` naming the JSON type
    /// of the offending value (or array element).
    pub fn from_json(value: Value) -> Result<Self, ZendeskError> {
        match value {
            Value::Null => Ok(CustomFieldValue::Absent),
            Value::Bool(b) => Ok(CustomFieldValue::Bool(b)),
            Value::String(s) => Ok(CustomFieldValue::String(s)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(ZendeskError::invalid_custom_field(&other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(CustomFieldValue::StringList),
            other => Err(ZendeskError::invalid_custom_field(&other)),
        }
    }

    /// Returns true if the field carries no value.
    pub fn is_absent(&self) -> bool {
        matches!(self, CustomFieldValue::Absent)
    }

    /// Returns the value of a checkbox field.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CustomFieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value of a single-valued text field.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CustomFieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the selections of a multi-select field.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CustomFieldValue::StringList(list) => Some(list),
            _ => None,
        }
    }
}

impl From<bool> for CustomFieldValue {
    fn from(value: bool) -> Self {
        CustomFieldValue::Bool(value)
    }
}

impl From<&str> for CustomFieldValue {
    fn from(value: &str) -> Self {
        CustomFieldValue::String(value.to_string())
    }
}

impl From<String> for CustomFieldValue {
    fn from(value: String) -> Self {
        CustomFieldValue::String(value)
    }
}

impl From<Vec<String>> for CustomFieldValue {
    fn from(value: Vec<String>) -> Self {
        CustomFieldValue::StringList(value)
    }
}

/// A custom field set on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomField {
    /// Id of the ticket field definition.
    pub id: i64,

    /// The field's value.
    pub value: CustomFieldValue,
}

impl CustomField {
    /// Creates a custom field entry for a ticket payload.
    pub fn new(id: i64, value: impl Into<CustomFieldValue>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

impl<'de> Deserialize<'de> for CustomField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawCustomField {
            id: i64,
            #[serde(default)]
            value: Value,
        }

        let raw = RawCustomField::deserialize(deserializer)?;
        let value = CustomFieldValue::from_json(raw.value).map_err(serde::de::Error::custom)?;

        Ok(CustomField { id: raw.id, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(json: &str) -> Result<CustomField, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_absent_value() {
        let field = decode(r#"{"id": 1}"#).unwrap();
        assert_eq!(field, CustomField::new(1, CustomFieldValue::Absent));

        let field = decode(r#"{"id": 1, "value": null}"#).unwrap();
        assert!(field.value.is_absent());
    }

    #[test]
    fn test_bool_value() {
        let field = decode(r#"{"id": 360001, "value": true}"#).unwrap();
        assert_eq!(field.id, 360001);
        assert_eq!(field.value.as_bool(), Some(true));
    }

    #[test]
    fn test_string_value() {
        let field = decode(r#"{"id": 2, "value": "priority_customer"}"#).unwrap();
        assert_eq!(field.value.as_str(), Some("priority_customer"));
    }

    #[test]
    fn test_string_list_keeps_order() {
        let field = decode(r#"{"id": 3, "value": ["zeta", "alpha", "mid"]}"#).unwrap();
        assert_eq!(
            field.value.as_list(),
            Some(&["zeta".to_string(), "alpha".to_string(), "mid".to_string()][..])
        );
    }

    #[test]
    fn test_empty_list_is_a_list() {
        let field = decode(r#"{"id": 3, "value": []}"#).unwrap();
        assert_eq!(field.value, CustomFieldValue::StringList(vec![]));
    }

    #[test]
    fn test_list_with_number_is_rejected() {
        let err = decode(r#"{"id": 4, "value": ["a", 2, "c"]}"#).unwrap_err();
        assert!(err
            .to_string()
            .contains("number is an invalid type for custom field value"));
    }

    #[test]
    fn test_list_with_nested_array_is_rejected() {
        let err = decode(r#"{"id": 4, "value": [["a"]]}"#).unwrap_err();
        assert!(err.to_string().contains("array is an invalid type"));
    }

    #[test]
    fn test_number_value_is_rejected() {
        let err = decode(r#"{"id": 5, "value": 12.5}"#).unwrap_err();
        assert!(err.to_string().contains("number is an invalid type"));
    }

    #[test]
    fn test_object_value_is_rejected() {
        let err = decode(r#"{"id": 6, "value": {"nested": "x"}}"#).unwrap_err();
        assert!(err.to_string().contains("object is an invalid type"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(decode(r#"{"value": "x"}"#).is_err());
    }

    #[test]
    fn test_from_json_direct() {
        let err = CustomFieldValue::from_json(serde_json::json!([true])).unwrap_err();
        assert!(matches!(
            err,
            ZendeskError::InvalidCustomFieldValue { kind: "bool" }
        ));
    }

    #[test]
    fn test_serialize_natural_shape() {
        let fields = vec![
            CustomField::new(1, CustomFieldValue::Absent),
            CustomField::new(2, true),
            CustomField::new(3, "text"),
            CustomField::new(4, vec!["a".to_string(), "b".to_string()]),
        ];
        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"id": 1, "value": null},
                {"id": 2, "value": true},
                {"id": 3, "value": "text"},
                {"id": 4, "value": ["a", "b"]}
            ])
        );
    }
}
