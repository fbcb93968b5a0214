//! The in-progress record a wizard composes.
//!
//! A [`DraftRecord`] is a plain value: every update goes through a pure
//! function that consumes the draft and returns the next one, so callers
//! never share mutable form state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A single field value. Selects and free text are both `Text`; the empty
/// string is the "unselected" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Date(jiff::civil::Date),
    Text(String),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Blank means empty after trimming. Only text can be blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => n.is_nan(),
            FieldValue::Bool(_) | FieldValue::Date(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<jiff::civil::Date> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Render for an outgoing payload: text trimmed, whole numbers as
    /// integers, dates as ISO-8601.
    pub fn to_payload(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.trim().to_string()),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Date(d) => serde_json::Value::String(d.to_string()),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    serde_json::Value::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<jiff::civil::Date> for FieldValue {
    fn from(value: jiff::civil::Date) -> Self {
        FieldValue::Date(value)
    }
}

/// Field name → value for the record being composed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftRecord(BTreeMap<String, FieldValue>);

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a draft from an arbitrary JSON object.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::DraftNotAnObject(value.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text content of a field, or `""` when absent or not text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Absent fields count as blank.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(FieldValue::is_blank)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Return the draft with one field replaced.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Return the draft with each named field reset to the empty sentinel.
    pub fn without_fields<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            self.0.insert(name.to_string(), FieldValue::empty());
        }
        self
    }

    /// Overlay `self` onto `defaults`: fields present here win.
    pub fn seeded_from(self, defaults: DraftRecord) -> Self {
        let mut merged = defaults.0;
        merged.extend(self.0);
        DraftRecord(merged)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for DraftRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        DraftRecord(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
