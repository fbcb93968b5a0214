use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Field name → human-readable message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Fold `other` in without overwriting existing messages.
    pub fn extend(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.add(field, message);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub fn required(label: &str) -> String {
    format!("{label} zorunludur.")
}

pub fn must_select(label: &str) -> String {
    format!("{label} seçilmelidir.")
}

pub fn invalid_choice(label: &str) -> String {
    format!("{label} için geçersiz seçim.")
}

pub fn invalid_date(label: &str) -> String {
    format!("{label} geçerli bir tarih olmalıdır.")
}

pub fn invalid_number(label: &str) -> String {
    format!("{label} sayı olmalıdır.")
}

pub fn below_minimum(label: &str, min: f64) -> String {
    format!("{label} en az {min} olmalıdır.")
}

pub fn invalid_text(label: &str) -> String {
    format!("{label} metin olmalıdır.")
}

pub fn invalid_flag(label: &str) -> String {
    format!("{label} evet ya da hayır olmalıdır.")
}
