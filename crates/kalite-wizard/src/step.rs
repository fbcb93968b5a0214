use kalite_core::models::draft::{DraftRecord, FieldValue};
use kalite_taxonomy::node::OptionItem;
use serde::Serialize;

use crate::validation::{self, FieldErrors};

/// How a field is entered and checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    LongText,
    Date,
    /// A fixed dropdown. The empty string is "unselected".
    Select {
        #[serde(skip)]
        options: &'static [(&'static str, &'static str)],
    },
    /// A dropdown fed by the form's taxonomy.
    Classification,
    /// Never required: a blank value falls back to `default`.
    Number { default: f64, min: f64 },
    Flag,
}

impl FieldKind {
    /// Whether a non-blank value has a shape this kind can hold. Free
    /// text also takes dates, since an ISO-looking string arrives as one.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldKind::Text | FieldKind::LongText, FieldValue::Text(_) | FieldValue::Date(_)) => {
                true
            }
            (FieldKind::Select { .. } | FieldKind::Classification, FieldValue::Text(_)) => true,
            (FieldKind::Date, FieldValue::Date(_) | FieldValue::Text(_)) => true,
            (FieldKind::Number { .. }, FieldValue::Number(_) | FieldValue::Text(_)) => true,
            (FieldKind::Flag, FieldValue::Bool(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Fixed options for select fields; `None` for everything else.
    pub fn static_options(&self) -> Option<Vec<OptionItem>> {
        match self.kind {
            FieldKind::Select { options } => {
                Some(options.iter().copied().map(OptionItem::from).collect())
            }
            _ => None,
        }
    }

    /// The value a fresh draft starts with.
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Number { default, .. } => FieldValue::Number(default),
            FieldKind::Flag => FieldValue::Bool(false),
            _ => FieldValue::empty(),
        }
    }

    /// Check this field alone against the draft.
    pub fn check(&self, draft: &DraftRecord) -> Option<String> {
        let blank = draft.is_blank(self.name);
        let value = draft.get(self.name);

        if let Some(value) = value
            && !blank
            && !self.kind.accepts(value)
        {
            return Some(self.wrong_type());
        }

        match self.kind {
            FieldKind::Text | FieldKind::LongText => {
                (self.required && blank).then(|| validation::required(self.label))
            }
            FieldKind::Select { options } => {
                if blank {
                    return self.required.then(|| validation::must_select(self.label));
                }
                let code = draft.text(self.name).trim();
                (!options.iter().any(|(c, _)| *c == code))
                    .then(|| validation::invalid_choice(self.label))
            }
            FieldKind::Classification => {
                (self.required && blank).then(|| validation::must_select(self.label))
            }
            FieldKind::Date => {
                if blank {
                    return self.required.then(|| validation::required(self.label));
                }
                value
                    .and_then(FieldValue::as_date)
                    .is_none()
                    .then(|| validation::invalid_date(self.label))
            }
            FieldKind::Number { min, .. } => {
                if blank {
                    return None;
                }
                match value.and_then(FieldValue::as_number) {
                    None => Some(validation::invalid_number(self.label)),
                    Some(n) if n < min => Some(validation::below_minimum(self.label, min)),
                    Some(_) => None,
                }
            }
            FieldKind::Flag => None,
        }
    }

    fn wrong_type(&self) -> String {
        match self.kind {
            FieldKind::Text | FieldKind::LongText => validation::invalid_text(self.label),
            FieldKind::Select { .. } | FieldKind::Classification => {
                validation::invalid_choice(self.label)
            }
            FieldKind::Date => validation::invalid_date(self.label),
            FieldKind::Number { .. } => validation::invalid_number(self.label),
            FieldKind::Flag => validation::invalid_flag(self.label),
        }
    }
}

/// A check spanning several fields. Returns the field to flag and the
/// message when the draft violates it.
pub type CrossCheck = fn(&DraftRecord) -> Option<(&'static str, String)>;

#[derive(Debug, Clone)]
pub struct WizardStep {
    /// 1-based position in the form.
    pub id: usize,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    pub checks: Vec<CrossCheck>,
}

impl WizardStep {
    pub fn new(id: usize, title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            id,
            title,
            fields,
            checks: Vec::new(),
        }
    }

    pub fn with_check(mut self, check: CrossCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Field-local checks plus this step's cross-field checks.
    pub fn validate(&self, draft: &DraftRecord) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            if let Some(message) = field.check(draft) {
                errors.add(field.name, message);
            }
        }
        for check in &self.checks {
            if let Some((field, message)) = check(draft) {
                errors.add(field, message);
            }
        }
        errors
    }
}
