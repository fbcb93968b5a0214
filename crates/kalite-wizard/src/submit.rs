use kalite_core::models::draft::{DraftRecord, FieldValue};
use kalite_core::models::form::FormKind;
use kalite_taxonomy::cache::BoxFuture;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SubmitError;
use crate::form::FormAdapter;
use crate::step::FieldKind;

/// Field that tags every payload with its form kind.
pub const FORM_TYPE_FIELD: &str = "form_turu";

/// The normalized, flat record handed to the submit collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub form: FormKind,
    pub record: serde_json::Map<String, serde_json::Value>,
}

/// What the collaborator reports back on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmitReceipt {
    pub record_id: Option<String>,
}

/// The external collaborator that stores a finished record.
pub trait SubmitHandler: Send + Sync {
    fn submit<'a>(
        &'a self,
        payload: &'a SubmitPayload,
    ) -> BoxFuture<'a, Result<SubmitReceipt, SubmitError>>;
}

/// Build the outgoing payload from a validated draft.
///
/// Text is trimmed and blank optional fields are dropped. Blank numbers
/// take their declared default. Dates render as ISO-8601. Fields the form
/// does not declare (e.g. an `id` carried by an edit flow) pass through
/// when non-blank.
pub fn normalize(form: &dyn FormAdapter, draft: &DraftRecord) -> SubmitPayload {
    let mut record = serde_json::Map::new();

    for spec in form.steps().iter().flat_map(|s| &s.fields) {
        let value = draft.get(spec.name);
        let blank = draft.is_blank(spec.name);

        let rendered = match spec.kind {
            FieldKind::Number { default, .. } => {
                let n = if blank {
                    Some(default)
                } else {
                    value.and_then(FieldValue::as_number)
                };
                n.map(|n| FieldValue::Number(n).to_payload())
            }
            FieldKind::Date => value
                .and_then(FieldValue::as_date)
                .map(|d| serde_json::Value::String(d.to_string())),
            FieldKind::Flag => Some(serde_json::Value::Bool(
                value.and_then(FieldValue::as_bool).unwrap_or(false),
            )),
            FieldKind::Text
            | FieldKind::LongText
            | FieldKind::Select { .. }
            | FieldKind::Classification => {
                if blank {
                    None
                } else {
                    value.map(FieldValue::to_payload)
                }
            }
        };

        if let Some(rendered) = rendered {
            record.insert(spec.name.to_string(), rendered);
        }
    }

    for (name, value) in draft.iter() {
        if form.field(name).is_none() && !value.is_blank() {
            record.insert(name.to_string(), value.to_payload());
        }
    }

    record.insert(
        FORM_TYPE_FIELD.to_string(),
        serde_json::Value::String(form.kind().as_str().to_string()),
    );

    SubmitPayload {
        form: form.kind(),
        record,
    }
}
