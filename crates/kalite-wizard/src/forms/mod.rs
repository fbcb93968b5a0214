//! The concrete forms: DÖF and the three incident reports.

pub mod dof;
pub mod emergency;
pub mod employee_safety;
pub mod patient_safety;

use std::sync::Arc;

use kalite_core::models::form::FormKind;

use crate::form::FormAdapter;
use crate::step::{FieldKind, FieldSpec};

pub fn form_for(kind: FormKind) -> Arc<dyn FormAdapter> {
    match kind {
        FormKind::Dof => Arc::new(dof::DofForm),
        FormKind::PatientSafety => Arc::new(patient_safety::PatientSafetyForm),
        FormKind::EmployeeSafety => Arc::new(employee_safety::EmployeeSafetyForm),
        FormKind::Emergency => Arc::new(emergency::EmergencyForm),
    }
}

fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required: true,
    }
}

fn text(name: &'static str, label: &'static str) -> FieldSpec {
    field(name, label, FieldKind::Text)
}

fn long_text(name: &'static str, label: &'static str) -> FieldSpec {
    field(name, label, FieldKind::LongText)
}

fn date(name: &'static str, label: &'static str) -> FieldSpec {
    field(name, label, FieldKind::Date)
}

fn select(
    name: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> FieldSpec {
    field(name, label, FieldKind::Select { options })
}

fn classification(name: &'static str, label: &'static str) -> FieldSpec {
    field(name, label, FieldKind::Classification)
}

fn number(name: &'static str, label: &'static str, default: f64, min: f64) -> FieldSpec {
    field(name, label, FieldKind::Number { default, min }).optional()
}

fn flag(name: &'static str, label: &'static str) -> FieldSpec {
    field(name, label, FieldKind::Flag).optional()
}

const HARM_LEVELS: &[(&str, &str)] = &[
    ("zarar_yok", "Zarar Yok"),
    ("hafif", "Hafif"),
    ("orta", "Orta"),
    ("ciddi", "Ciddi"),
    ("olum", "Ölüm"),
];
