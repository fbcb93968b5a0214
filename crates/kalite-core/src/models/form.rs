use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The kind of record a wizard composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FormKind {
    /// Düzeltici Önleyici Faaliyet (corrective/preventive action).
    Dof,
    PatientSafety,
    EmployeeSafety,
    Emergency,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Dof,
        FormKind::PatientSafety,
        FormKind::EmployeeSafety,
        FormKind::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Dof => "dof",
            FormKind::PatientSafety => "patient_safety",
            FormKind::EmployeeSafety => "employee_safety",
            FormKind::Emergency => "emergency",
        }
    }

    /// The classification taxonomy a form of this kind selects from.
    pub fn taxonomy(&self) -> TaxonomyKind {
        match self {
            FormKind::Dof => TaxonomyKind::Dof,
            FormKind::PatientSafety => TaxonomyKind::PatientSafety,
            FormKind::EmployeeSafety => TaxonomyKind::EmployeeSafety,
            FormKind::Emergency => TaxonomyKind::Emergency,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownFormKind(s.to_string()))
    }
}

/// Identifies one of the built-in classification taxonomies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TaxonomyKind {
    #[serde(rename = "dof")]
    Dof,
    #[serde(rename = "hasta_guvenligi")]
    PatientSafety,
    #[serde(rename = "calisan_guvenligi")]
    EmployeeSafety,
    #[serde(rename = "acil_durum")]
    Emergency,
}

impl TaxonomyKind {
    pub const ALL: [TaxonomyKind; 4] = [
        TaxonomyKind::Dof,
        TaxonomyKind::PatientSafety,
        TaxonomyKind::EmployeeSafety,
        TaxonomyKind::Emergency,
    ];

    /// Stable table id, also used as the file stem of JSON overrides.
    pub fn id(&self) -> &'static str {
        match self {
            TaxonomyKind::Dof => "dof",
            TaxonomyKind::PatientSafety => "hasta_guvenligi",
            TaxonomyKind::EmployeeSafety => "calisan_guvenligi",
            TaxonomyKind::Emergency => "acil_durum",
        }
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TaxonomyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxonomyKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| CoreError::UnknownTaxonomy(s.to_string()))
    }
}
