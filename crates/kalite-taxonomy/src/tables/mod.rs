pub mod dof;
pub mod emergency;
pub mod employee_safety;
pub mod patient_safety;

use std::sync::Arc;

use kalite_core::models::form::TaxonomyKind;

use crate::Taxonomy;
use crate::node::{OptionItem, TaxonomyNode};

/// The compiled-in table for `kind`.
pub fn builtin(kind: TaxonomyKind) -> Arc<dyn Taxonomy> {
    match kind {
        TaxonomyKind::Dof => dof::table(),
        TaxonomyKind::PatientSafety => patient_safety::table(),
        TaxonomyKind::EmployeeSafety => employee_safety::table(),
        TaxonomyKind::Emergency => emergency::table(),
    }
}

fn items(pairs: &[(&str, &str)]) -> Vec<OptionItem> {
    pairs.iter().copied().map(OptionItem::from).collect()
}

/// A sub-category node whose children are leaf descriptions.
fn sub(code: &str, label: &str, descriptions: &[(&str, &str)]) -> TaxonomyNode {
    TaxonomyNode::branch(
        code,
        label,
        descriptions
            .iter()
            .map(|(c, l)| TaxonomyNode::leaf(*c, *l))
            .collect(),
    )
}
