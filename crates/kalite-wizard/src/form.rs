use kalite_core::models::classification::ClassificationFields;
use kalite_core::models::draft::DraftRecord;
use kalite_core::models::form::FormKind;

use crate::step::{FieldSpec, WizardStep};

/// Adapter between one form type and the generic controller.
///
/// Each form kind declares its own field set, steps and classification
/// fields; the controller never branches on the form kind.
pub trait FormAdapter: Send + Sync {
    fn kind(&self) -> FormKind;

    /// Human-readable form title.
    fn title(&self) -> &str;

    /// Ordered steps; ids run 1..=N.
    fn steps(&self) -> &[WizardStep];

    /// Which fields carry the taxonomy levels.
    fn classification(&self) -> ClassificationFields;

    /// A fresh draft: every declared field at its default value.
    fn defaults(&self) -> DraftRecord {
        self.steps()
            .iter()
            .flat_map(|s| &s.fields)
            .map(|f| (f.name, f.default_value()))
            .collect()
    }

    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.steps()
            .iter()
            .flat_map(|s| &s.fields)
            .find(|f| f.name == name)
    }

    fn step_count(&self) -> usize {
        self.steps().len()
    }
}
