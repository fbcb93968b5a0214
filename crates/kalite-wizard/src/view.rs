//! Read-only snapshots of a wizard, shaped for a front end.

use kalite_core::models::draft::DraftRecord;
use kalite_core::models::form::FormKind;
use kalite_taxonomy::node::OptionItem;
use serde::Serialize;

use crate::controller::WizardController;
use crate::error::WizardError;
use crate::step::FieldSpec;
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    #[serde(flatten)]
    pub spec: FieldSpec,
    /// Current dropdown choices. Empty for free-entry fields.
    pub options: Vec<OptionItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub id: usize,
    pub title: &'static str,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub form: FormKind,
    pub title: String,
    pub current_step: usize,
    pub step_count: usize,
    pub is_terminal: bool,
    pub step: StepView,
    pub draft: DraftRecord,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
}

impl WizardController {
    pub fn step_view(&self, id: usize) -> Result<StepView, WizardError> {
        let step = self.step(id).ok_or(WizardError::UnknownStep {
            step: id,
            count: self.step_count(),
        })?;
        Ok(StepView {
            id: step.id,
            title: step.title,
            fields: step
                .fields
                .iter()
                .map(|spec| FieldView {
                    spec: *spec,
                    options: self.options_for(spec.name),
                })
                .collect(),
        })
    }

    /// Snapshot of the whole wizard positioned on the current step.
    pub fn view(&self) -> Result<WizardView, WizardError> {
        Ok(WizardView {
            form: self.form().kind(),
            title: self.form().title().to_string(),
            current_step: self.current_step(),
            step_count: self.step_count(),
            is_terminal: self.is_terminal(),
            step: self.step_view(self.current_step())?,
            draft: self.draft().clone(),
            errors: self.errors().clone(),
            submit_error: self.submit_error().map(str::to_string),
        })
    }
}
