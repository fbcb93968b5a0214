//! kalite-wizard
//!
//! Multi-step wizard engine for composing DÖF records and incident reports.
//! A [`controller::WizardController`] walks a form's ordered steps over a
//! [`kalite_core::models::draft::DraftRecord`], gating forward moves on
//! step validation and handing the finished record to an injected
//! [`submit::SubmitHandler`].

pub mod controller;
pub mod error;
pub mod form;
pub mod forms;
pub mod step;
pub mod submit;
pub mod validation;
pub mod view;

use kalite_core::models::draft::DraftRecord;
use kalite_core::models::form::FormKind;
use kalite_taxonomy::TaxonomySet;

use controller::WizardController;
use error::WizardError;

/// Open a wizard for `kind` on step 1.
///
/// `initial` seeds the draft for edit flows; fields it lacks take the
/// form's defaults.
pub fn create_wizard(
    kind: FormKind,
    taxonomies: &TaxonomySet,
    initial: Option<DraftRecord>,
) -> WizardController {
    let form = forms::form_for(kind);
    let taxonomy = taxonomies.get(form.classification().taxonomy);
    WizardController::new(form, taxonomy, initial)
}

/// Open a wizard from wire input: a form name such as `"dof"` and an
/// optional JSON object holding an existing record.
pub fn open_wizard(
    form: &str,
    taxonomies: &TaxonomySet,
    initial: Option<serde_json::Value>,
) -> Result<WizardController, WizardError> {
    let kind: FormKind = form.parse()?;
    let initial = initial.map(DraftRecord::from_json).transpose()?;
    Ok(create_wizard(kind, taxonomies, initial))
}
