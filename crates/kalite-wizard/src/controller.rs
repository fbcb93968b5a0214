//! The step sequencer.
//!
//! States are the step ids `1..=N`. `next` moves forward only when the
//! current step validates; `previous` always moves back; `submit` is only
//! available on step N and is the single operation with an external effect.

use std::sync::Arc;

use kalite_core::models::classification::ClassificationSelection;
use kalite_core::models::draft::{DraftRecord, FieldValue};
use kalite_taxonomy::Taxonomy;
use kalite_taxonomy::node::OptionItem;
use serde::Serialize;
use ts_rs::TS;

use crate::form::FormAdapter;
use crate::step::{FieldSpec, WizardStep};
use crate::submit::{self, SubmitHandler, SubmitReceipt};
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum StepOutcome {
    Moved { from: usize, to: usize },
    /// Already on the first (for `previous`) or last (for `next`) step.
    AtBoundary { step: usize },
    /// The current step failed validation; nothing moved.
    Invalid { step: usize, errors: FieldErrors },
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum SubmitOutcome {
    /// Stored; the wizard is back on step 1 with a fresh draft.
    Submitted { receipt: SubmitReceipt },
    /// Submit was attempted before the terminal step. Nothing changed.
    NotOnTerminalStep { step: usize, terminal: usize },
    /// The record failed validation; `first_invalid_step` locates the
    /// earliest step holding an error.
    Invalid {
        errors: FieldErrors,
        first_invalid_step: usize,
    },
    /// The collaborator failed. Draft and step are unchanged.
    Failed { message: String },
}

pub struct WizardController {
    form: Arc<dyn FormAdapter>,
    taxonomy: Arc<dyn Taxonomy>,
    current: usize,
    draft: DraftRecord,
    errors: FieldErrors,
    submit_error: Option<String>,
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("current", &self.current)
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .field("submit_error", &self.submit_error)
            .finish_non_exhaustive()
    }
}

impl WizardController {
    pub fn new(
        form: Arc<dyn FormAdapter>,
        taxonomy: Arc<dyn Taxonomy>,
        initial: Option<DraftRecord>,
    ) -> Self {
        let defaults = form.defaults();
        let draft = match initial {
            Some(existing) => existing.seeded_from(defaults),
            None => defaults,
        };
        tracing::debug!(form = %form.kind(), steps = form.step_count(), "wizard opened");
        Self {
            form,
            taxonomy,
            current: 1,
            draft,
            errors: FieldErrors::new(),
            submit_error: None,
        }
    }

    pub fn form(&self) -> &dyn FormAdapter {
        self.form.as_ref()
    }

    pub fn taxonomy(&self) -> &dyn Taxonomy {
        self.taxonomy.as_ref()
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.form.step_count()
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.step_count()
    }

    pub fn step(&self, id: usize) -> Option<&WizardStep> {
        id.checked_sub(1).and_then(|idx| self.form.steps().get(idx))
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The top-level message from the last failed submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn selection(&self) -> ClassificationSelection {
        self.form.classification().selection(&self.draft)
    }

    pub fn next(&mut self) -> StepOutcome {
        let errors = self.validate_step(self.current);
        if !errors.is_empty() {
            tracing::debug!(form = %self.form.kind(), step = self.current, errors = errors.len(), "step blocked");
            self.errors = errors.clone();
            return StepOutcome::Invalid {
                step: self.current,
                errors,
            };
        }

        self.errors.clear();
        let from = self.current;
        self.current = (from + 1).min(self.step_count());
        if self.current == from {
            return StepOutcome::AtBoundary { step: from };
        }
        tracing::debug!(form = %self.form.kind(), from, to = self.current, "step advanced");
        StepOutcome::Moved {
            from,
            to: self.current,
        }
    }

    pub fn previous(&mut self) -> StepOutcome {
        let from = self.current;
        self.current = from.saturating_sub(1).max(1);
        if self.current == from {
            return StepOutcome::AtBoundary { step: from };
        }
        StepOutcome::Moved {
            from,
            to: self.current,
        }
    }

    /// Set one field. Changing a classification level clears every level
    /// below it in the same update, along with their messages.
    pub fn update_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        let dependents = if self.draft.get(name) != Some(&value) {
            self.form.classification().descendants_of(name)
        } else {
            Vec::new()
        };

        let draft = std::mem::take(&mut self.draft);
        self.draft = draft
            .with_field(name, value)
            .without_fields(dependents.iter().copied());

        self.errors.remove(name);
        for field in &dependents {
            self.errors.remove(field);
        }
    }

    /// Options a dropdown for `field` should offer right now. Taxonomy
    /// levels follow the current upstream selection and are empty while
    /// it is unset.
    pub fn options_for(&self, field: &str) -> Vec<OptionItem> {
        let fields = self.form.classification();
        let selection = fields.selection(&self.draft);

        if field == fields.category {
            return self.taxonomy.categories();
        }
        if fields.sub_category == Some(field) {
            return self.taxonomy.children_of(&selection.category);
        }
        if field == fields.description {
            return match fields.sub_category {
                Some(_) if selection.sub_category.is_empty() => Vec::new(),
                Some(_) => self
                    .taxonomy
                    .children_at(&selection.category, &selection.sub_category),
                None => self.taxonomy.children_of(&selection.category),
            };
        }
        self.form
            .field(field)
            .and_then(FieldSpec::static_options)
            .unwrap_or_default()
    }

    /// Errors for one step: required fields, field checks, cross-field
    /// checks, and an unreachable taxonomy path on this step's fields.
    pub fn validate_step(&self, id: usize) -> FieldErrors {
        let Some(step) = self.step(id) else {
            return FieldErrors::new();
        };
        let mut errors = step.validate(&self.draft);
        for (field, message) in self.classification_errors().iter() {
            if step.has_field(field) {
                errors.add(field, message);
            }
        }
        errors
    }

    /// Errors across every step.
    pub fn validate_all(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for step in self.form.steps() {
            errors.extend(self.validate_step(step.id));
        }
        errors
    }

    /// Flag the deepest classification level that is not reachable from
    /// the one above it.
    fn classification_errors(&self) -> FieldErrors {
        let fields = self.form.classification();
        let selection = fields.selection(&self.draft);
        let label = |name: &'static str| self.form.field(name).map(|f| f.label).unwrap_or(name);

        let mut errors = FieldErrors::new();
        if !self.taxonomy.is_valid_path(&selection.category, None, None) {
            errors.add(fields.category, validation::invalid_choice(label(fields.category)));
        } else if let Some(sub_field) = fields.sub_category
            && !self
                .taxonomy
                .is_valid_path(&selection.category, selection.sub_category(), None)
        {
            errors.add(sub_field, validation::invalid_choice(label(sub_field)));
        } else if !self.taxonomy.is_valid_path(
            &selection.category,
            selection.sub_category(),
            selection.description(),
        ) {
            errors.add(
                fields.description,
                validation::invalid_choice(label(fields.description)),
            );
        }
        errors
    }

    fn first_invalid_step(&self, errors: &FieldErrors) -> usize {
        self.form
            .steps()
            .iter()
            .find(|s| errors.fields().any(|f| s.has_field(f)))
            .map(|s| s.id)
            .unwrap_or(self.current)
    }

    /// Validate the whole record and hand it to `handler`.
    ///
    /// Only valid on the terminal step. On success the wizard resets to a
    /// fresh draft on step 1. On collaborator failure the draft, step and
    /// field state are kept and the failure is surfaced through
    /// [`WizardController::submit_error`].
    pub async fn submit(&mut self, handler: &dyn SubmitHandler) -> SubmitOutcome {
        let terminal = self.step_count();
        if self.current != terminal {
            return SubmitOutcome::NotOnTerminalStep {
                step: self.current,
                terminal,
            };
        }

        self.submit_error = None;
        let errors = self.validate_all();
        if !errors.is_empty() {
            let first_invalid_step = self.first_invalid_step(&errors);
            tracing::debug!(form = %self.form.kind(), errors = errors.len(), first_invalid_step, "submit blocked");
            self.errors = errors.clone();
            return SubmitOutcome::Invalid {
                errors,
                first_invalid_step,
            };
        }
        self.errors.clear();

        let payload = submit::normalize(self.form.as_ref(), &self.draft);
        match handler.submit(&payload).await {
            Ok(receipt) => {
                tracing::info!(form = %self.form.kind(), record_id = ?receipt.record_id, "record submitted");
                self.reset();
                SubmitOutcome::Submitted { receipt }
            }
            Err(e) => {
                tracing::warn!(form = %self.form.kind(), error = %e, "submission failed");
                let message = e.to_string();
                self.submit_error = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Discard the draft and return to step 1.
    pub fn reset(&mut self) {
        self.draft = self.form.defaults();
        self.current = 1;
        self.errors.clear();
        self.submit_error = None;
    }
}
