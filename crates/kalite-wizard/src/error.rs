use kalite_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("step {step} does not exist (form has {count} steps)")]
    UnknownStep { step: usize, count: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Failure reported by the submit collaborator.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("record rejected: {0}")]
    Rejected(String),

    #[error("data store unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
