use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown form kind: {0}")]
    UnknownFormKind(String),

    #[error("unknown taxonomy: {0}")]
    UnknownTaxonomy(String),

    #[error("draft record must be a JSON object, got {0}")]
    DraftNotAnObject(String),
}
