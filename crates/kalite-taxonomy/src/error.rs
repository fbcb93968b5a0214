use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("empty code under '{parent}'")]
    EmptyCode { parent: String },

    #[error("duplicate code '{code}' under '{parent}'")]
    DuplicateCode { parent: String, code: String },

    #[error("node '{code}' declares an empty children list")]
    EmptyChildren { code: String },

    #[error("taxonomy '{id}' is nested deeper than {max} levels")]
    TooDeep { id: String, max: usize },

    #[error("taxonomy document id '{found}' does not match '{expected}'")]
    IdMismatch { expected: String, found: String },

    #[error("fetch failed for '{parent}': {message}")]
    Fetch { parent: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] kalite_core::error::CoreError),
}
