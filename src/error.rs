use thiserror::Error;

/// Top-level error type for the floorplan kernel.
///
/// Only the document boundary and parameter validation can fail; the
/// geometry stages are total and fall back to defined values instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while reading or writing a floorplan document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    #[error("failed to parse floorplan document: {0}")]
    Parse(String),

    #[error("floorplan document has no `elements` field")]
    MissingElements,

    #[error("floorplan `elements` field is not an array")]
    ElementsNotArray,

    #[error("invalid element {id}: {reason}")]
    InvalidElement { id: String, reason: String },

    #[error("duplicate element id: {0}")]
    DuplicateId(String),

    #[error("failed to serialize floorplan document: {0}")]
    Serialize(String),
}

/// Errors related to engine parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("failed to parse engine parameters: {0}")]
    Parse(String),

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;
