//! Error types for the akinator crate

use thiserror::Error;

/// Main error type for the akinator crate
///
/// The question/answer loop itself never fails; every variant here describes
/// malformed configuration caught while building a catalog or a session.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("catalog has no items")]
    EmptyCatalog,

    #[error("catalog has no attributes")]
    NoAttributes,

    #[error("item '{item}' appears more than once in the catalog")]
    DuplicateItem { item: String },

    #[error("attribute '{attribute}' appears more than once in the attribute list")]
    DuplicateAttribute { attribute: String },

    #[error("item '{item}' does not define attribute '{attribute}'")]
    MissingAttribute { item: String, attribute: String },

    #[error("attribute '{attribute}' is not defined by the catalog")]
    UnknownAttribute { attribute: String },

    #[error("{name} {value} is out of range (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("invalid answer '{input}'. Expected one of: {expected}")]
    ParseAnswer { input: String, expected: String },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("unsupported language '{input}'. Expected one of: {expected}")]
    ParseLanguage { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog format error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
