use thiserror::Error;

/// Errors that can occur while importing or nesting parts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NestError {
    /// The configuration contains values the engine cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A submitted part is malformed.
    #[error("invalid part '{id}': {reason}")]
    InvalidPart { id: String, reason: String },

    /// A part does not fit on an empty sheet in any of the allowed rotations.
    #[error("part '{id}' does not fit on an empty sheet in any rotation")]
    UnplaceablePart { id: String },
}

pub type Result<T> = std::result::Result<T, NestError>;
