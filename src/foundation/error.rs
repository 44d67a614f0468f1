use crate::sequence::ParseError;

/// Convenience result type used across breathpace.
pub type PaceResult<T> = Result<T, PaceError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum PaceError {
    /// Invalid user-provided options or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// The sequence text did not parse.
    #[error("sequence error: {0}")]
    Parse(#[from] ParseError),

    /// Errors while turning a scene into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from the `ffmpeg` encoder process.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PaceError {
    /// Build a [`PaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PaceError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PaceError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
