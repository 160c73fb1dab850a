/// Crate-wide result alias.
pub type ScrollResult<T> = Result<T, ScrollError>;

/// Errors produced while building or evaluating scroll timelines.
#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    /// A table, offset, config or other input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A timeline or channel binding could not be assembled.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Sampling or rasterisation failed at runtime.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollError {
    /// Build a [`ScrollError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ScrollError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ScrollError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
