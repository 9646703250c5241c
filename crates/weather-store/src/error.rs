//! Error types for weather-store.

/// Result type for weather-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in weather-store.
///
/// Instructions that match no template are not errors; they produce an
/// empty outcome instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The backing store could not be locked.
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    /// The number of bound values does not match the placeholders.
    #[error("Expected {expected} bound parameters, got {actual}")]
    ParameterCount { expected: usize, actual: usize },

    /// A bound value has a type the placeholder cannot accept.
    #[error("Parameter {index} ({field}) must be {expected}")]
    ParameterType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

impl Error {
    /// Whether the caller may retry the same operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StoreUnavailable(_))
    }
}
