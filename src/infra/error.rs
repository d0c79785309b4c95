//! Types for reporting errors.
//!
//! Greeting someone can only fail in one way, see [`ValidationError`].

/// An error caused by invalid input.
/// The caller can do something to fix these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name to greet was empty.
    #[error("empty name test")]
    EmptyName,
}

/// The result of calling functions that validate their input.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl From<validator::ValidationErrors> for ValidationError {
    fn from(e: validator::ValidationErrors) -> Self {
        // Names only have a length rule, so any failure means the name was empty.
        tracing::debug!("invalid field(s): {}", e);
        ValidationError::EmptyName
    }
}

/// Failed to load configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}
