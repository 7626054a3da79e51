//! Core error types for the eventform toolkit.
//!
//! Field validation failures are *not* errors in this taxonomy: they are
//! ordinary data, returned from the validator as an error map and stored
//! for rendering. The [`EventFormError`] enum covers everything else that
//! can genuinely fail at runtime (configuration loading, serialization of
//! the success dump, I/O in the demo event loop).

use thiserror::Error;

/// The primary error type for the eventform toolkit.
#[derive(Error, Debug)]
pub enum EventFormError {
    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, EventFormError>`.
pub type EventFormResult<T> = Result<T, EventFormError>;
