//! Preference store error types

use thiserror::Error;

/// Errors raised by a preference store backend
///
/// The theme manager never propagates these: reads that fail are treated
/// as "no saved value" and writes are dropped with a warning.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failed
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be parsed
    #[error("preference store data is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Data could not be serialized for storage
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The backend is unavailable (quota, permissions, missing API)
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for preference store operations
pub type Result<T> = std::result::Result<T, StoreError>;
