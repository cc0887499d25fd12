//! Error types for the Savory plugin.
//!
//! This module defines the centralized error type [`SavoryError`] and a type alias
//! [`Result`] used throughout the crate. Backend failures seen by the user are not
//! errors at this level: the request orchestrator folds them into the message slot
//! of the state store. `SavoryError` covers the failures the code itself must
//! propagate (encoding or decoding a payload, reading a theme file).

use thiserror::Error;

/// The main error type for Savory operations.
///
/// # Examples
///
/// ```
/// use savory::SavoryError;
///
/// fn theme_name(raw: &str) -> Result<&str, SavoryError> {
///     match raw.trim() {
///         "" => Err(SavoryError::Theme("theme name is empty".to_string())),
///         name => Ok(name),
///     }
/// }
///
/// assert!(theme_name("  ").is_err());
/// assert_eq!(theme_name("catppuccin-latte").unwrap(), "catppuccin-latte");
/// ```
#[derive(Debug, Error)]
pub enum SavoryError {
    /// The backend answered with a status outside the 2xx range.
    ///
    /// Zellij reports network-level failures as a non-success status as well,
    /// so this variant covers both.
    #[error("Transport error: {endpoint} returned status {status}")]
    Transport {
        /// Endpoint path that was called (e.g. `/api/search`).
        endpoint: &'static str,
        /// HTTP status reported by the host.
        status: u16,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// An outbound payload could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Savory operations.
pub type Result<T> = std::result::Result<T, SavoryError>;
