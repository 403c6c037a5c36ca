//! Error types for herodex.
//!
//! This module defines the centralized error type [`HeroDexError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The view-coordination core (filtering, paging, favorites, selection) is total and
//! never produces an error. Only catalog fetches and the ambient layers do.

use thiserror::Error;

/// The main error type for herodex operations.
///
/// # Examples
///
/// ```
/// use herodex::HeroDexError;
///
/// fn validate_page_size(size: usize) -> Result<(), HeroDexError> {
///     if size == 0 {
///         return Err(HeroDexError::Config("page_size must be at least 1".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum HeroDexError {
    /// Retrieving the hero catalog failed.
    ///
    /// Covers transport failures, timeouts, non-success HTTP statuses and bodies
    /// that cannot be decoded. The string is a human-readable message that is
    /// shown to the user as-is.
    #[error("{0}")]
    FetchFailed(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, such as reading the
    /// configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HeroDexError {
    /// Builds a [`HeroDexError::FetchFailed`] from anything displayable.
    pub fn fetch(message: impl std::fmt::Display) -> Self {
        Self::FetchFailed(message.to_string())
    }
}

/// A specialized `Result` type for herodex operations.
pub type Result<T> = std::result::Result<T, HeroDexError>;
