//! Error types for the Drip City browse engine.
//!
//! This module defines the centralized error type [`MarketError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for browse-engine operations.
///
/// This enum consolidates all error conditions that can occur while serving the
/// marketplace pages, from catalog loading to simulated fetch failures and
/// configuration issues. There is deliberately no finer-grained taxonomy for
/// fetch failures: the UI surfaces a single retryable "fetch failed" message,
/// so one variant with a description is all the callers need.
///
/// # Examples
///
/// ```
/// use dripcity::domain::MarketError;
///
/// fn refuse() -> Result<(), MarketError> {
///     Err(MarketError::Fetch("backend unreachable".to_string()))
/// }
/// assert!(refuse().is_err());
/// ```
#[derive(Debug, Error)]
pub enum MarketError {
    /// A data fetch failed.
    ///
    /// Non-fatal and always retryable: the caller recovers by re-issuing the
    /// same request (changing a filter again, resubmitting a form).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The catalog could not be loaded or parsed.
    ///
    /// Occurs when a catalog file is missing, malformed, or contains invalid
    /// JSON. The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or parsed. The string contains
    /// a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for browse-engine operations.
///
/// This is a type alias for `std::result::Result<T, MarketError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use dripcity::domain::Result;
///
/// fn load_something() -> Result<()> {
///     Ok(())
/// }
/// assert!(load_something().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, MarketError>;
