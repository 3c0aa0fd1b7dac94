//! Error types for the tier list plugin.
//!
//! This module defines the centralized error type [`TierListError`] and a type alias
//! [`Result`] used throughout the crate. All variants derive their `Error`
//! implementation through `thiserror`.

use thiserror::Error;

/// The main error type for tier list operations.
///
/// Most variants carry a human-readable description. I/O failures wrap the
/// underlying `std::io::Error` through `#[from]` so `?` converts them directly.
///
/// # Examples
///
/// ```
/// use tierlist::domain::TierListError;
///
/// fn parse_payload() -> Result<(), TierListError> {
///     Err(TierListError::Catalog("expected a JSON array".to_string()))
/// }
///
/// assert!(parse_payload().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TierListError {
    /// The catalog payload could not be read or decoded.
    ///
    /// Covers malformed JSON, a non-array document, and HTTP failures while
    /// fetching a remote catalog.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// An event referred to an entry name that is not in the loaded catalog.
    ///
    /// Entry names are produced by the renderer from the current board, so this
    /// indicates a stale or fabricated event rather than bad data.
    #[error("Unknown catalog entry: {0}")]
    UnknownEntry(String),

    /// A filter label outside the fixed vocabulary was supplied.
    #[error("Unknown filter label: {0}")]
    UnknownFilter(String),
}

/// A specialized `Result` type for tier list operations.
pub type Result<T> = std::result::Result<T, TierListError>;
