//! Error types for catalog operations

use thiserror::Error;

/// Errors that can occur while building or querying the message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Locale tag could not be parsed
    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    /// A bundle referenced a message key the catalog does not define
    #[error("unknown message key: {0}")]
    UnknownKey(String),

    /// No bundle registered for the locale
    #[error("no message bundle for locale: {0}")]
    BundleNotFound(String),

    /// A bundle entry was not a string template
    #[error("failed to parse message bundle: {0}")]
    ParseError(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
