//! Error types for message composition.

/// Result type alias for composition operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Composition error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Address failed RFC 5322 syntax validation.
    #[error("Invalid email address '{0}'")]
    InvalidAddress(String),
}
