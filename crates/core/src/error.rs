//! Gateway error taxonomy.

use thiserror::Error;

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by gateway operations.
///
/// Raw transport errors (HTTP, JSON) never cross the gateway boundary;
/// the transports map them into one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested id is unknown to the serving transport.
    #[error("not found: {0}")]
    NotFound(String),

    /// The transport failed and no substitute result was possible.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A streaming frame could not be decoded.
    #[error("malformed frame: {0}")]
    Parse(String),
}

impl Error {
    /// Build a [`Error::NotFound`] for an entity kind and id.
    pub fn not_found(kind: &str, id: &str) -> Self {
        Self::NotFound(format!("{kind} '{id}'"))
    }

    /// True if this error means a missing entity rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
