//! Error types for evlist
//!
//! The only runtime failure mode that matters is the one fetch; the rest
//! covers file output.

use thiserror::Error;

/// Main error type for evlist operations
#[derive(Error, Debug)]
pub enum EvlistError {
    #[error("Request to '{0}' failed: {1}")]
    Http(String, String),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Failed to decode event payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evlist operations
pub type Result<T> = std::result::Result<T, EvlistError>;

impl EvlistError {
    /// True for errors the TUI swallows (logged, view left empty) rather
    /// than surfaces to the user.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            EvlistError::Http(_, _) | EvlistError::Status(_) | EvlistError::Decode(_)
        )
    }
}
