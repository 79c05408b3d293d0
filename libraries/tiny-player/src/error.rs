//! Error types for the player session

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Transport or widget call addressed an entry outside the playlist
    #[error("Index out of bounds: {index} (playlist has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Audio element was discovered without any source URL
    #[error("Audio element {0:?} has no sources")]
    NoSources(String),

    /// Sound engine could not create a handle
    #[error("Engine error: {0}")]
    Engine(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlayerError {
    /// Create an engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
