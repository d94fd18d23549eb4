//! Error types for the MusicMood library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No lyrics could be found for the requested song
    #[error("Lyrics not found for '{title}' by '{artist}'")]
    LyricsNotFound { title: String, artist: String },

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data parsing error
    #[error("Failed to parse data: {0}")]
    Parse(String),
}

impl Error {
    /// Check if the error means the song simply has no lyrics available
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::LyricsNotFound { .. })
    }
}
