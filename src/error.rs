//! Error types
//!
//! Only startup can fail in a recoverable-to-report way. Inside the loop,
//! illegal moves and over-cap shots are plain no-ops.

/// Errors surfaced by startup and the main loop
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// A required asset is missing or unusable
    #[error("Asset unavailable: {0}")]
    AssetUnavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed or written
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// The presentation layer failed mid-frame
    #[error("Presentation error: {0}")]
    Presentation(String),
}
