use rspotify::ClientError;
use thiserror::Error;

/// Everything that can go wrong while fetching artwork
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to parse list entry, error: {0}")]
    ParseError(String),

    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    #[error("Spotify API unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Album \"{0}\" has no artwork images")]
    MissingArtwork(String),

    #[error("Download error: {0}")]
    DownloadError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Summary serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

