/// Catalog search abstraction
pub mod catalog;
/// HTTP image downloads
pub mod download;
/// Data entities for albums, tracks and list entries
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use catalog::Catalog;
pub use download::{HttpDownloader, ImageDownloader};
pub use spotify::SpotifyClient;

use errors::Result;

/// Clients that can build themselves from the process environment.
pub trait FromEnv: Sized {
    /// Create the client or raise a configuration error
    fn try_default() -> Result<Self>;
}
