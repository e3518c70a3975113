//! Rartwork - Download album artwork for album and track lists
//!
//! This library reads `"<name> / <artist>"` lists, resolves every entry to an
//! album on Spotify and saves the album cover next to the others in a single
//! output directory.

/// Client modules for interacting with external services
pub mod clients;
/// The batch loop that turns list entries into artwork files
pub mod fetcher;
/// Artist based selection of search results
pub mod matcher;
/// Per entry, per list and per run outcomes
pub mod report;
/// Query normalization and filename sanitization
pub mod text;
