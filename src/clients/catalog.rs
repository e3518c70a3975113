use crate::clients::{
    entities::{Album, Track},
    errors::Result,
};

/// A music catalog that can be searched by free text.
///
/// Results come back in the catalog's relevance order, which the artist
/// matcher relies on: the first qualifying result wins.
pub trait Catalog {
    /// Search albums, returning at most `limit` candidates
    fn search_albums(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Album>>> + Send;

    /// Search tracks, returning at most `limit` candidates
    fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Track>>> + Send;
}
