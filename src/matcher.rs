use crate::clients::entities::{Album, Track};

/// Catalog items that list the artists credited on them, in catalog order.
pub trait Credited {
    /// Names of the credited artists
    fn artist_names(&self) -> impl Iterator<Item = &str>;
}

impl Credited for Album {
    fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(|artist| artist.name.as_str())
    }
}

impl Credited for Track {
    fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(|artist| artist.name.as_str())
    }
}

/// Pick the first item credited to `target_artist`.
///
/// A candidate artist matches when, ignoring case, either name contains the
/// other. Items and their artists are checked in the given order and the
/// first hit wins. An empty target never matches.
pub fn find_match<'a, T: Credited>(items: &'a [T], target_artist: &str) -> Option<&'a T> {
    let target = target_artist.to_lowercase();
    if target.is_empty() {
        return None;
    }
    items.iter().find(|item| {
        item.artist_names().any(|name| {
            let candidate = name.to_lowercase();
            candidate.contains(&target) || target.contains(&candidate)
        })
    })
}
