use std::{fmt, str::FromStr};

use crate::clients::errors::Error;

/// Separator between the name and the artist on a list line
pub const ENTRY_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    pub artists: Vec<Artist>,
    pub images: Vec<Image>, // largest first, as returned by Spotify
}

impl Album {
    /// URL of the highest resolution cover, if the album has any
    pub fn cover_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
}

/// Which kind of catalog item a list is searched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Album,
    Track,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Album => f.write_str("album"),
            SearchMode::Track => f.write_str("track"),
        }
    }
}

/// A single `"<name> / <artist>"` line of a list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub artist: String,
}

impl FromStr for ListEntry {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.trim().split(ENTRY_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(artist), None) => Ok(ListEntry {
                name: name.to_string(),
                artist: artist.to_string(),
            }),
            _ => Err(Error::ParseError(format!(
                "expected \"<name>{ENTRY_SEPARATOR}<artist>\", got \"{line}\""
            ))),
        }
    }
}
