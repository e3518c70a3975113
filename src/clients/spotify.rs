use log::debug;

use crate::clients::{
    Catalog, FromEnv,
    entities::{Album, Artist, Image, Track},
    errors::{Error, Result},
};
use rspotify::{
    ClientCredsSpotify, Credentials,
    model::{FullTrack, SearchResult, SearchType, SimplifiedAlbum, SimplifiedArtist},
    prelude::*,
};

const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

impl From<SimplifiedArtist> for Artist {
    fn from(f: SimplifiedArtist) -> Artist {
        Artist { name: f.name }
    }
}

impl From<SimplifiedAlbum> for Album {
    fn from(f: SimplifiedAlbum) -> Album {
        Album {
            name: f.name,
            artists: f.artists.into_iter().map(Artist::from).collect(),
            images: f
                .images
                .into_iter()
                .map(|image| Image { url: image.url })
                .collect(),
        }
    }
}

impl From<FullTrack> for Track {
    fn from(f: FullTrack) -> Track {
        Track {
            name: f.name,
            artists: f.artists.into_iter().map(Artist::from).collect(),
            album: Album::from(f.album),
        }
    }
}

pub struct SpotifyClient {
    pub spotify: ClientCredsSpotify,
}

impl SpotifyClient {
    pub fn new(spotify: ClientCredsSpotify) -> Self {
        SpotifyClient { spotify }
    }

    // Request an app token with the client credentials flow, no user interaction involved
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Requesting Spotify client credentials token ...");
        self.spotify.request_token().await?;
        debug!("Spotify token acquired");
        Ok(())
    }

    async fn search(&self, query: &str, kind: SearchType, limit: u32) -> Result<SearchResult> {
        debug!("Searching Spotify ({kind:?}, limit {limit}): {query}");
        let result = self
            .spotify
            .search(query, kind, None, None, Some(limit), None)
            .await?;
        Ok(result)
    }
}

impl FromEnv for SpotifyClient {
    // Create a SpotifyClient from environment variables or raise a configuration error
    fn try_default() -> Result<Self> {
        let creds = credentials_from(|name| std::env::var(name).ok())?;
        Ok(Self::new(ClientCredsSpotify::new(creds)))
    }
}

impl Catalog for SpotifyClient {
    async fn search_albums(&self, query: &str, limit: u32) -> Result<Vec<Album>> {
        match self.search(query, SearchType::Album, limit).await? {
            SearchResult::Albums(page) => Ok(page.items.into_iter().map(Album::from).collect()),
            _ => Err(Error::UnexpectedResponse(
                "album search returned a different result type".into(),
            )),
        }
    }

    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        match self.search(query, SearchType::Track, limit).await? {
            SearchResult::Tracks(page) => Ok(page.items.into_iter().map(Track::from).collect()),
            _ => Err(Error::UnexpectedResponse(
                "track search returned a different result type".into(),
            )),
        }
    }
}

fn credentials_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
    let required = |name: &str| match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::ConfigurationError(format!(
            "Missing {name} in environment variables or env file. Check README.md for details."
        ))),
    };
    let id = required(CLIENT_ID_VAR)?;
    let secret = required(CLIENT_SECRET_VAR)?;
    Ok(Credentials::new(&id, &secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simplified_album_json() -> serde_json::Value {
        serde_json::json!({
            "album_group": null,
            "album_type": "album",
            "artists": [
                {"external_urls": {}, "href": null, "id": null, "name": "The Beatles"}
            ],
            "available_markets": [],
            "external_urls": {},
            "href": null,
            "id": null,
            "images": [
                {"height": 640, "url": "https://i.scdn.co/image/large", "width": 640},
                {"height": 64, "url": "https://i.scdn.co/image/small", "width": 64}
            ],
            "name": "Abbey Road",
            "release_date": "1969-09-26",
            "release_date_precision": "day",
            "restrictions": null
        })
    }

    #[test]
    fn test_album_from_simplified_album() {
        let simplified: SimplifiedAlbum = serde_json::from_value(simplified_album_json()).unwrap();
        let album = Album::from(simplified);

        assert_eq!(album.name, "Abbey Road");
        assert_eq!(
            album.artists,
            vec![Artist {
                name: "The Beatles".into()
            }]
        );
        assert_eq!(album.cover_url(), Some("https://i.scdn.co/image/large"));
        assert_eq!(album.images.len(), 2);
    }

    fn lookup_in<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_credentials_missing_id() {
        let err = credentials_from(lookup_in(&[])).unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(ref msg) if msg.contains(CLIENT_ID_VAR)));
    }

    #[test]
    fn test_credentials_blank_secret() {
        let vars = [(CLIENT_ID_VAR, "id"), (CLIENT_SECRET_VAR, "  ")];
        let err = credentials_from(lookup_in(&vars)).unwrap_err();
        assert!(
            matches!(err, Error::ConfigurationError(ref msg) if msg.contains(CLIENT_SECRET_VAR))
        );
    }

    #[test]
    fn test_credentials_present() {
        let vars = [(CLIENT_ID_VAR, "test_id"), (CLIENT_SECRET_VAR, "test_secret")];
        let creds = credentials_from(lookup_in(&vars)).unwrap();
        assert_eq!(creds.id, "test_id");
        assert_eq!(creds.secret.as_deref(), Some("test_secret"));
    }
}
