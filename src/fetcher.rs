use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::clients::{
    Catalog, FromEnv, HttpDownloader, ImageDownloader, SpotifyClient,
    entities::{Album, ListEntry, SearchMode},
    errors::{Error, Result},
};
use crate::matcher::find_match;
use crate::report::{
    EntryReport, ListReport, ListStatus, ProcessOutcome, RunSummary, SavedArtwork, SkipReason,
};
use crate::text::{normalize_query, sanitize_filename};

/// Candidates requested per search
pub const DEFAULT_MAX_RESULTS: u32 = 5;
/// Largest page Spotify's search endpoint serves
pub const MAX_SEARCH_LIMIT: u32 = 50;
/// Directory artwork is written to
pub const DEFAULT_OUTPUT_DIR: &str = "img";

const ARTWORK_EXTENSION: &str = "jpg";

/// Configuration for the Fetcher struct
pub struct Config<C, D> {
    pub catalog: C,
    pub downloader: D,
    pub output_dir: PathBuf,
    pub max_results: u32,
}

pub struct ConfigBuilder<C = SpotifyClient, D = HttpDownloader> {
    catalog: Option<C>,
    downloader: Option<D>,
    output_dir: Option<PathBuf>,
    max_results: Option<u32>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            downloader: None,
            output_dir: None,
            max_results: None,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, D> ConfigBuilder<C, D> {
    /// Use `catalog` instead of the one built from the environment
    pub fn catalog<C2>(self, catalog: C2) -> ConfigBuilder<C2, D> {
        ConfigBuilder {
            catalog: Some(catalog),
            downloader: self.downloader,
            output_dir: self.output_dir,
            max_results: self.max_results,
        }
    }

    /// Use `downloader` instead of a plain HTTP client
    pub fn downloader<D2>(self, downloader: D2) -> ConfigBuilder<C, D2> {
        ConfigBuilder {
            catalog: self.catalog,
            downloader: Some(downloader),
            output_dir: self.output_dir,
            max_results: self.max_results,
        }
    }

    #[must_use]
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl<C: FromEnv, D: FromEnv> ConfigBuilder<C, D> {
    pub fn build(self) -> Result<Config<C, D>> {
        let max_results = self.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
        if !(1..=MAX_SEARCH_LIMIT).contains(&max_results) {
            return Err(Error::ConfigurationError(format!(
                "max results must be between 1 and {MAX_SEARCH_LIMIT}, got {max_results}"
            )));
        }
        let catalog = match self.catalog {
            Some(c) => c,
            None => C::try_default()?,
        };
        let downloader = match self.downloader {
            Some(d) => d,
            None => D::try_default()?,
        };
        Ok(Config {
            catalog,
            downloader,
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            max_results,
        })
    }
}

// Resolves list entries to album covers one at a time
pub struct Fetcher<C, D> {
    config: Config<C, D>,
}

impl<C: Catalog, D: ImageDownloader> Fetcher<C, D> {
    pub fn new(config: Config<C, D>) -> Self {
        Fetcher { config }
    }

    pub fn config(&self) -> &Config<C, D> {
        &self.config
    }

    /// Process the album list, then the track list, and total up the results.
    ///
    /// Only a failure to create the output directory aborts the run; every
    /// other problem is confined to its list or entry.
    pub async fn run(&self, albums: &Path, tracks: &Path) -> Result<RunSummary> {
        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        debug!(
            "Writing artwork to {}",
            self.config.output_dir.display()
        );

        let mut summary = RunSummary::default();
        for (path, mode) in [(albums, SearchMode::Album), (tracks, SearchMode::Track)] {
            let report = self.process_list(path, mode).await;
            summary.record(&report);
        }

        info!(
            "Finished: {} saved, {} skipped, {} failed",
            summary.saved, summary.skipped, summary.failed
        );
        info!("All album artwork has been fetched.");
        Ok(summary)
    }

    /// Process every non-blank line of `path` as an entry of the given mode
    pub async fn process_list(&self, path: &Path, mode: SearchMode) -> ListReport {
        let status = match tokio::fs::read_to_string(path).await {
            Ok(contents) => {
                info!("Processing {} ({mode} search) ...", path.display());
                let mut entries = Vec::new();
                for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    let report = EntryReport {
                        line: line.to_string(),
                        outcome: self.process_entry(line, mode).await,
                    };
                    report.log();
                    entries.push(report);
                }
                ListStatus::Processed(entries)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found. Skipping.", path.display());
                ListStatus::Missing
            }
            Err(e) => {
                warn!("Failed to read {}: {e}. Skipping.", path.display());
                ListStatus::Unreadable(Error::from(e))
            }
        };
        ListReport {
            path: path.to_path_buf(),
            status,
        }
    }

    /// Resolve one list line to an artwork file
    pub async fn process_entry(&self, line: &str, mode: SearchMode) -> ProcessOutcome {
        let entry = match line.parse::<ListEntry>() {
            Ok(entry) => entry,
            Err(e) => return ProcessOutcome::Skipped(SkipReason::Malformed(e.to_string())),
        };
        match self.fetch_artwork(&entry, mode).await {
            Ok(Some(saved)) => ProcessOutcome::Success(saved),
            Ok(None) => ProcessOutcome::Skipped(SkipReason::NoArtistMatch),
            Err(e) => ProcessOutcome::Failed(e),
        }
    }

    async fn fetch_artwork(
        &self,
        entry: &ListEntry,
        mode: SearchMode,
    ) -> Result<Option<SavedArtwork>> {
        let name = normalize_query(&entry.name);
        let artist = normalize_query(&entry.artist);
        let query = format!("{name} {artist}");

        let Some(album) = self.find_album(&query, &artist, mode).await? else {
            return Ok(None);
        };
        let image_url = album
            .cover_url()
            .ok_or_else(|| Error::MissingArtwork(album.name.clone()))?;

        // The file is named after the artist as written in the list
        let path = self.artwork_path(&entry.artist, &album.name);
        let bytes = self.config.downloader.fetch_image(image_url).await?;
        tokio::fs::write(&path, &bytes).await?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());

        Ok(Some(SavedArtwork {
            album: album.name,
            path,
        }))
    }

    async fn find_album(&self, query: &str, artist: &str, mode: SearchMode) -> Result<Option<Album>> {
        let limit = self.config.max_results;
        match mode {
            SearchMode::Album => {
                let albums = self.config.catalog.search_albums(query, limit).await?;
                debug!("{} album candidates for \"{query}\"", albums.len());
                Ok(find_match(&albums, artist).cloned())
            }
            SearchMode::Track => {
                let tracks = self.config.catalog.search_tracks(query, limit).await?;
                debug!("{} track candidates for \"{query}\"", tracks.len());
                Ok(find_match(&tracks, artist).map(|track| track.album.clone()))
            }
        }
    }

    fn artwork_path(&self, artist: &str, album: &str) -> PathBuf {
        self.config.output_dir.join(format!(
            "{}_{}.{ARTWORK_EXTENSION}",
            sanitize_filename(artist),
            sanitize_filename(album)
        ))
    }
}
