use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, error, info, warn};
use rartwork::clients::{HttpDownloader, SpotifyClient, errors::Result};
use rartwork::fetcher::{Config, ConfigBuilder, DEFAULT_MAX_RESULTS, DEFAULT_OUTPUT_DIR, Fetcher};
use rartwork::report::RunSummary;

#[derive(Parser, Debug)]
#[command(name = "rartwork")]
#[command(version, about = "Download album artwork from Spotify for album and track lists", long_about = None)]
struct Cli {
    /// Album list, one "<album> / <artist>" per line
    #[arg(long, default_value = "list.txt")]
    albums: PathBuf,

    /// Track list, one "<track> / <artist>" per line
    #[arg(long, default_value = "list2.txt")]
    tracks: PathBuf,

    /// Directory the artwork is saved to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Env file holding SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET
    #[arg(long, default_value = "config.env")]
    env_file: PathBuf,

    /// Search candidates checked per entry
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS,
          value_parser = clap::value_parser!(u32).range(1..=50))]
    limit: u32,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    summary: Option<PathBuf>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    load_env_file(&cli.env_file);

    info!("Building config ...");
    let config = ConfigBuilder::new()
        .output_dir(&cli.output_dir)
        .max_results(cli.limit)
        .build()?;
    let summary = fetch_artwork(config, &cli.albums, &cli.tracks).await?;

    if let Some(path) = &cli.summary {
        write_summary(path, &summary).await?;
    }
    Ok(())
}

// A failed token request is not fatal: every search then fails and is reported per entry
async fn fetch_artwork(
    config: Config<SpotifyClient, HttpDownloader>,
    albums: &Path,
    tracks: &Path,
) -> Result<RunSummary> {
    info!("Authorizing Spotify client ...");
    if let Err(e) = config.catalog.authorize_client().await {
        error!("Spotify authorization failed: {e}");
    }
    Fetcher::new(config).run(albums, tracks).await
}

// Variables already set in the environment win over the file
fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No env file at {}", path.display()),
        Err(e) => warn!("Failed to load env file {}: {e}", path.display()),
    }
}

async fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    tokio::fs::write(path, json).await?;
    debug!("Wrote run summary to {}", path.display());
    Ok(())
}
