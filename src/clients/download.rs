use log::debug;

use crate::clients::{FromEnv, errors::Result};

/// Fetches raw image bytes from a URL
pub trait ImageDownloader {
    /// Download the image at `url`
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new(client: reqwest::Client) -> Self {
        HttpDownloader { client }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl FromEnv for HttpDownloader {
    // Nothing to configure, the client's default timeouts apply
    fn try_default() -> Result<Self> {
        Ok(Self::default())
    }
}

impl ImageDownloader for HttpDownloader {
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Downloading image from {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}
