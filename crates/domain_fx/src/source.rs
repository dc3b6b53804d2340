//! Where a feed document comes from

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::FxError;

/// Snapshot of the historic feed shipped with the crate, used as the last
/// fallback when no other source delivers a readable document
pub const BUNDLED_FEED: &[u8] = include_bytes!("../data/eurofxref-hist.xml");

/// A place a feed document can be fetched from
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human readable description, used in logs and errors
    fn describe(&self) -> String;

    /// Fetches the complete document
    async fn fetch(&self) -> Result<Vec<u8>, FxError>;
}

/// Fetches the feed over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    url: String,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FxError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FxError::source_failed(url.clone(), err))?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<u8>, FxError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| FxError::source_failed(self.describe(), err))?;
        let body = response
            .bytes()
            .await
            .map_err(|err| FxError::source_failed(self.describe(), err))?;
        debug!(bytes = body.len(), "Feed downloaded");
        Ok(body.to_vec())
    }
}

/// Reads the feed from a file, e.g. a bundled copy used when offline
#[derive(Debug, Clone)]
pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedSource for FileFeedSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<u8>, FxError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|err| FxError::source_failed(self.describe(), err))
    }
}

/// Serves a document held in memory
#[derive(Debug, Clone)]
pub struct StaticFeedSource {
    name: String,
    document: Vec<u8>,
}

impl StaticFeedSource {
    pub fn new(name: impl Into<String>, document: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            document: document.into(),
        }
    }

    /// The snapshot bundled with the crate
    pub fn bundled() -> Self {
        Self::new("bundled eurofxref-hist.xml", BUNDLED_FEED)
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, FxError> {
        Ok(self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticFeedSource::new("memory", "<Cube/>");
        assert_eq!(source.describe(), "memory");
        assert_eq!(source.fetch().await.unwrap(), b"<Cube/>".to_vec());
    }

    #[tokio::test]
    async fn test_bundled_source_serves_snapshot() {
        let source = StaticFeedSource::bundled();
        assert_eq!(source.fetch().await.unwrap(), BUNDLED_FEED.to_vec());
        assert!(source.describe().contains("eurofxref-hist.xml"));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_source_error() {
        let source = FileFeedSource::new("/nonexistent/eurofxref-hist.xml");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FxError::Source { ref source_name, .. } if source_name.contains("eurofxref-hist.xml")));
    }
}
