use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Url;
use stories_logging::stories_debug;

use crate::{FailureKind, FetchError, SearchHit, SearchResponse};

pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Search endpoint; the query is appended as the `query` parameter.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Asynchronous source of search results.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    pub fn search_url(&self, query: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.settings.endpoint, &[("query", query)])
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, FetchError> {
        let url = self.search_url(query)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }

        let parsed: SearchResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::MalformedResponse, err.to_string()))?;
        stories_debug!(
            "Search {:?} returned {} hits ({} bytes)",
            query,
            parsed.hits.len(),
            body.len()
        );
        Ok(parsed.hits)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::MalformedResponse, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
