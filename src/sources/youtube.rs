//! YouTube channel source.
//!
//! Queries the YouTube Data API search endpoint for videos published on a
//! fixed channel within the last 24 hours. Without an API key the source
//! is a configured no-op, not an error: it logs a warning and produces
//! nothing, leaving the rest of the run untouched.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Duration, SecondsFormat, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DedupKey, Item, ItemKind};

use super::Source;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
const SOURCE_LABEL: &str = "YouTube Official";
const MAX_RESULTS: &str = "10";
const DESCRIPTION_LIMIT: usize = 300;

/// Non-2xx response from the YouTube API
#[derive(Debug, Error)]
#[error("YouTube API error {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// YouTube channel search source
pub struct YouTubeSource {
    /// API key, None when not configured
    api_key: Option<String>,
    /// Channel to poll
    channel_id: String,
    /// HTTP client (carries the bounded request timeout)
    client: reqwest::Client,
}

impl YouTubeSource {
    /// Create a YouTube source. A missing key disables the source.
    pub fn new(
        api_key: Option<String>,
        channel_id: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            channel_id: channel_id.into(),
            client,
        })
    }
}

#[async_trait]
impl Source for YouTubeSource {
    fn name(&self) -> &str {
        "youtube"
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Video
    }

    fn dedup_key(&self) -> DedupKey {
        DedupKey::Url
    }

    async fn fetch(&self) -> Result<Vec<Item>> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("No YouTube API key configured, skipping video check");
            return Ok(Vec::new());
        };

        tracing::info!("Checking for new videos");

        let published_after =
            (Utc::now() - Duration::hours(24)).to_rfc3339_opts(SecondsFormat::Secs, true);

        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("part", "snippet"),
                ("channelId", self.channel_id.as_str()),
                ("maxResults", MAX_RESULTS),
                ("order", "date"),
                ("publishedAfter", published_after.as_str()),
                ("type", "video"),
                ("key", api_key),
            ])
            .send()
            .await
            .context("YouTube search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to parse YouTube search response")?;

        Ok(body.items.into_iter().map(Item::from).collect())
    }
}

/// Search response schema (fields we consume)
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    published_at: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl From<SearchResult> for Item {
    fn from(result: SearchResult) -> Self {
        let snippet = result.snippet;

        Item {
            content: None,
            title: Some(snippet.title),
            description: Some(truncate_chars(&snippet.description, DESCRIPTION_LIMIT)),
            url: Some(format!(
                "https://www.youtube.com/watch?v={}",
                result.id.video_id
            )),
            thumbnail: Some(snippet.thumbnails.high.url),
            source: SOURCE_LABEL.to_string(),
            date: truncate_chars(&snippet.published_at, 10),
            tags: vec!["video".to_string(), "youtube".to_string()],
            kind: ItemKind::Video,
        }
    }
}

/// Take at most `max` characters, respecting char boundaries
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
