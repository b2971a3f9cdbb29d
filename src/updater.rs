//! Single-run update orchestration.
//!
//! Loads the store, runs every source in turn, merges the candidates into
//! the matching list, and persists once at the end if anything was added.
//! Source failures are logged and degraded to empty results; only a failed
//! persist aborts the run.

use anyhow::{Context, Result};

use crate::config::UpdaterConfig;
use crate::merge::dedupe_and_merge;
use crate::sources::{ArticleSource, QuoteSource, Source, YouTubeSource};
use crate::store::ContentStore;

const QUOTE_SOURCE_LABEL: &str = "Instagram @dailywisdom";
const FALLBACK_PROFILE_URL: &str = "https://www.instagram.com/dailywisdom/";

/// Outcome of one update pass
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// Items added across all lists this run
    pub added: usize,
    /// Store totals after the run
    pub quotes: usize,
    pub videos: usize,
    pub articles: usize,
    /// Whether the store was rewritten
    pub saved: bool,
}

/// Run one update pass over all sources
pub async fn run_update(config: &UpdaterConfig) -> Result<UpdateReport> {
    let mut store = ContentStore::load(&config.data_file).await;

    let profile_url = config
        .trusted_sources
        .get("instagram")
        .cloned()
        .unwrap_or_else(|| FALLBACK_PROFILE_URL.to_string());

    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(QuoteSource::new(QUOTE_SOURCE_LABEL, profile_url)),
        Box::new(YouTubeSource::new(
            config.api_key.clone(),
            config.channel_id.clone(),
            config.request_timeout,
        )?),
        Box::new(ArticleSource::new()),
    ];

    let mut added = 0;
    for source in &sources {
        let candidates = match source.fetch().await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(source = source.name(), "Fetch failed: {:#}", e);
                Vec::new()
            }
        };

        let count = dedupe_and_merge(candidates, store.list_mut(source.kind()), source.dedup_key());
        if count > 0 {
            tracing::info!(source = source.name(), "Added {} new item(s)", count);
        } else {
            tracing::info!(source = source.name(), "No new items");
        }
        added += count;
    }

    let saved = added > 0;
    if saved {
        store
            .save(&config.data_file)
            .await
            .context("Failed to persist content store")?;
    }

    Ok(UpdateReport {
        added,
        quotes: store.quotes.len(),
        videos: store.videos.len(),
        articles: store.articles.len(),
        saved,
    })
}
