//! Daily quote source.
//!
//! Placeholder implementation: produces exactly one item per run with the
//! current date embedded in the content. A real implementation would pull
//! from the profile's API; until then the item still exercises the full
//! merge path, and content-based dedup keeps reruns on the same day from
//! growing the store.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{DedupKey, Item, ItemKind};

use super::Source;

/// Quote-of-the-day source
pub struct QuoteSource {
    /// Source label stamped on produced items
    source_label: String,
    /// Profile URL the quote links back to
    profile_url: String,
}

impl QuoteSource {
    /// Create a quote source for a given profile
    pub fn new(source_label: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            profile_url: profile_url.into(),
        }
    }
}

#[async_trait]
impl Source for QuoteSource {
    fn name(&self) -> &str {
        "quote"
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Quote
    }

    fn dedup_key(&self) -> DedupKey {
        DedupKey::Content
    }

    async fn fetch(&self) -> Result<Vec<Item>> {
        tracing::info!("Checking for daily quote");

        let today = Utc::now().format("%Y-%m-%d").to_string();
        let quote = Item {
            content: Some(format!("Daily wisdom - {}", today)),
            title: None,
            description: None,
            url: Some(self.profile_url.clone()),
            thumbnail: None,
            source: self.source_label.clone(),
            date: today,
            tags: vec!["daily".to_string(), "wisdom".to_string()],
            kind: ItemKind::Quote,
        };

        Ok(vec![quote])
    }
}
