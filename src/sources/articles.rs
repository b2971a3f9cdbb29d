//! Article source (not yet implemented).
//!
//! Explicit extension point so the updater's source list stays uniform.
//! A real implementation must respect robots.txt, rate-limit its requests,
//! and degrade to an empty result on any fault rather than aborting the run.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{DedupKey, Item, ItemKind};

use super::Source;

/// Placeholder article scraper
#[derive(Default)]
pub struct ArticleSource;

impl ArticleSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for ArticleSource {
    fn name(&self) -> &str {
        "articles"
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Article
    }

    fn dedup_key(&self) -> DedupKey {
        DedupKey::Url
    }

    async fn fetch(&self) -> Result<Vec<Item>> {
        tracing::info!("Article scraping not implemented yet, skipping");
        Ok(Vec::new())
    }
}
