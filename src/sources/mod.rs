//! Content source adapters.
//!
//! Sources provide a unified interface for fetching candidate items from
//! one external origin. Each source is independent: the updater treats a
//! fetch error as an empty result, so a broken or rate-limited source can
//! never block the others or abort the overall update.

pub mod articles;
pub mod quote;
pub mod youtube;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{DedupKey, Item, ItemKind};

pub use articles::ArticleSource;
pub use quote::QuoteSource;
pub use youtube::YouTubeSource;

/// Trait for content sources
#[async_trait]
pub trait Source: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Which store list this source feeds
    fn kind(&self) -> ItemKind;

    /// Primary field for deduplicating this source's items
    fn dedup_key(&self) -> DedupKey;

    /// Fetch zero or more candidate items
    async fn fetch(&self) -> Result<Vec<Item>>;
}
