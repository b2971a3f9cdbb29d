//! JSON-backed content store.
//!
//! One file holds every item the updater has ever accepted, split into
//! three newest-first lists, plus the time of the last successful write.
//! Loading never fails the run; a missing or unreadable file is treated
//! as empty initial state. Write failures do propagate, since silent data
//! loss is worse than a visible crash.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::{Item, ItemKind};

/// Persisted aggregate of all content items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    pub quotes: Vec<Item>,

    #[serde(default)]
    pub articles: Vec<Item>,

    #[serde(default)]
    pub videos: Vec<Item>,

    /// Time of the last persisted update, None until the first save
    pub last_updated: Option<DateTime<Utc>>,
}

impl ContentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from disk.
    ///
    /// A missing file is normal first-run state. A file that cannot be
    /// read or parsed is logged and replaced with an empty store rather
    /// than aborting the run.
    pub async fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read store {}: {}", path.display(), e);
                return Self::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Failed to parse store {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Save the store to disk, stamping `last_updated`.
    ///
    /// Writes the full JSON document to a sibling temp file and renames it
    /// into place, so a crash mid-write cannot truncate the store.
    pub async fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        self.last_updated = Some(Utc::now());

        let content = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .with_context(|| format!("Failed to write store: {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .await
            .with_context(|| format!("Failed to replace store: {}", path.display()))?;

        Ok(())
    }

    /// Mutable access to the list for a given item kind
    pub fn list_mut(&mut self, kind: ItemKind) -> &mut Vec<Item> {
        match kind {
            ItemKind::Quote => &mut self.quotes,
            ItemKind::Video => &mut self.videos,
            ItemKind::Article => &mut self.articles,
        }
    }

    /// Total number of items across all lists
    pub fn len(&self) -> usize {
        self.quotes.len() + self.videos.len() + self.articles.len()
    }

    /// Check if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
