//! Content items and their dedup keys.
//!
//! An [`Item`] is one unit of content (a quote, a video, or an article)
//! plus its source metadata. Field presence varies by kind: quotes carry
//! `content`, videos and articles carry `title`. The serialized form
//! matches the store file schema, so optional fields are omitted when
//! absent.

use serde::{Deserialize, Serialize};

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Short quote or saying
    Quote,

    /// Video from the platform channel
    Video,

    /// Web article
    Article,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Quote => write!(f, "quote"),
            ItemKind::Video => write!(f, "video"),
            ItemKind::Article => write!(f, "article"),
        }
    }
}

/// A single unit of content with source metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Quote text (quotes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Human-readable title (videos and articles)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description text, truncated at the source boundary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Canonical URL for the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Thumbnail image URL (videos)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Source label, e.g. "YouTube Official"
    pub source: String,

    /// Calendar date the item was published (ISO 8601, date only)
    pub date: String,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Item kind
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// The field used as the primary equality check during dedup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupKey {
    Content,
    Title,
    Url,
}

impl DedupKey {
    /// Read the keyed field off an item, if present
    pub fn get<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            DedupKey::Content => item.content.as_deref(),
            DedupKey::Title => item.title.as_deref(),
            DedupKey::Url => item.url.as_deref(),
        }
    }
}
