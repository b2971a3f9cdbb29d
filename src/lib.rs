//! sagefeed - Incremental content-feed updater
//!
//! Polls a small set of content sources and merges newly observed items
//! into a JSON-backed local store.
//!
//! # Architecture
//!
//! Each run is a single pass:
//! - The store is loaded once at startup (missing file means empty state)
//! - Every source produces zero or more candidate items, in isolation;
//!   a failing source degrades to an empty result and never aborts the run
//! - Candidates are deduplicated against the existing lists and prepended
//!   newest-first
//! - The store is persisted at most once, only when something was added
//!
//! # Modules
//!
//! - `sources`: Content source adapters (quotes, YouTube, articles)
//! - `store`: JSON-backed content store
//! - `merge`: Deduplicate-and-merge engine
//! - `updater`: Single-run orchestration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Run an update pass
//! sagefeed update
//!
//! # Show store totals
//! sagefeed status
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod merge;
pub mod sources;
pub mod store;
pub mod updater;

// Re-export main types at crate root for convenience
pub use config::UpdaterConfig;
pub use domain::{DedupKey, Item, ItemKind};
pub use merge::dedupe_and_merge;
pub use sources::{ArticleSource, QuoteSource, Source, YouTubeSource};
pub use store::ContentStore;
pub use updater::{run_update, UpdateReport};
