//! Data structures shared across the updater.

pub mod item;

pub use item::{DedupKey, Item, ItemKind};
