//! End-to-End Update Pass Tests
//!
//! Runs the full updater against a temporary store with no API credential:
//! the video source is a configured no-op, the quote source produces one
//! item, and reruns on the same day add nothing.

use std::collections::HashMap;
use std::time::Duration;

use sagefeed::{run_update, ContentStore, ItemKind, UpdaterConfig};
use tempfile::TempDir;

fn test_config(temp: &TempDir) -> UpdaterConfig {
    UpdaterConfig {
        home: temp.path().to_path_buf(),
        data_file: temp.path().join("content.json"),
        api_key: None,
        channel_id: "UCtest000000000000000000".to_string(),
        request_timeout: Duration::from_secs(5),
        trusted_sources: HashMap::from([(
            "instagram".to_string(),
            "https://www.instagram.com/example/".to_string(),
        )]),
        config_file: None,
    }
}

#[tokio::test]
async fn test_update_without_credential_completes() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let report = run_update(&config).await.unwrap();

    // Only the daily quote lands; the video source silently skips.
    assert_eq!(report.added, 1);
    assert_eq!(report.quotes, 1);
    assert_eq!(report.videos, 0);
    assert_eq!(report.articles, 0);
    assert!(report.saved);
}

#[tokio::test]
async fn test_quote_lands_in_store_file() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    run_update(&config).await.unwrap();

    let store = ContentStore::load(&config.data_file).await;
    assert_eq!(store.quotes.len(), 1);

    let quote = &store.quotes[0];
    assert_eq!(quote.kind, ItemKind::Quote);
    assert_eq!(
        quote.url.as_deref(),
        Some("https://www.instagram.com/example/")
    );
    assert!(store.last_updated.is_some());
}

#[tokio::test]
async fn test_second_run_same_day_adds_nothing() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    let first = run_update(&config).await.unwrap();
    assert_eq!(first.added, 1);

    let before = tokio::fs::read_to_string(&config.data_file).await.unwrap();

    let second = run_update(&config).await.unwrap();
    assert_eq!(second.added, 0);
    assert!(!second.saved);
    assert_eq!(second.quotes, 1);

    // Nothing added means the file is not rewritten.
    let after = tokio::fs::read_to_string(&config.data_file).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_preserves_existing_items() {
    let temp = TempDir::new().unwrap();
    let config = test_config(&temp);

    // Seed a store with a prior video.
    let mut seeded = ContentStore::new();
    seeded.videos.insert(
        0,
        sagefeed::Item {
            content: None,
            title: Some("Old Video".to_string()),
            description: None,
            url: Some("https://www.youtube.com/watch?v=old".to_string()),
            thumbnail: None,
            source: "YouTube Official".to_string(),
            date: "2026-08-01".to_string(),
            tags: vec!["video".to_string(), "youtube".to_string()],
            kind: ItemKind::Video,
        },
    );
    seeded.save(&config.data_file).await.unwrap();

    let report = run_update(&config).await.unwrap();
    assert_eq!(report.videos, 1);

    let store = ContentStore::load(&config.data_file).await;
    assert_eq!(store.videos[0].title.as_deref(), Some("Old Video"));
    assert_eq!(store.quotes.len(), 1);
}
