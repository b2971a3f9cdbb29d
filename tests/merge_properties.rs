//! Merge Engine Property Tests
//!
//! Exercises the dedup rules the updater relies on: primary-key equality,
//! URL fallback, newest-first ordering, and rerun idempotence.

use sagefeed::{dedupe_and_merge, DedupKey, Item, ItemKind};

fn video(title: &str, url: &str) -> Item {
    Item {
        content: None,
        title: Some(title.to_string()),
        description: Some("desc".to_string()),
        url: Some(url.to_string()),
        thumbnail: None,
        source: "YouTube Official".to_string(),
        date: "2026-08-23".to_string(),
        tags: vec!["video".to_string(), "youtube".to_string()],
        kind: ItemKind::Video,
    }
}

fn quote(content: &str, url: Option<&str>) -> Item {
    Item {
        content: Some(content.to_string()),
        title: None,
        description: None,
        url: url.map(String::from),
        thumbnail: None,
        source: "Instagram".to_string(),
        date: "2026-08-24".to_string(),
        tags: vec!["daily".to_string()],
        kind: ItemKind::Quote,
    }
}

#[test]
fn test_rerun_with_same_candidates_adds_nothing() {
    let candidates = vec![
        video("Morning Talk", "https://www.youtube.com/watch?v=a1"),
        video("Evening Talk", "https://www.youtube.com/watch?v=a2"),
        video("Night Talk", "https://www.youtube.com/watch?v=a3"),
    ];

    let mut existing = vec![video("Old Talk", "https://www.youtube.com/watch?v=z9")];

    let first = dedupe_and_merge(candidates.clone(), &mut existing, DedupKey::Url);
    assert_eq!(first, 3);
    assert_eq!(existing.len(), 4);

    let second = dedupe_and_merge(candidates, &mut existing, DedupKey::Url);
    assert_eq!(second, 0);
    assert_eq!(existing.len(), 4);
}

#[test]
fn test_primary_key_match_wins_over_differing_url() {
    let mut existing = vec![quote("Be present", Some("u1"))];
    let added = dedupe_and_merge(
        vec![quote("Be present", Some("u2"))],
        &mut existing,
        DedupKey::Content,
    );

    assert_eq!(added, 0);
}

#[test]
fn test_url_fallback_catches_retitled_item() {
    // Same video republished under a new title: the URL match must still
    // treat it as a duplicate.
    let mut existing = vec![video("Original Title", "https://www.youtube.com/watch?v=a1")];
    let added = dedupe_and_merge(
        vec![video("Updated Title", "https://www.youtube.com/watch?v=a1")],
        &mut existing,
        DedupKey::Title,
    );

    assert_eq!(added, 0);
    assert_eq!(existing[0].title.as_deref(), Some("Original Title"));
}

#[test]
fn test_item_with_neither_key_nor_url_is_always_added() {
    let bare = Item {
        content: None,
        title: None,
        description: None,
        url: None,
        thumbnail: None,
        source: "unknown".to_string(),
        date: "2026-08-24".to_string(),
        tags: Vec::new(),
        kind: ItemKind::Quote,
    };

    let mut existing = vec![bare.clone()];
    let added = dedupe_and_merge(vec![bare], &mut existing, DedupKey::Content);

    assert_eq!(added, 1);
    assert_eq!(existing.len(), 2);
}

#[test]
fn test_accepted_candidates_prepend_in_reverse_order() {
    let mut existing = vec![video("Old", "https://www.youtube.com/watch?v=z9")];
    let candidates = vec![
        video("v1", "https://www.youtube.com/watch?v=a1"),
        video("v2", "https://www.youtube.com/watch?v=a2"),
    ];

    dedupe_and_merge(candidates, &mut existing, DedupKey::Url);

    let titles: Vec<_> = existing.iter().map(|i| i.title.as_deref().unwrap()).collect();
    assert_eq!(titles, vec!["v2", "v1", "Old"]);
}
