//! Deduplicate-and-merge engine.
//!
//! Candidates are checked against the existing list (including candidates
//! accepted earlier in the same pass) and prepended when new, keeping the
//! lists newest-first.

use crate::domain::{DedupKey, Item};

/// True when `candidate` duplicates `existing`.
///
/// Primary check: the dedup key field, when present on both items.
/// Fallback: matching URLs count as a duplicate even when the primary
/// key differs. Items carrying neither the key nor a URL never match.
fn is_duplicate(candidate: &Item, existing: &Item, key: DedupKey) -> bool {
    if let (Some(a), Some(b)) = (key.get(candidate), key.get(existing)) {
        if a == b {
            return true;
        }
    }

    if let (Some(a), Some(b)) = (candidate.url.as_deref(), existing.url.as_deref()) {
        if a == b {
            return true;
        }
    }

    false
}

/// Merge `candidates` into `existing`, skipping duplicates.
///
/// Each accepted candidate is inserted at the front, so the final order is
/// the reverse of candidate input order, all ahead of prior items. Returns
/// the number of items added.
pub fn dedupe_and_merge(candidates: Vec<Item>, existing: &mut Vec<Item>, key: DedupKey) -> usize {
    let mut added = 0;

    for candidate in candidates {
        if existing.iter().any(|e| is_duplicate(&candidate, e, key)) {
            continue;
        }

        existing.insert(0, candidate);
        added += 1;
    }

    added
}
