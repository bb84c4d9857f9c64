//! Leaderboard persistence: append a score, keep the list sorted.
//!
//! The list is unbounded and allows repeated names. Persistence is
//! best-effort; a failed write costs one entry, not the session.

use crate::models::LeaderboardEntry;
use crate::store::{LEADERBOARD_KEY, Store};

/// Returns all recorded entries sorted by score, highest first. Ties keep
/// their insertion order. Missing or corrupt data reads as an empty board.
pub fn list(store: &dyn Store) -> Vec<LeaderboardEntry> {
    let mut entries = load(store);
    sort_descending(&mut entries);
    entries
}

/// Records `entry` if it scored any points, then re-sorts and persists the
/// full list. Zero-score runs are not recorded.
pub fn record(store: &mut dyn Store, entry: LeaderboardEntry) {
    if entry.score == 0 {
        return;
    }

    let mut entries = load(store);
    entries.push(entry);
    sort_descending(&mut entries);

    match serde_json::to_string(&entries) {
        Ok(json) => {
            if let Err(err) = store.set(LEADERBOARD_KEY, &json) {
                tracing::warn!(%err, "failed to persist leaderboard");
            }
        }
        Err(err) => tracing::warn!(%err, "failed to encode leaderboard"),
    }
}

fn load(store: &dyn Store) -> Vec<LeaderboardEntry> {
    let Some(json) = store.get(LEADERBOARD_KEY) else {
        return Vec::new();
    };

    match serde_json::from_str(&json) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(%err, "corrupt leaderboard data, starting empty");
            Vec::new()
        }
    }
}

fn sort_descending(entries: &mut [LeaderboardEntry]) {
    // Stable sort: equal scores keep insertion order.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn test_list_is_sorted_descending() {
        let mut store = MemoryStore::new();
        record(&mut store, entry("a", 30));
        record(&mut store, entry("b", 10));
        record(&mut store, entry("c", 50));

        let scores: Vec<u32> = list(&store).iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![50, 30, 10]);
    }

    #[test]
    fn test_zero_score_is_not_recorded() {
        let mut store = MemoryStore::new();
        record(&mut store, entry("a", 0));
        assert!(list(&store).is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut store = MemoryStore::new();
        record(&mut store, entry("first", 20));
        record(&mut store, entry("second", 20));
        record(&mut store, entry("third", 20));

        let entries = list(&store);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_names_are_allowed() {
        let mut store = MemoryStore::new();
        record(&mut store, entry("Ada", 10));
        record(&mut store, entry("Ada", 25));

        let board = list(&store);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].score, 25);
    }

    #[test]
    fn test_corrupt_data_reads_empty() {
        let mut store = MemoryStore::new();
        store.set(LEADERBOARD_KEY, "not an array").unwrap();
        assert!(list(&store).is_empty());

        // A record on top of corrupt data starts a fresh board.
        record(&mut store, entry("Ada", 5));
        assert_eq!(list(&store).len(), 1);
    }
}
