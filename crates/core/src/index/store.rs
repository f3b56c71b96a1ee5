//! Atomically replaceable note index.

use std::sync::{Arc, RwLock};
use std::time::Instant;

use thiserror::Error;

use crate::config::Settings;
use crate::filter::filter_string;
use crate::items::NoteItem;
use crate::vault::{NoteScanner, ScanError};

use super::search::matches_tokens;

/// One indexed note: its precomputed filter string and display item.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// Lowercase haystack queries are matched against.
    pub filter: String,
    pub item: NoteItem,
}

#[derive(Debug, Error)]
pub enum RebuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Statistics from one index rebuild.
#[derive(Debug, Clone, Default)]
pub struct RebuildStats {
    /// Number of notes indexed.
    pub notes: usize,
    /// Rebuild duration in whole milliseconds.
    pub duration_ms: u64,
}

/// Process-wide index of the vault's notes.
///
/// The collection is replaced, never patched: readers observe either the
/// prior complete snapshot or the new one. The swap is a single `Arc`
/// assignment under a write lock held for nothing else; the scan itself runs
/// outside any lock.
#[derive(Debug, Default)]
pub struct IndexStore {
    entries: RwLock<Arc<Vec<IndexEntry>>>,
}

impl IndexStore {
    /// An empty index; populated by the first [`IndexStore::rebuild`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-scan the vault and swap in the freshly built collection.
    ///
    /// An empty vault yields an empty index without error; a missing root
    /// fails the rebuild and leaves the prior snapshot in place.
    pub fn rebuild(&self, settings: &Settings) -> Result<RebuildStats, RebuildError> {
        let start = Instant::now();
        let scanner = NoteScanner::new(&settings.vault_root)?;
        let toggles = settings.toggles();

        let entries: Vec<IndexEntry> = scanner
            .scan()
            .map(|note| IndexEntry {
                filter: filter_string(&note, &toggles),
                item: NoteItem::from_note(&note, settings),
            })
            .collect();

        let stats = RebuildStats {
            notes: entries.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        self.replace(entries);

        tracing::info!("indexed {} notes [{} ms]", stats.notes, stats.duration_ms);
        Ok(stats)
    }

    /// Indexed query: whitespace tokens, AND semantics, stored order.
    ///
    /// Tokens are lowercased here; stored filter strings already are.
    pub fn search(&self, query: &str) -> Vec<NoteItem> {
        let tokens: Vec<String> =
            query.split_whitespace().map(str::to_lowercase).collect();

        self.snapshot()
            .iter()
            .filter(|entry| matches_tokens(&entry.filter, &tokens))
            .map(|entry| entry.item.clone())
            .collect()
    }

    /// Clone the current snapshot handle. Never blocks on a rebuild scan.
    pub fn snapshot(&self) -> Arc<Vec<IndexEntry>> {
        self.entries
            .read()
            .map(|guard| Arc::clone(&guard))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn replace(&self, entries: Vec<IndexEntry>) {
        if let Ok(mut guard) = self.entries.write() {
            *guard = Arc::new(entries);
        }
    }
}
