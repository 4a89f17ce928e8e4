//! Entry collector shared by concurrent scan tasks.

use crate::types::{Entry, sort_by_path};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Collects entries appended from concurrently running tasks.
///
/// Appends are serialized by a mutex. The collection is unordered; use
/// [`EntryCollector::into_sorted`] for presentation.
#[derive(Debug, Default)]
pub struct EntryCollector {
    entries: Mutex<Vec<Entry>>,
}

impl EntryCollector {
    /// Create a new entry collector.
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking task never leaves a half-written Vec behind, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an entry.
    pub fn append(&self, entry: Entry) {
        self.lock().push(entry);
    }

    /// Get the number of collected entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if there are any entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consume the collector and return the entries in arrival order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Consume the collector and return the entries sorted by path.
    pub fn into_sorted(self) -> Vec<Entry> {
        let mut entries = self.into_entries();
        sort_by_path(&mut entries);
        entries
    }
}
