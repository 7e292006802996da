//! Bounded, in-memory record of generated passwords.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use crate::types::StrengthResult;

/// Maximum number of entries kept; the oldest entry is evicted first.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub password: SecretString,
    pub strength: StrengthResult,
    pub generated_at: DateTime<Utc>,
}

/// FIFO of the most recent generations, oldest first.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting from the front once over capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Snapshot of the entries in insertion order, most recent last.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
