//! Bounded in-memory log history
//!
//! Overflow is handled in batches: once the history holds more than
//! `capacity` entries, the oldest `len + shift - capacity` are dropped in one
//! go, leaving room for roughly `shift` more calls before the next trim.
//! The trim runs before the new entry is appended, so the history can hold
//! `capacity + 1` entries between trims.

use super::log_entry::LogEntry;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<LogEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Trim if over capacity, then keep `entry` unless history is disabled.
    ///
    /// `capacity == 0` discards the entry, a negative capacity never trims.
    /// Returns the number of entries evicted.
    pub fn record(&mut self, entry: LogEntry, capacity: i64, shift: i64) -> usize {
        let evicted = self.trim(capacity, shift);
        if capacity != 0 {
            self.entries.push(entry);
        }
        evicted
    }

    fn trim(&mut self, capacity: i64, shift: i64) -> usize {
        let len = self.entries.len() as i64;
        if capacity <= 0 || len <= capacity {
            return 0;
        }
        // A shift larger than the capacity would cut past the end.
        let cut = len
            .saturating_add(shift)
            .saturating_sub(capacity)
            .clamp(0, len) as usize;
        self.entries.drain(..cut);
        cut
    }
}
