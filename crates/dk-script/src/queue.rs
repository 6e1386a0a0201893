//! `ScriptQueue` — scripted entries ordered by due time.
//!
//! `MediaTime` is a float and not `Ord`, so entries are keyed by whole
//! milliseconds, rounded up.  Entries sharing a millisecond keep insertion
//! order.  An entry is never released before its due time, and at most one
//! millisecond after it.

use std::collections::BTreeMap;

use dk_core::MediaTime;

use crate::ScriptEntry;

/// Key for an entry due at `t`.
#[inline]
fn due_key(t: MediaTime) -> u64 {
    (t.as_secs().max(0.0) * 1_000.0).ceil() as u64
}

/// Largest key whose entries are due at `now`.
#[inline]
fn reached_key(now: MediaTime) -> u64 {
    (now.as_secs().max(0.0) * 1_000.0).floor() as u64
}

/// A priority queue mapping due times → entries that become launchable then.
#[derive(Default, Debug)]
pub struct ScriptQueue {
    inner: BTreeMap<u64, Vec<ScriptEntry>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl ScriptQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ScriptEntry>) -> Self {
        let mut queue = Self::new();
        for entry in entries {
            queue.push(entry);
        }
        queue
    }

    pub fn push(&mut self, entry: ScriptEntry) {
        self.inner.entry(due_key(entry.at)).or_default().push(entry);
        self.total += 1;
    }

    /// Remove and return every entry due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: MediaTime) -> Vec<ScriptEntry> {
        let later = self.inner.split_off(&(reached_key(now) + 1));
        let due = std::mem::replace(&mut self.inner, later);
        let entries: Vec<ScriptEntry> = due.into_values().flatten().collect();
        self.total -= entries.len();
        entries
    }

    /// Due time of the earliest queued entry, or `None` if empty.
    pub fn next_due(&self) -> Option<MediaTime> {
        self.inner
            .values()
            .next()
            .and_then(|entries| entries.first())
            .map(|entry| entry.at)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
