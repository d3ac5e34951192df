use crate::snapshot::{
    load_snapshot_best_effort, unix_now_ms, write_snapshot_best_effort, CountEntry,
};
use std::path::PathBuf;

/// Ranked top-N view over the tracked counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    /// Count-descending, ties broken by first-insertion order.
    pub entries: Vec<CountEntry>,

    /// Sum of the returned counts, for normalizing into a display scale.
    pub total: u64,
}

impl Leaderboard {
    /// Normalize a count into the 0..=100 display scale. The `max(total, 1)`
    /// guards division by zero when nothing has been recorded yet.
    #[must_use]
    pub fn share(&self, count: u64) -> u64 {
        100 * count / self.total.max(1)
    }
}

/// Persisted counter of resolution events, keyed by pattern/tool name.
///
/// Counts are monotonically non-decreasing within the retention window.
/// Mutations originate from sequential user-triggered events, so there is
/// no in-session locking; across sessions the store is shared only through
/// the snapshot file, last-write-wins.
pub struct FrequencyTracker {
    path: PathBuf,
    entries: Vec<CountEntry>,
}

impl FrequencyTracker {
    /// Open the tracker over a snapshot file. Unreadable, malformed, or
    /// expired data starts from an empty mapping rather than failing.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_snapshot_best_effort(&path, unix_now_ms());
        log::debug!(
            "Frequency store {}: {} tracked names",
            path.display(),
            entries.len()
        );
        Self { path, entries }
    }

    /// Increment the count for `name` and persist the full snapshot
    /// immediately with a refreshed retention window. Always completes;
    /// a failed persist is logged, never propagated.
    pub fn record(&mut self, name: &str) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(CountEntry {
                name: name.to_string(),
                count: 1,
            }),
        }

        if !write_snapshot_best_effort(&self.path, &self.entries, unix_now_ms()) {
            log::warn!(
                "Failed to persist frequency snapshot to {}",
                self.path.display()
            );
        }
    }

    /// The stored count for `name`; absent names are implicitly 0.
    #[must_use]
    pub fn count(&self, name: &str) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map_or(0, |entry| entry.count)
    }

    /// Up to `n` entries sorted by count descending. The sort is stable
    /// over insertion order, which resolves ties.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Leaderboard {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        let total = ranked.iter().map(|entry| entry.count).sum();
        Leaderboard {
            entries: ranked,
            total,
        }
    }
}
