use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) const SNAPSHOT_VERSION: u32 = 1;

/// Snapshots older than this are treated as absent on load.
pub const RETENTION_WINDOW_MS: u64 = 7 * 24 * 60 * 60 * 1_000;

/// One tracked name. Entry order in the snapshot is first-insertion order,
/// which is also the leaderboard tie-break order, so the mapping stays a
/// vector rather than a hash map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountEntry {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedFrequencySnapshot {
    v: u32,
    saved_at_unix_ms: u64,
    entries: Vec<CountEntry>,
}

/// Load the snapshot, tolerating a missing file, malformed JSON, an
/// unknown version, and an expired retention window. All of those yield
/// an empty mapping; a name absent from the store is implicitly count 0.
pub(crate) fn load_snapshot_best_effort(path: &Path, now_unix_ms: u64) -> Vec<CountEntry> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return Vec::new(),
    };

    let snapshot: PersistedFrequencySnapshot = match serde_json::from_slice(&bytes) {
        Ok(snapshot) => snapshot,
        Err(_) => return Vec::new(),
    };
    if snapshot.v != SNAPSHOT_VERSION {
        return Vec::new();
    }
    if now_unix_ms.saturating_sub(snapshot.saved_at_unix_ms) > RETENTION_WINDOW_MS {
        return Vec::new();
    }

    snapshot.entries
}

/// Write the full snapshot with the given timestamp. Returns whether the
/// write landed; callers log and move on, the store is not a source of
/// truth.
pub(crate) fn write_snapshot_best_effort(
    path: &Path,
    entries: &[CountEntry],
    now_unix_ms: u64,
) -> bool {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let _lock = acquire_lock_best_effort(path);

    let snapshot = PersistedFrequencySnapshot {
        v: SNAPSHOT_VERSION,
        saved_at_unix_ms: now_unix_ms,
        entries: entries.to_vec(),
    };
    let Ok(data) = serde_json::to_vec_pretty(&snapshot) else {
        return false;
    };

    let tmp = path.with_extension("json.tmp");
    if std::fs::write(&tmp, data).is_err() {
        return false;
    }
    std::fs::rename(&tmp, path).is_ok()
}

// Cross-process writers share the file only through last-write-wins; the
// advisory lock just keeps concurrent snapshot writes from interleaving.
fn acquire_lock_best_effort(path: &Path) -> Option<std::fs::File> {
    let lock_path = path.with_extension("lock");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(lock_path)
        .ok()?;
    file.lock_exclusive().ok()?;
    Some(file)
}

pub(crate) fn unix_now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
