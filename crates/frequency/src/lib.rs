//! # Pattern Frequency
//!
//! Persisted counter of how often each pattern/tool name was chosen via
//! search or resolved via a completed question flow, with a ranked top-N
//! view for the leaderboard.
//!
//! The store is best-effort telemetry, never load-blocking: a missing,
//! malformed, or expired snapshot loads as an empty mapping, and persist
//! failures are logged and swallowed. Every `record` call rewrites the full
//! snapshot with a refreshed retention window.

mod snapshot;
mod tracker;

pub use snapshot::{CountEntry, RETENTION_WINDOW_MS};
pub use tracker::{FrequencyTracker, Leaderboard};
