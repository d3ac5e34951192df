//! # Pattern Search
//!
//! Free-text lookup by tool name over the loaded catalog. The contract is
//! an exact case-insensitive substring predicate in catalog order; there is
//! no tokenization, fuzziness, or ranking.

mod index;

pub use index::{SearchEntry, SearchIndex};
