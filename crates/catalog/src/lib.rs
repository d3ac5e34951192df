//! # Pattern Catalog
//!
//! Shared data model for the pattern-finder workspace.
//!
//! ## Pipeline
//!
//! ```text
//! catalog.json
//!     │
//!     └──> Loader (one-time, async)
//!            └─> PatternRecord[] (immutable for the session)
//!                   ├──> FilterEngine (guided narrowing)
//!                   └──> SearchIndex (tool-name lookup)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use pattern_catalog::{load_catalog, Question};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let records = load_catalog("catalog.json").await?;
//!     let questions = Question::default_flow();
//!
//!     println!("{} records, {} question steps", records.len(), questions.len());
//!     Ok(())
//! }
//! ```

mod error;
mod loader;
mod microformat;
mod question;
mod record;

pub use error::{CatalogError, Result};
pub use loader::load_catalog;
pub use microformat::{parse_description, parse_links, DescriptionLine, LinkEntry};
pub use question::Question;
pub use record::PatternRecord;
