use crate::{CatalogError, PatternRecord, Result};
use std::path::Path;

/// Load the catalog from a JSON array of records.
///
/// This is the one asynchronous boundary of the core: the engine is unusable
/// until the catalog resolves, and a failure here must surface to the caller
/// rather than silently yielding an empty catalog.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<PatternRecord>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let records: Vec<PatternRecord> = serde_json::from_slice(&bytes)?;
    if records.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    log::info!(
        "Loaded {} catalog records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
