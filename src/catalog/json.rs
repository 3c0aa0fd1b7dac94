//! JSON catalog decoding and the file-backed source.
//!
//! The catalog is a single JSON array of entry objects:
//!
//! ```json
//! [
//!   {
//!     "name": "Radxa Rock 5B",
//!     "type": "sbc",
//!     "tier": "S",
//!     "tierPosition": 1,
//!     "imagePath": "images/rock5b.webp",
//!     "videoUrl": "https://youtu.be/...",
//!     "purchaseLink": "https://...",
//!     "reviewDate": "2024-01-05"
//!   }
//! ]
//! ```
//!
//! The whole array is decoded at once. There is no streaming or pagination.

use crate::catalog::source::CatalogSource;
use crate::domain::entry::CatalogEntry;
use crate::domain::error::{Result, TierListError};
use std::path::PathBuf;

/// Decodes a catalog payload.
///
/// # Errors
///
/// Returns [`TierListError::Catalog`] if the payload is not a JSON array of
/// entry objects.
///
/// # Examples
///
/// ```
/// use tierlist::catalog::parse_catalog;
///
/// let entries = parse_catalog(br#"[{"name": "Pi 5", "type": "sbc", "tier": "S", "tierPosition": 1}]"#)?;
/// assert_eq!(entries.len(), 1);
///
/// assert!(parse_catalog(b"{}").is_err());
/// # Ok::<(), tierlist::TierListError>(())
/// ```
pub fn parse_catalog(payload: &[u8]) -> Result<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_slice(payload)
        .map_err(|e| TierListError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

    let unranked = entries.iter().filter(|entry| entry.tier().is_none()).count();
    tracing::debug!(
        entry_count = entries.len(),
        unranked_count = unranked,
        "catalog decoded"
    );

    Ok(entries)
}

/// Catalog stored as a JSON file.
///
/// Read fresh on every [`load`](CatalogSource::load). The plugin only loads
/// once per session, so nothing is cached.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Vec<CatalogEntry>> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read(&self.file_path)?;
        tracing::trace!(bytes = contents.len(), "catalog file read");

        parse_catalog(&contents)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.file_path.display())
    }
}
