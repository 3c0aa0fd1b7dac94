//! Catalog source abstraction.
//!
//! A [`CatalogSource`] yields the full entry list in one call. The worker loads
//! through this trait rather than a concrete file type.

use crate::domain::entry::CatalogEntry;
use crate::domain::error::Result;

/// A read-only provider of the complete catalog.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): JSON array on disk
///
/// # Examples
///
/// ```no_run
/// use tierlist::catalog::{CatalogSource, JsonCatalog};
/// use std::path::PathBuf;
///
/// let source = JsonCatalog::new(PathBuf::from("/host/data.json"));
/// let entries = source.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CatalogSource: Send {
    /// Loads every entry, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or decoded.
    fn load(&self) -> Result<Vec<CatalogEntry>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}
