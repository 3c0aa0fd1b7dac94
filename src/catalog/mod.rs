//! Catalog loading.
//!
//! The catalog is loaded once per session from either a JSON file (read by the
//! background worker) or a URL (fetched by the plugin). Both paths end in
//! [`parse_catalog`].
//!
//! # Modules
//!
//! - `location`: File vs URL catalog locations
//! - `source`: The [`CatalogSource`] trait
//! - `json`: JSON decoding and the file-backed source

pub mod json;
pub mod location;
pub mod source;

pub use json::{parse_catalog, JsonCatalog};
pub use location::{CatalogLocation, DEFAULT_CATALOG};
pub use source::CatalogSource;
