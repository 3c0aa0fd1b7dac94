//! Where the catalog comes from.

use crate::infrastructure::paths;
use std::fmt;
use std::path::PathBuf;

/// Default catalog location, next to where Zellij was started.
pub const DEFAULT_CATALOG: &str = "data.json";

/// A catalog location parsed from the `catalog` configuration value.
///
/// URLs are fetched by the plugin through Zellij's web request API. Files are
/// read by the background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    /// Sandbox path to a JSON file.
    File(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl CatalogLocation {
    /// Parses a configured location.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tierlist::catalog::CatalogLocation;
    ///
    /// assert_eq!(
    ///     CatalogLocation::parse("https://sbctierlist.com/data.json"),
    ///     CatalogLocation::Url("https://sbctierlist.com/data.json".to_string())
    /// );
    /// assert_eq!(
    ///     CatalogLocation::parse("~/tiers/data.json"),
    ///     CatalogLocation::File(PathBuf::from("/host/tiers/data.json"))
    /// );
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lowered = raw.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(paths::resolve_host_path(raw))
        }
    }
}

impl Default for CatalogLocation {
    fn default() -> Self {
        Self::parse(DEFAULT_CATALOG)
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => {
                f.write_str(&paths::strip_host_prefix(&path.to_string_lossy()))
            }
            Self::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_data_json_under_host() {
        assert_eq!(
            CatalogLocation::default(),
            CatalogLocation::File(PathBuf::from("/host/data.json"))
        );
    }

    #[test]
    fn scheme_detection_ignores_case() {
        assert!(matches!(
            CatalogLocation::parse("HTTPS://example.com/data.json"),
            CatalogLocation::Url(_)
        ));
    }

    #[test]
    fn display_hides_the_sandbox_mount() {
        assert_eq!(CatalogLocation::parse("data.json").to_string(), "/data.json");
    }
}
