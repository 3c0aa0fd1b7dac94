//! TierList: a Zellij plugin for browsing a single-board-computer tier list.
//!
//! The plugin loads a catalog of boards (a JSON array, from a file or a URL),
//! groups it into `S` to `D` tier rows under a category filter, and shows the
//! details of a board on demand:
//! - Filter chips for All, SBCs, eSBCs, ESBs and DevBoards
//! - Keyboard and mouse navigation across the tier rows
//! - A detail panel with review date, video review and purchase links
//! - Catalog loading on a Zellij worker thread or through a web request
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reducer
//! │  - Immutable state, events, transitions             │
//! │  - Action emission                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - View model  │   │ - Locations   │   │ - File load   │
//! │ - Layout/hits │   │ - JSON decode │   │ - IPC bridge  │
//! │ - Theming     │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Entries, tiers, filters, board builder (domain/) │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/tierlist.wasm" {
//!         catalog "https://sbctierlist.com/data.json"
//!         filter "SBCs"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!         open_command "xdg-open"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use tierlist::{handle_event, initialize, Config, Event, FilterLabel};
//!
//! let mut options = BTreeMap::new();
//! options.insert("filter".to_string(), "eSBCs".to_string());
//! let config = Config::from_zellij(&options);
//!
//! let state = initialize(&config);
//! assert_eq!(state.filter, FilterLabel::Esbcs);
//!
//! let transition = handle_event(&state, &Event::NextFilter)?;
//! assert_eq!(transition.state.filter, FilterLabel::Esbs);
//! # Ok::<(), tierlist::TierListError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, Transition};
pub use catalog::CatalogLocation;
pub use domain::{CatalogEntry, FilterLabel, Result, Tier, TierBoard, TierListError};
pub use ui::Theme;

use infrastructure::paths;
use std::collections::BTreeMap;

/// Default command used to open links.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file path or `http(s)` URL. Default: `data.json`.
    pub catalog: CatalogLocation,

    /// Initial filter as written in the configuration (label or code).
    ///
    /// Resolved by [`Config::initial_filter`].
    pub filter: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Program (plus arguments) that opens URLs.
    pub open_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::default(),
            filter: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            open_command: vec![DEFAULT_OPEN_COMMAND.to_string()],
        }
    }
}

impl Config {
    /// Parses configuration from the map Zellij hands to `load`.
    ///
    /// Blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tierlist::{CatalogLocation, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog".to_string(), "https://sbctierlist.com/data.json".to_string());
    /// map.insert("open_command".to_string(), "open -g".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(matches!(config.catalog, CatalogLocation::Url(_)));
    /// assert_eq!(config.open_command, vec!["open", "-g"]);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let open_command = value("open_command")
            .map(|cmd| cmd.split_whitespace().map(String::from).collect())
            .unwrap_or_else(|| vec![DEFAULT_OPEN_COMMAND.to_string()]);

        Self {
            catalog: value("catalog").map_or_else(CatalogLocation::default, |raw| CatalogLocation::parse(&raw)),
            filter: value("filter"),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            open_command,
        }
    }

    /// Resolves the configured filter, falling back to `All` with a warning.
    #[must_use]
    pub fn initial_filter(&self) -> FilterLabel {
        let Some(raw) = &self.filter else {
            return FilterLabel::All;
        };
        raw.parse().unwrap_or_else(|e: TierListError| {
            tracing::warn!(filter = %raw, error = %e, "unrecognized filter, showing all boards");
            FilterLabel::All
        })
    }

    /// Loads the configured theme, falling back to the default on any problem.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = paths::resolve_host_path(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
///
/// The catalog is not requested yet; that happens once permissions are
/// granted.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog = %config.catalog, "initializing tierlist plugin");
    AppState::new(config.catalog.clone(), config.initial_filter(), config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog, CatalogLocation::File(PathBuf::from("/host/data.json")));
        assert_eq!(config.open_command, vec!["xdg-open"]);
        assert_eq!(config.initial_filter(), FilterLabel::All);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("catalog", "  "), ("filter", ""), ("open_command", " ")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn filter_accepts_label_or_code() {
        let by_label = Config::from_zellij(&map(&[("filter", "DevBoards")]));
        assert_eq!(by_label.initial_filter(), FilterLabel::DevBoards);

        let by_code = Config::from_zellij(&map(&[("filter", "esb")]));
        assert_eq!(by_code.initial_filter(), FilterLabel::Esbs);
    }

    #[test]
    fn unknown_filter_falls_back_to_all() {
        let config = Config::from_zellij(&map(&[("filter", "laptops")]));
        assert_eq!(config.initial_filter(), FilterLabel::All);
    }

    #[test]
    fn theme_selection() {
        let latte = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(latte.load_theme().name, "catppuccin-latte");

        let unknown = Config::from_zellij(&map(&[("theme", "nord")]));
        assert_eq!(unknown.load_theme().name, "catppuccin-mocha");

        let missing_file = Config::from_zellij(&map(&[("theme_file", "/nonexistent/theme.toml")]));
        assert_eq!(missing_file.load_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_uses_configured_catalog() {
        let config = Config::from_zellij(&map(&[("catalog", "~/boards.json"), ("filter", "SBCs")]));
        let state = initialize(&config);
        assert_eq!(state.catalog, CatalogLocation::File(PathBuf::from("/host/boards.json")));
        assert_eq!(state.filter, FilterLabel::Sbcs);
        assert_eq!(state.load, app::LoadState::Idle);
    }
}
