//! Application state.
//!
//! [`AppState`] is a value: the event handler takes a reference to the current
//! state and returns the next one. Large parts (the entry snapshot, the built
//! board and the theme) sit behind `Arc`s, so producing the next state is a
//! handful of reference-count bumps rather than deep copies.
//!
//! # State Components
//!
//! - **Entries**: The catalog as loaded, in load order
//! - **Load**: Progress of the one-shot catalog load
//! - **Filter**: The active category filter
//! - **Board**: Entries grouped into tiers for the active filter, derived
//! - **Cursor**: Keyboard position on the board
//! - **Selection**: The entry shown in the detail panel, if any
//!
//! # Example
//!
//! ```rust
//! use tierlist::app::AppState;
//! use tierlist::catalog::CatalogLocation;
//! use tierlist::domain::{CatalogEntry, FilterLabel};
//! use tierlist::ui::Theme;
//!
//! let state = AppState::new(CatalogLocation::default(), FilterLabel::All, Theme::default())
//!     .with_entries(vec![CatalogEntry::new("Pi 5", "sbc", "S", 1.0)]);
//! assert_eq!(state.board.len(), 1);
//! assert!(!state.is_detail_open());
//! ```

use super::cursor::Cursor;
use crate::catalog::CatalogLocation;
use crate::domain::{CatalogEntry, FilterLabel, TierBoard};
use crate::ui::theme::Theme;
use std::sync::Arc;

/// Progress of the catalog load.
///
/// The load is requested once. A result is only accepted while the state is
/// [`LoadState::InFlight`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for permissions.
    #[default]
    Idle,
    InFlight,
    Loaded {
        count: usize,
    },
    Failed {
        error: String,
    },
}

impl LoadState {
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every catalog entry in load order, including ones no bucket shows.
    pub entries: Arc<[CatalogEntry]>,

    pub load: LoadState,

    pub filter: FilterLabel,

    /// Derived from `entries` and `filter`. Rebuilt whenever either changes.
    pub board: Arc<TierBoard>,

    pub cursor: Cursor,

    /// Entry shown in the detail panel. `None` means the panel is closed.
    pub selection: Option<CatalogEntry>,

    pub theme: Arc<Theme>,

    /// Where the catalog is loaded from.
    pub catalog: CatalogLocation,
}

impl AppState {
    /// Creates the initial state: no entries, load not yet requested.
    #[must_use]
    pub fn new(catalog: CatalogLocation, filter: FilterLabel, theme: Theme) -> Self {
        Self {
            entries: Arc::from(Vec::new()),
            load: LoadState::Idle,
            filter,
            board: Arc::new(TierBoard::empty(filter)),
            cursor: Cursor::default(),
            selection: None,
            theme: Arc::new(theme),
            catalog,
        }
    }

    /// Replaces the entry snapshot and rebuilds the board.
    #[must_use]
    pub fn with_entries(self, entries: Vec<CatalogEntry>) -> Self {
        let entries: Arc<[CatalogEntry]> = Arc::from(entries);
        let board = TierBoard::build(&entries, self.filter);
        let cursor = self.cursor.clamp(&board);
        Self {
            entries,
            board: Arc::new(board),
            cursor,
            ..self
        }
    }

    /// Switches the active filter and rebuilds the board.
    ///
    /// The cursor stays on the entry it was on when that entry survives the
    /// new filter, otherwise it is clamped into its row.
    #[must_use]
    pub fn with_filter(self, filter: FilterLabel) -> Self {
        let board = TierBoard::build(&self.entries, filter);
        let cursor = match self.cursor_entry() {
            Some(entry) => self.cursor.follow(&board, &entry.name),
            None => self.cursor.clamp(&board),
        };
        Self {
            filter,
            board: Arc::new(board),
            cursor,
            ..self
        }
    }

    #[must_use]
    pub fn with_cursor(self, cursor: Cursor) -> Self {
        Self { cursor, ..self }
    }

    #[must_use]
    pub fn with_selection(self, selection: Option<CatalogEntry>) -> Self {
        Self { selection, ..self }
    }

    #[must_use]
    pub fn with_load(self, load: LoadState) -> Self {
        Self { load, ..self }
    }

    /// Entry under the keyboard cursor, if the cursor row is not empty.
    #[must_use]
    pub fn cursor_entry(&self) -> Option<&CatalogEntry> {
        self.board.entry_at(self.cursor.tier, self.cursor.column)
    }

    /// Looks up a catalog entry by name.
    #[must_use]
    pub fn entry_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub const fn is_detail_open(&self) -> bool {
        self.selection.is_some()
    }
}
