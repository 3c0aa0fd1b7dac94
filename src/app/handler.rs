//! Event handling and state transition logic.
//!
//! [`handle_event`] is a reducer: it reads the current [`AppState`] and an
//! [`Event`] and returns a [`Transition`] holding the next state, whether the
//! screen needs redrawing, and the side effects to run. It never mutates its
//! input and never talks to Zellij itself.
//!
//! # Event Types
//!
//! - **Navigation**: `MoveUp`, `MoveDown`, `MoveLeft`, `MoveRight`
//! - **Filter**: `NextFilter`, `PreviousFilter`, `FilterChanged`
//! - **Selection**: `OpenCursor`, `SelectionChanged`, `Dismiss`
//! - **Links**: `OpenVideo`, `OpenPurchase`, `OpenTaxonomy`
//! - **Lifecycle**: `PermissionsGranted`, `PermissionsDenied`, `WorkerResponse`,
//!   `CatalogFetched`, `CatalogFetchFailed`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use tierlist::app::{handle_event, AppState, Event};
//! use tierlist::catalog::CatalogLocation;
//! use tierlist::domain::FilterLabel;
//! use tierlist::ui::Theme;
//!
//! let state = AppState::new(CatalogLocation::default(), FilterLabel::All, Theme::default());
//! let transition = handle_event(&state, &Event::NextFilter)?;
//! assert_eq!(transition.state.filter, FilterLabel::Sbcs);
//! assert!(transition.should_render);
//! # Ok::<(), tierlist::TierListError>(())
//! ```

use super::cursor::Cursor;
use super::state::LoadState;
use crate::app::{Action, AppState};
use crate::catalog::{parse_catalog, CatalogLocation};
use crate::domain::error::{Result, TierListError};
use crate::domain::{CatalogEntry, FilterLabel};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Board taxonomy reference shown in the header.
pub const TAXONOMY_URL: &str = "https://github.com/platima/board-taxomomies";

/// Events triggered by user input, the host, or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Activates the next filter chip, wrapping around.
    NextFilter,
    /// Activates the previous filter chip, wrapping around.
    PreviousFilter,
    /// Activates a specific filter (chip click or number key).
    FilterChanged(FilterLabel),

    /// Opens the detail panel for the entry under the cursor.
    OpenCursor,
    /// Opens the detail panel for the named entry, or closes it with `None`.
    SelectionChanged(Option<String>),
    /// Closes the detail panel.
    Dismiss,

    /// Opens the selected entry's video review.
    OpenVideo,
    /// Opens the selected entry's purchase link.
    OpenPurchase,
    /// Opens the board taxonomy reference.
    OpenTaxonomy,

    /// Requested permissions were granted. Issues the catalog load.
    PermissionsGranted,
    /// Requested permissions were refused. The catalog can never load.
    PermissionsDenied,

    /// Response from the background worker.
    WorkerResponse(WorkerResponse),

    /// A web request for a remote catalog completed.
    CatalogFetched {
        status: u16,
        body: Vec<u8>,
    },

    /// A catalog reply arrived but could not be read.
    CatalogFetchFailed {
        error: String,
    },

    /// Hides the plugin.
    CloseFocus,
}

/// Result of handling one event.
#[derive(Debug, Clone)]
pub struct Transition {
    /// The state to keep.
    pub state: AppState,
    /// Whether the screen needs a redraw.
    pub should_render: bool,
    /// Side effects to execute in order.
    pub actions: Vec<Action>,
}

impl Transition {
    fn render(state: AppState) -> Self {
        Self {
            state,
            should_render: true,
            actions: vec![],
        }
    }

    fn unchanged(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            should_render: false,
            actions: vec![],
        }
    }

    fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = actions;
        self
    }
}

/// Computes the next state for an event.
///
/// # Errors
///
/// Returns [`TierListError::UnknownEntry`] when `SelectionChanged` names an
/// entry that is not in the catalog. The caller drops such events.
pub fn handle_event(state: &AppState, event: &Event) -> Result<Transition> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::MoveUp => Ok(move_cursor(state, Cursor::up)),
        Event::MoveDown => Ok(move_cursor(state, Cursor::down)),
        Event::MoveLeft => Ok(move_cursor(state, Cursor::left)),
        Event::MoveRight => Ok(move_cursor(state, Cursor::right)),

        Event::NextFilter => Ok(change_filter(state, state.filter.next())),
        Event::PreviousFilter => Ok(change_filter(state, state.filter.previous())),
        Event::FilterChanged(filter) => Ok(change_filter(state, *filter)),

        Event::OpenCursor => {
            if state.is_detail_open() {
                return Ok(Transition::unchanged(state));
            }
            let Some(entry) = state.cursor_entry() else {
                tracing::debug!(tier = %state.cursor.tier, "no entry under cursor");
                return Ok(Transition::unchanged(state));
            };
            tracing::debug!(entry = %entry.name, "entry selected");
            let selection = Some(entry.clone());
            Ok(Transition::render(state.clone().with_selection(selection)))
        }
        Event::SelectionChanged(Some(name)) => {
            let entry = state
                .entry_by_name(name)
                .cloned()
                .ok_or_else(|| TierListError::UnknownEntry(name.clone()))?;
            tracing::debug!(entry = %entry.name, "entry selected");
            let cursor = state.cursor.follow(&state.board, &entry.name);
            Ok(Transition::render(
                state.clone().with_cursor(cursor).with_selection(Some(entry)),
            ))
        }
        Event::SelectionChanged(None) | Event::Dismiss => {
            if state.is_detail_open() {
                Ok(Transition::render(state.clone().with_selection(None)))
            } else {
                Ok(Transition::unchanged(state))
            }
        }

        Event::OpenVideo => Ok(open_selected_link(state, |entry| &entry.video_url)),
        Event::OpenPurchase => Ok(open_selected_link(state, |entry| &entry.purchase_link)),
        Event::OpenTaxonomy => Ok(Transition::unchanged(state).with_actions(vec![Action::OpenLink {
            url: TAXONOMY_URL.to_string(),
        }])),

        Event::PermissionsGranted => {
            if state.load != LoadState::Idle {
                tracing::debug!(load = ?state.load, "catalog load already requested");
                return Ok(Transition::unchanged(state));
            }
            tracing::info!(catalog = %state.catalog, "requesting catalog load");
            let action = match &state.catalog {
                CatalogLocation::File(path) => {
                    Action::PostToWorker(WorkerMessage::load_catalog(path.to_string_lossy()))
                }
                CatalogLocation::Url(url) => Action::FetchCatalog { url: url.clone() },
            };
            Ok(Transition::render(state.clone().with_load(LoadState::InFlight)).with_actions(vec![action]))
        }

        Event::PermissionsDenied => {
            if state.load != LoadState::Idle {
                return Ok(Transition::unchanged(state));
            }
            tracing::warn!("permissions denied, catalog will not load");
            Ok(Transition::render(state.clone().with_load(LoadState::Failed {
                error: "permissions denied".to_string(),
            })))
        }

        Event::WorkerResponse(WorkerResponse::CatalogLoaded { entries }) => {
            Ok(accept_entries(state, entries.clone()))
        }
        Event::WorkerResponse(WorkerResponse::Error { message }) => Ok(reject_load(state, message)),
        Event::CatalogFetched { status, body } => {
            if !(200..300).contains(status) {
                return Ok(reject_load(state, &format!("HTTP status {status}")));
            }
            match parse_catalog(body) {
                Ok(entries) => Ok(accept_entries(state, entries)),
                Err(e) => Ok(reject_load(state, &e.to_string())),
            }
        }
        Event::CatalogFetchFailed { error } => Ok(reject_load(state, error)),

        Event::CloseFocus => Ok(Transition::unchanged(state).with_actions(vec![Action::CloseFocus])),
    }
}

/// Event name without payload, so large catalog bodies stay out of spans.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::WorkerResponse(WorkerResponse::CatalogLoaded { entries }) => {
                write!(f, "WorkerResponse(CatalogLoaded[{}])", entries.len())
            }
            Event::CatalogFetched { status, body } => {
                write!(f, "CatalogFetched({status}, {} bytes)", body.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

fn move_cursor(state: &AppState, step: fn(Cursor, &crate::domain::TierBoard) -> Cursor) -> Transition {
    if state.is_detail_open() {
        return Transition::unchanged(state);
    }
    let cursor = step(state.cursor, &state.board);
    if cursor == state.cursor {
        return Transition::unchanged(state);
    }
    Transition::render(state.clone().with_cursor(cursor))
}

fn change_filter(state: &AppState, filter: FilterLabel) -> Transition {
    if state.is_detail_open() || filter == state.filter {
        return Transition::unchanged(state);
    }
    tracing::debug!(from = %state.filter, to = %filter, "filter changed");
    Transition::render(state.clone().with_filter(filter))
}

fn open_selected_link(state: &AppState, link: fn(&CatalogEntry) -> &String) -> Transition {
    let Some(entry) = &state.selection else {
        return Transition::unchanged(state);
    };
    let url = link(entry).trim();
    if url.is_empty() {
        tracing::debug!(entry = %entry.name, "entry has no link of this kind");
        return Transition::unchanged(state);
    }
    Transition::unchanged(state).with_actions(vec![Action::OpenLink { url: url.to_string() }])
}

fn accept_entries(state: &AppState, entries: Vec<CatalogEntry>) -> Transition {
    if !state.load.is_in_flight() {
        tracing::debug!(load = ?state.load, "ignoring catalog result outside of an active load");
        return Transition::unchanged(state);
    }
    let count = entries.len();
    tracing::info!(entry_count = count, "catalog loaded");
    Transition::render(
        state
            .clone()
            .with_entries(entries)
            .with_load(LoadState::Loaded { count }),
    )
}

fn reject_load(state: &AppState, error: &str) -> Transition {
    if !state.load.is_in_flight() {
        tracing::debug!(load = ?state.load, error, "ignoring catalog failure outside of an active load");
        return Transition::unchanged(state);
    }
    tracing::error!(catalog = %state.catalog, error, "catalog load failed");
    Transition::render(
        state
            .clone()
            .with_entries(Vec::new())
            .with_load(LoadState::Failed {
                error: error.to_string(),
            }),
    )
}
