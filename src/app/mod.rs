//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! domain/catalog/worker layers.
//!
//! ```text
//! User Input → Events → handle_event → Transition { state, actions } → Side Effects
//!                           ↑                                              ↓
//!                           └─────────── Worker / Web Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`cursor`]: Keyboard cursor movement over the board
//! - [`handler`]: The reducer
//! - [`keys`]: Key bindings
//! - [`state`]: Immutable application state

pub mod actions;
pub mod cursor;
pub mod handler;
pub mod keys;
pub mod state;

pub use actions::Action;
pub use cursor::Cursor;
pub use handler::{handle_event, Event, Transition, TAXONOMY_URL};
pub use keys::map_key;
pub use state::{AppState, LoadState};
