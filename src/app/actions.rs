//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a list of [`Action`]s alongside the next state.
//! The plugin shim executes them in order: posting to the worker, issuing the
//! web request for a remote catalog, launching links, or hiding the pane.
//!
//! # Example
//!
//! ```rust
//! use tierlist::app::Action;
//! use tierlist::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_catalog("/host/data.json")),
//! ];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Fetches a remote catalog with an HTTP GET.
    ///
    /// The response comes back as `Event::CatalogFetched`.
    FetchCatalog {
        url: String,
    },

    /// Opens a URL with the configured opener command (`xdg-open` by default).
    OpenLink {
        url: String,
    },
}
