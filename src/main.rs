//! Zellij plugin wrapper and entry point.
//!
//! Thin glue between the `tierlist` library and the Zellij plugin API. It
//! implements `ZellijPlugin` and `ZellijWorker`, turns host events into library
//! events, and runs the actions the reducer hands back.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │      web_request (URL catalogs)
//! │  │  State (plugin)  │───┼──────────────────────────────▶
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  TierListWorker  │   │  ← Catalog file reads
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Permissions**: Once granted, the catalog load is issued
//! 3. **Update**: Map Key, Mouse, `CustomMessage` and `WebRequestResult` events
//! 4. **Render**: Draw the frame and keep its layout for mouse hit-testing
//!
//! # Event Mapping
//!
//! - `Key` → [`tierlist::app::map_key`]
//! - `Mouse(LeftClick)` → hit test on the last drawn layout
//! - `Mouse(ScrollUp/ScrollDown)` → `MoveUp` / `MoveDown`
//! - `CustomMessage` from the worker → `Event::WorkerResponse`
//! - `WebRequestResult` → `Event::CatalogFetched`

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(not(target_family = "wasm"), allow(dead_code, unused_imports))]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use tierlist::app::map_key;
use tierlist::ui::UIViewModel;
use tierlist::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
use tierlist::{handle_event, Action, AppState, Config, Event};

#[cfg(target_family = "wasm")]
register_plugin!(State);
#[cfg(target_family = "wasm")]
register_worker!(TierListWorker, tierlist_worker, TIERLIST_WORKER);

/// The plugin only runs inside Zellij.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("tierlist is a Zellij plugin: build it for wasm32-wasip1 and load the .wasm from Zellij");
}

/// Worker name used for IPC, matching the `register_worker!` prefix.
const WORKER_NAME: &str = "tierlist";
/// Context key tagging our catalog web request.
const REQUEST_CONTEXT_KEY: &str = "request";
const CATALOG_REQUEST: &str = "catalog";

/// Plugin state wrapper.
struct State {
    /// Core application state from the library layer.
    app: AppState,

    /// Layout of the last drawn frame, for mouse hit-testing.
    viewmodel: Option<UIViewModel>,

    /// Program (plus arguments) that opens links.
    open_command: Vec<String>,

    /// Tracing level handed on to the worker.
    trace_level: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: tierlist::initialize(&config),
            viewmodel: None,
            open_command: config.open_command,
            trace_level: config.trace_level,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `FullHdAccess`: Read a catalog file from the host filesystem
    /// - `WebAccess`: Fetch a catalog URL
    /// - `RunCommands`: Open links with the configured opener
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        tierlist::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = tierlist::initialize(&config);
        self.open_command.clone_from(&config.open_command);
        self.trace_level.clone_from(&config.trace_level);
        tracing::debug!(catalog = %config.catalog, filter = %self.app.filter, "app state initialized");

        request_permission(&[
            PermissionType::FullHdAccess,
            PermissionType::WebAccess,
            PermissionType::RunCommands,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, runs it through the reducer and executes the
    /// resulting actions. Returns whether the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => map_key(key, self.app.is_detail_open()),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                Self::map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_request_result(status, body, &context)
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    tracing::warn!(
                        exit_code = ?exit_code,
                        stderr = %String::from_utf8_lossy(&stderr),
                        "open command failed"
                    );
                }
                None
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("permissions granted");
                    Some(Event::PermissionsGranted)
                }
                PermissionStatus::Denied => Some(Event::PermissionsDenied),
            },
            _ => None,
        };

        let Some(our_event) = our_event else {
            return false;
        };

        match handle_event(&self.app, &our_event) {
            Ok(transition) => {
                tracing::debug!(
                    action_count = transition.actions.len(),
                    should_render = transition.should_render,
                    "event handled successfully"
                );
                self.app = transition.state;
                for action in &transition.actions {
                    self.execute_action(action);
                }
                transition.should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.viewmodel = Some(tierlist::ui::render(&self.app, rows, cols));
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps clicks through the last frame's layout; scrolling moves the cursor.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()?;
                let hit = self.viewmodel.as_ref()?.layout.hit_test(row, col);
                tracing::debug!(row, col, hit = ?hit, "click");
                hit.event()
            }
            Mouse::ScrollUp(_) => Some(Event::MoveUp),
            Mouse::ScrollDown(_) => Some(Event::MoveDown),
            _ => None,
        }
    }

    /// Decodes a worker reply. An unreadable reply fails the load.
    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                Some(Event::CatalogFetchFailed {
                    error: format!("unreadable worker reply: {e}"),
                })
            }
        }
    }

    fn map_web_request_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(CATALOG_REQUEST) {
            tracing::debug!(context = ?context, "ignoring unrelated web request result");
            return None;
        }
        tracing::debug!(status, body_len = body.len(), "catalog web request completed");
        Some(Event::CatalogFetched { status, body })
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(message) => {
                Self::post_worker_message(&message.clone().with_trace_level(self.trace_level.clone()));
            }
            Action::FetchCatalog { url } => {
                tracing::debug!(url = %url, "fetching catalog");
                let context = BTreeMap::from([(REQUEST_CONTEXT_KEY.to_string(), CATALOG_REQUEST.to_string())]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), Vec::new(), context);
            }
            Action::OpenLink { url } => {
                if self.open_command.is_empty() {
                    tracing::warn!(url = %url, "no open command configured");
                    return;
                }
                tracing::debug!(url = %url, command = ?self.open_command, "opening link");
                let mut argv: Vec<&str> = self.open_command.iter().map(String::as_str).collect();
                argv.push(url);
                run_command(&argv, BTreeMap::new());
            }
        }
    }
}

/// Worker-side shim: the Zellij trait wrapped around the library's worker.
#[derive(Default, Serialize, Deserialize)]
struct TierListWorker {
    #[serde(skip)]
    inner: CatalogWorker,
}

impl ZellijWorker<'_> for TierListWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if let Some(payload) = self.inner.on_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            });
        }
    }
}
