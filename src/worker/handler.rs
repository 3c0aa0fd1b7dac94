//! Worker thread implementation for catalog loading.
//!
//! File reads run here so a slow or large catalog never blocks rendering. The
//! Zellij worker trait itself is implemented by the plugin shim, which hands
//! raw payloads to [`CatalogWorker::on_payload`] and posts back whatever it
//! returns.

use crate::catalog::{CatalogSource, JsonCatalog};
use crate::domain::error::Result;
use crate::domain::CatalogEntry;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Worker thread state.
///
/// Stateless apart from tracing setup: every message names the file it wants.
#[derive(Debug, Default)]
pub struct CatalogWorker;

impl CatalogWorker {
    /// Converts a source load result into a response with consistent logging.
    fn handle_load_result(source: &dyn CatalogSource, result: Result<Vec<CatalogEntry>>) -> WorkerResponse {
        match result {
            Ok(entries) => {
                tracing::debug!(
                    source = %source.describe(),
                    entry_count = entries.len(),
                    "catalog loaded"
                );
                WorkerResponse::CatalogLoaded { entries }
            }
            Err(e) => {
                tracing::error!(source = %source.describe(), error = %e, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("load catalog: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context carried by a message.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => {
                let source = JsonCatalog::new(PathBuf::from(path));
                let result = source.load();
                Self::handle_load_result(&source, result)
            }
        }
    }

    /// Handles a raw JSON payload from the plugin thread.
    ///
    /// Initializes worker tracing on first use, at the level the request
    /// carries. An unreadable request is answered with an error so the load
    /// still ends. Returns `None` only if the response cannot be encoded.
    pub fn on_payload(&mut self, payload: &str) -> Option<String> {
        let request = Self::decode(payload);

        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            let config = crate::Config {
                trace_level: request.as_ref().ok().and_then(WorkerMessage::trace_level).map(String::from),
                ..crate::Config::default()
            };
            crate::observability::init_tracing(&config);
        }

        let response = match request {
            Ok(message) => self.handle_message(message),
            Err(response) => {
                tracing::warn!(response = ?response, "unreadable worker request");
                response
            }
        };

        serde_json::to_string(&response)
            .map_err(|e| tracing::debug!(error = %e, "failed to serialize worker response"))
            .ok()
    }

    /// Decodes a request, turning a bad payload into the reply for it.
    fn decode(payload: &str) -> std::result::Result<WorkerMessage, WorkerResponse> {
        serde_json::from_str(payload).map_err(|e| WorkerResponse::Error {
            message: format!("unreadable worker request: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "Pi 5", "type": "sbc", "tier": "S", "tierPosition": 1}]"#)
            .unwrap();

        let mut worker = CatalogWorker;
        let response = worker.handle_message(WorkerMessage::LoadCatalog {
            path: file.path().to_string_lossy().to_string(),
            trace_context: None,
            trace_level: None,
        });

        match response {
            WorkerResponse::CatalogLoaded { entries } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].name, "Pi 5");
            }
            WorkerResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = CatalogWorker;
        let response = worker.handle_message(WorkerMessage::LoadCatalog {
            path: dir.path().join("nope.json").to_string_lossy().to_string(),
            trace_context: None,
            trace_level: None,
        });

        assert!(matches!(response, WorkerResponse::Error { .. }));
    }

    #[test]
    fn malformed_trace_context_is_ignored() {
        let message = WorkerMessage::LoadCatalog {
            path: "/nowhere.json".to_string(),
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "zz".to_string(),
                parent_span_id: "zz".to_string(),
            }),
            trace_level: None,
        };
        assert!(CatalogWorker::attach_parent_trace_context(&message).is_none());
    }

    #[test]
    fn bad_request_gets_an_error_reply() {
        match CatalogWorker::decode("{\"Unknown\": {}}") {
            Err(WorkerResponse::Error { message }) => assert!(message.starts_with("unreadable worker request")),
            other => panic!("unexpected decode result: {other:?}"),
        }
    }

    #[test]
    fn request_decodes_with_trace_level() {
        let payload = r#"{"LoadCatalog": {"path": "/host/data.json", "trace_level": "debug"}}"#;
        let message = CatalogWorker::decode(payload).unwrap();
        assert_eq!(message.trace_level(), Some("debug"));
    }
}
