//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request/response protocol between the plugin thread
//! and the background worker that reads the catalog file. Messages travel as
//! JSON and carry the OpenTelemetry trace context so worker spans join the
//! plugin's trace.

use crate::domain::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the active span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active, for example
    /// when tracing has not been initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and decode the catalog file.
    LoadCatalog {
        /// Sandbox path of the JSON catalog.
        path: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,

        /// `EnvFilter` directive for the worker's own subscriber.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_level: Option<String>,
    },
}

impl WorkerMessage {
    /// Creates a `LoadCatalog` message with the current trace context.
    pub fn load_catalog(path: impl Into<String>) -> Self {
        Self::LoadCatalog {
            path: path.into(),
            trace_context: TraceContext::from_current(),
            trace_level: None,
        }
    }

    /// Sets the tracing level the worker should use.
    #[must_use]
    pub fn with_trace_level(self, level: Option<String>) -> Self {
        match self {
            Self::LoadCatalog { path, trace_context, .. } => Self::LoadCatalog {
                path,
                trace_context,
                trace_level: level,
            },
        }
    }

    #[must_use]
    pub fn trace_level(&self) -> Option<&str> {
        match self {
            Self::LoadCatalog { trace_level, .. } => trace_level.as_deref(),
        }
    }

    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was read and decoded.
    CatalogLoaded {
        /// Entries in catalog order.
        entries: Vec<CatalogEntry>,
    },

    /// The worker operation failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_message_survives_json_transport() {
        let message = WorkerMessage::LoadCatalog {
            path: "/host/data.json".to_string(),
            trace_context: None,
            trace_level: None,
        };
        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));
        assert_eq!(serde_json::from_str::<WorkerMessage>(&payload).unwrap(), message);
    }

    #[test]
    fn builder_without_tracing_has_no_context() {
        let message = WorkerMessage::load_catalog("/host/data.json");
        assert!(message.trace_context().is_none());
    }

    #[test]
    fn trace_level_travels_with_the_request() {
        let message = WorkerMessage::load_catalog("/host/data.json").with_trace_level(Some("debug".to_string()));
        let payload = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded.trace_level(), Some("debug"));
    }
}
