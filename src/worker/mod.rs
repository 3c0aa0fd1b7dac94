//! Background worker for catalog loading.
//!
//! The worker reads the catalog file off the plugin thread. It uses Zellij's
//! worker API for cross-thread messaging and propagates trace context so the
//! load shows up in the same trace as the request.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
