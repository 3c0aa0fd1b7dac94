//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → tierlist-otlp.json
//! ```
//!
//! Traces land in `~/.local/share/zellij/tierlist/tierlist-otlp.json` (through
//! the `/host` mount), one OTLP JSON document per line. The file rotates at
//! 10 MB and keeps three backups.
//!
//! The level is taken from the `trace_level` plugin option and defaults to
//! `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotation`]: Size-rotated trace file

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "TierList";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "tierlist-otlp.json";
