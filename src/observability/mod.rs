//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! The crate logs through `tracing` spans and events. When tracing is enabled
//! (see [`init_tracing`]) they are bridged into OpenTelemetry by
//! `tracing-opentelemetry` and appended to a rotating file, by default
//! `<data dir>/herodex/herodex-otlp.json`. Files rotate at 10 MiB and the three
//! newest backups are kept.
//!
//! ```rust,no_run
//! use herodex::observability::init_tracing;
//! use herodex::Config;
//!
//! let config = Config {
//!     trace_level: Some("herodex=debug".to_string()),
//!     ..Default::default()
//! };
//! init_tracing(&config);
//! tracing::debug!("tracing is now active");
//! ```

mod exporter;
mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
