//! Subscriber installation.
//!
//! ```text
//! tracing macros → EnvFilter → OpenTelemetryLayer → OtlpFileExporter → RotatingFile
//! ```

use super::exporter;
use super::file_writer::RotatingFile;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "herodex";

/// Rotate the trace file once it passes 10 MiB.
const MAX_TRACE_BYTES: u64 = 10 * 1024 * 1024;

const MAX_TRACE_BACKUPS: usize = 3;

/// Installs the global tracing subscriber when tracing is requested.
///
/// The filter directive comes from `RUST_LOG` if set, otherwise from
/// `config.trace_level`. With neither present nothing is installed and spans
/// compile down to no-ops.
///
/// Spans go to `config.trace_file`, or to
/// [`default_trace_file`](crate::infrastructure::default_trace_file) when unset.
///
/// Returns `true` if this call installed the subscriber. Observability is
/// optional: an uncreatable trace directory or an already-installed subscriber
/// yields `false` rather than an error.
pub fn init_tracing(config: &Config) -> bool {
    let Some(directive) = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.trace_level.clone())
    else {
        return false;
    };

    let trace_file = config
        .trace_file
        .clone()
        .unwrap_or_else(crate::infrastructure::default_trace_file);

    if let Some(parent) = trace_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let writer = RotatingFile::new(trace_file, MAX_TRACE_BYTES, MAX_TRACE_BACKUPS);
    let provider = exporter::create_tracer_provider(writer, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(otel_layer)
        .try_init()
        .is_ok()
}
