//! Filesystem locations used by herodex.

use std::path::PathBuf;

/// Application directory name under the platform data directory.
const APP_DIR: &str = "herodex";

/// Default trace output file name.
const TRACE_FILE: &str = "herodex-otlp.json";

/// Returns the data directory for herodex.
///
/// Resolves to the platform's local data directory (e.g.
/// `~/.local/share/herodex` on Linux), falling back to the system temp directory
/// when no home directory can be determined.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Default location of the OTLP trace file.
#[must_use]
pub fn default_trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE)
}
