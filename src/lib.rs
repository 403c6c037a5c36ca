//! Herodex: the view-state core of a searchable superhero catalog.
//!
//! Herodex turns a remote hero list into everything a presentation layer needs
//! to draw a search screen:
//! - Case-insensitive name/publisher search over the fetched catalog
//! - Fixed-size pagination with "Go to page N" pager labels
//! - Per-hero favorites and a single detail selection
//! - Loading and error state with stale-response protection

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell (main.rs) / any presentation layer           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session (session.rs)                               │  ← Callbacks
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Filter, pagination, favorites, selection         │
//! │  - Render model derivation                          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Catalog       │
//! │ (ui/)         │   │ (worker/)     │   │ (catalog/)    │
//! │ - RenderModel │   │ - Tagged      │   │ - HTTP source │
//! │ - Text render │   │   fetch tasks │   │ - JSON records│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure, Observability              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View coordinator with event/action model
//! - [`catalog`]: Catalog source trait and its HTTP implementation
//! - [`domain`]: Hero model and errors
//! - [`infrastructure`]: Platform data directory
//! - [`observability`]: OpenTelemetry tracing to a local file
//! - [`session`]: Presentation-facing callbacks over the coordinator
//! - [`ui`]: Render model and plain-text renderer
//! - [`worker`]: Asynchronous, request-tagged catalog fetches
//!
//! # Stale responses
//!
//! Every fetch carries a [`worker::RequestId`]. The coordinator only applies
//! the response whose id matches its pending request, so a slow response for
//! an old query can never overwrite the results of a newer one.
//!
//! # Example
//!
//! ```rust
//! use herodex::{handle_event, Action, Event, ViewCoordinator};
//!
//! let mut coordinator = ViewCoordinator::default();
//! let (should_render, actions) =
//!     handle_event(&mut coordinator, Event::SetQuery("spider".to_string()));
//!
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::FetchCatalog(_)]));
//! assert!(coordinator.render_model().loading);
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod session;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, Event, LoadState, ViewCoordinator};
pub use catalog::{CatalogSource, HttpCatalog};
pub use domain::{Hero, HeroDexError, HeroId, Result};
pub use session::Session;
pub use ui::RenderModel;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default catalog base URL.
pub const DEFAULT_BASE_URL: &str = "https://akabab.github.io/superhero-api/api/";

/// Default HTTP timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration.
///
/// Every key is optional in TOML; missing keys take their defaults.
///
/// # Example
///
/// ```toml
/// base_url = "https://akabab.github.io/superhero-api/api/"
/// page_size = 6
/// request_timeout_secs = 30
/// trace_level = "herodex=debug"
/// trace_file = "/tmp/herodex-otlp.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog base URL. Fetches go to `<base_url>/all.json`.
    pub base_url: String,

    /// Heroes per page, used for both page counting and slicing. Must be at
    /// least 1. Default: 6
    pub page_size: usize,

    /// HTTP client timeout. A timed-out fetch is reported as a fetch failure.
    pub request_timeout_secs: u64,

    /// `EnvFilter` directive, e.g. `"debug"` or `"herodex=trace"`.
    ///
    /// Tracing is only installed when this or `RUST_LOG` is set.
    pub trace_level: Option<String>,

    /// Trace output file. Defaults to `<data dir>/herodex/herodex-otlp.json`.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: app::DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`HeroDexError::Config`] for malformed TOML or a zero `page_size`.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| HeroDexError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HeroDexError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`HeroDexError::Config`] if `page_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(HeroDexError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Creates an idle coordinator for `config`.
///
/// Presentation layers that drive their own fetching use this directly;
/// everything else goes through [`Session`].
#[must_use]
pub fn initialize(config: &Config) -> ViewCoordinator {
    tracing::debug!(page_size = config.page_size, "initializing herodex");
    ViewCoordinator::new(config)
}
