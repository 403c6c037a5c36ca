//! Presentation boundary.
//!
//! The core exposes data, not pixels:
//!
//! ```text
//! ViewCoordinator → render_model → RenderModel → (any presentation layer)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Render model types handed to presentation layers
//! - [`renderer`]: Plain-text renderer used by the bundled shell

pub mod renderer;
pub mod viewmodel;

pub use renderer::render_text;
pub use viewmodel::{DetailPanel, EmptyState, HeroCard, PagerInfo, RenderModel};
