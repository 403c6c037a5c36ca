//! Application layer: the client-side view-state core.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Fetch Worker
//!                           ↑                                            ↓
//!                           └──────────── Tagged Fetch Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Case-insensitive name/publisher narrowing
//! - [`pagination`]: Fixed-size paging with clamped cursor
//! - [`favorites`]: Per-hero favorite set
//! - [`selection`]: Detail-view selection
//! - [`modes`]: Idle / Loading / Ready / Failed state machine
//! - [`state`]: [`ViewCoordinator`] composing the above and deriving the render model
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing

pub mod actions;
pub mod favorites;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use favorites::FavoriteSet;
pub use handler::{handle_event, Event};
pub use modes::LoadState;
pub use pagination::{paginate, Page, Pagination, DEFAULT_PAGE_SIZE};
pub use selection::SelectionState;
pub use state::ViewCoordinator;
