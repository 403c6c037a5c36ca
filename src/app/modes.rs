//! Load-state machine for the view coordinator.
//!
//! # State Machine
//!
//! ```text
//!            query non-empty                 fetch ok
//!   Idle ───────────────────▶ Loading ─────────────────▶ Ready
//!    ▲                          │  ▲                       │
//!    │ query empty              │  │ query changes         │
//!    │                          │  └───────────────────────┤
//!    │                 fetch err▼                          │
//!    └──────────────────────── Failed ◀────────────────────┘
//! ```
//!
//! Every state except `Idle` returns to `Idle` when the query becomes blank, and to
//! `Loading` when the query changes to another non-blank value. Favorite toggles and
//! detail selection never change the state.

use crate::worker::RequestId;
use serde::Serialize;

/// Where the coordinator is in the fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// Query is blank. Collection is empty, no error, page 1.
    Idle,

    /// A fetch is in flight.
    ///
    /// Only the response tagged with `request_id` is accepted; answers to older
    /// requests are discarded.
    Loading {
        /// Tag of the request whose answer is awaited.
        request_id: RequestId,
    },

    /// The last fetch succeeded. The collection may still be empty.
    Ready,

    /// The last fetch failed. The previous collection is retained.
    Failed,
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Request id awaited while loading.
    #[must_use]
    pub const fn pending_request(&self) -> Option<RequestId> {
        match self {
            Self::Loading { request_id } => Some(*request_id),
            Self::Idle | Self::Ready | Self::Failed => None,
        }
    }
}
