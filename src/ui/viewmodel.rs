//! Render model handed to the presentation layer.
//!
//! View models are immutable snapshots computed by
//! [`ViewCoordinator::render_model`](crate::app::ViewCoordinator::render_model).
//! They hold display-ready data only; user actions flow back through
//! [`Event`](crate::app::Event) or the [`Session`](crate::Session) callbacks.
//!
//! # Example
//!
//! ```rust
//! use herodex::{Config, ViewCoordinator};
//!
//! let coordinator = ViewCoordinator::new(&Config::default());
//! let model = coordinator.render_model();
//! assert!(model.cards.is_empty());
//! assert!(!model.loading);
//! assert!(model.empty_state.is_some());
//! ```

use crate::app::LoadState;
use crate::domain::{Hero, HeroId};
use serde::Serialize;

/// Prompt shown while there is nothing to list.
pub const SEARCH_PROMPT: &str = "Search for a super hero by name or publisher";

/// Detail placeholder while the page has heroes but none is selected.
pub const SELECT_PROMPT: &str =
    "Click on a super hero's show button for all details. Happy exploring!";

/// Detail placeholder while the page is empty.
pub const NO_SELECTION: &str = "No super hero selected";

/// Complete snapshot of what the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    /// Current search text, as typed.
    pub query: String,

    /// Fetch lifecycle state.
    pub load_state: LoadState,

    /// Whether a fetch is in flight.
    pub loading: bool,

    /// Message of the last failed fetch, if the last fetch failed.
    ///
    /// Independent of `cards`: after a failure the previous results are still listed.
    pub error: Option<String>,

    /// Heroes on the current page, in collection order.
    pub cards: Vec<HeroCard>,

    /// Page navigation state.
    pub pager: PagerInfo,

    /// Detail panel content.
    pub detail: DetailPanel,

    /// Message shown when the filtered collection is empty.
    pub empty_state: Option<EmptyState>,

    /// Favorite hero ids, ascending.
    pub favorites: Vec<HeroId>,
}

impl RenderModel {
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.pager.has_prev
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pager.has_next
    }

    /// Favorite-status lookup for any hero id, listed or not.
    #[must_use]
    pub fn is_favorite(&self, id: HeroId) -> bool {
        self.favorites.binary_search(&id).is_ok()
    }

    /// Hero shown in the detail panel, if any.
    #[must_use]
    pub const fn selected_hero(&self) -> Option<&Hero> {
        match &self.detail {
            DetailPanel::Hero(hero) => Some(hero),
            DetailPanel::Placeholder { .. } => None,
        }
    }
}

/// One hero card in the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroCard {
    pub hero: Hero,

    /// Whether the star is lit for this hero.
    pub is_favorite: bool,

    /// Whether this hero is the one in the detail panel.
    pub is_selected: bool,
}

/// Page navigation state with button labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerInfo {
    /// 1-indexed current page.
    pub current_page: usize,

    /// Number of pages; zero when nothing matches.
    pub page_count: usize,

    /// Size of the filtered collection.
    pub total_items: usize,

    pub has_prev: bool,
    pub has_next: bool,

    /// "Go to page N" label for the previous button, when it applies.
    pub prev_label: Option<String>,

    /// "Go to page N" label for the next button, when it applies.
    pub next_label: Option<String>,
}

/// Detail panel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailPanel {
    /// A hero is selected and visible.
    Hero(Hero),

    /// Nothing to show; `message` explains why.
    Placeholder {
        message: String,
    },
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
