//! Event handling and state transition logic.
//!
//! This module implements the handler that processes user actions and fetch
//! completions, translating them into coordinator mutations and side-effect
//! actions.
//!
//! # Architecture
//!
//! 1. Events arrive from the presentation layer or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`ViewCoordinator`] methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use herodex::app::{handle_event, Action, Event, ViewCoordinator};
//!
//! let mut coordinator = ViewCoordinator::default();
//! let (should_render, actions) = handle_event(&mut coordinator, Event::SetQuery("bat".into()));
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::FetchCatalog(_)]));
//! ```

use super::actions::Action;
use super::state::ViewCoordinator;
use crate::domain::HeroId;
use crate::worker::FetchResponse;

/// Events triggered by user input or fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search text (fired on every keystroke).
    SetQuery(String),

    /// Moves to the next page, if any.
    NextPage,

    /// Moves to the previous page, if any.
    PrevPage,

    /// Flips the favorite flag of one hero.
    ToggleFavorite(HeroId),

    /// Shows one hero in the detail panel.
    SelectForDetail(HeroId),

    /// Empties the detail panel.
    ClearSelection,

    /// A catalog fetch completed.
    ///
    /// Responses to superseded requests are discarded without re-rendering.
    CatalogResponse(FetchResponse),
}

/// Processes an event, mutates the coordinator, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the render model changed, and the side
/// effects to run in order.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[must_use]
pub fn handle_event(state: &mut ViewCoordinator, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(&event)).entered();

    match event {
        Event::SetQuery(text) => {
            if text == state.query() {
                return (false, vec![]);
            }
            let actions = state
                .set_query(&text)
                .map(Action::FetchCatalog)
                .into_iter()
                .collect();
            (true, actions)
        }
        Event::NextPage => (state.next_page(), vec![]),
        Event::PrevPage => (state.prev_page(), vec![]),
        Event::ToggleFavorite(id) => {
            state.toggle_favorite(id);
            (true, vec![])
        }
        Event::SelectForDetail(id) => {
            let already = state.selected_hero().is_some_and(|hero| hero.id == id);
            (state.select_for_detail(id) && !already, vec![])
        }
        Event::ClearSelection => (state.clear_selection(), vec![]),
        Event::CatalogResponse(response) => (state.apply_response(response), vec![]),
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SetQuery(_) => "SetQuery",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::ToggleFavorite(_) => "ToggleFavorite",
        Event::SelectForDetail(_) => "SelectForDetail",
        Event::ClearSelection => "ClearSelection",
        Event::CatalogResponse(_) => "CatalogResponse",
    }
}
