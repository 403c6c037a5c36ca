//! View coordination: query, fetched collection, paging, favorites and selection.
//!
//! This module defines [`ViewCoordinator`], the single owner of all transient view
//! state. It composes the filter, paginator, favorite tracker and selection state,
//! decides when a catalog fetch is needed, and derives the
//! [`RenderModel`](crate::ui::RenderModel) on demand.
//!
//! # Data Flow
//!
//! ```text
//! query ─▶ fetch (worker) ─▶ collection ─▶ filter_heroes ─▶ filtered ─▶ Pagination ─▶ page
//!                                                               ▲
//!                        favorite toggles / detail selection ───┘ (no re-fetch)
//! ```
//!
//! # Stale Responses
//!
//! Each fetch is tagged with a fresh [`RequestId`]. Only the response carrying the id
//! of the latest request is applied, so a slow answer for an old query can never
//! overwrite the results of a newer one.
//!
//! # Example
//!
//! ```rust
//! use herodex::{Config, Hero, ViewCoordinator};
//! use herodex::worker::FetchResponse;
//!
//! let mut coordinator = ViewCoordinator::new(&Config::default());
//! let request = coordinator.set_query("spider").expect("non-empty query fetches");
//!
//! let heroes = vec![Hero::new(620, "Spider-Man", Some("Marvel Comics"), "")];
//! coordinator.apply_response(FetchResponse::from_result(request, Ok(heroes)));
//!
//! assert_eq!(coordinator.filtered().len(), 1);
//! ```

use super::favorites::FavoriteSet;
use super::filter::filter_heroes;
use super::modes::LoadState;
use super::pagination::Pagination;
use super::selection::SelectionState;
use crate::domain::{Hero, HeroId};
use crate::ui::viewmodel::{
    DetailPanel, EmptyState, HeroCard, PagerInfo, RenderModel, NO_SELECTION, SEARCH_PROMPT,
    SELECT_PROMPT,
};
use crate::worker::{FetchRequest, FetchResponse, RequestId};
use crate::Config;

/// Central view state container.
///
/// Mutated only through its methods, which keep these invariants:
///
/// - `Idle` means blank query, empty collection, no error, page 1.
/// - `filtered` is always `filter_heroes(collection, query)`.
/// - The page cursor is clamped to the filtered collection and reset to 1 on
///   every query change.
/// - Favorites and selection survive query changes, including a return to `Idle`.
#[derive(Debug, Clone)]
pub struct ViewCoordinator {
    query: String,
    load_state: LoadState,

    /// Last successfully fetched collection. Replaced wholesale, never merged.
    collection: Vec<Hero>,

    /// `collection` narrowed by `query`.
    filtered: Vec<Hero>,

    /// Message of the last failed fetch. Cleared by a success or by going idle.
    error: Option<String>,

    pagination: Pagination,
    favorites: FavoriteSet,
    selection: SelectionState,

    /// Next tag to hand out.
    next_request: RequestId,
}

impl ViewCoordinator {
    /// Creates an idle coordinator using the configured page size.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_page_size(config.page_size)
    }

    /// Creates an idle coordinator with an explicit page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: String::new(),
            load_state: LoadState::Idle,
            collection: Vec::new(),
            filtered: Vec::new(),
            error: None,
            pagination: Pagination::new(page_size),
            favorites: FavoriteSet::new(),
            selection: SelectionState::new(),
            next_request: RequestId::FIRST,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub fn collection(&self) -> &[Hero] {
        &self.collection
    }

    #[must_use]
    pub fn filtered(&self) -> &[Hero] {
        &self.filtered
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: HeroId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Heroes on the current page.
    #[must_use]
    pub fn current_page(&self) -> &[Hero] {
        self.pagination.slice(&self.filtered)
    }

    /// Hero in the detail view, resolved against the filtered collection.
    #[must_use]
    pub fn selected_hero(&self) -> Option<&Hero> {
        self.selection.current(&self.filtered)
    }

    /// Replaces the search text.
    ///
    /// - Unchanged text does nothing.
    /// - Blank text enters `Idle` and never fetches.
    /// - Any other text enters `Loading`, resets to page 1 and returns the fetch to
    ///   perform. The previous collection stays listed, narrowed by the new text,
    ///   until the response arrives.
    pub fn set_query(&mut self, text: &str) -> Option<FetchRequest> {
        if text == self.query {
            return None;
        }

        text.clone_into(&mut self.query);

        if self.query.trim().is_empty() {
            self.enter_idle();
            return None;
        }

        let request_id = self.next_request.advance();
        self.load_state = LoadState::Loading { request_id };
        self.pagination.reset();
        self.refilter();

        tracing::debug!(request_id = %request_id, query = %self.query, "query changed, fetch requested");

        Some(FetchRequest {
            request_id,
            query: self.query.clone(),
        })
    }

    /// Applies a fetch response.
    ///
    /// Returns `false` without touching any state if the response does not answer
    /// the pending request (superseded, or the query went blank meanwhile).
    pub fn apply_response(&mut self, response: FetchResponse) -> bool {
        let Some(pending) = self.load_state.pending_request() else {
            tracing::debug!(request_id = %response.request_id(), "no fetch pending, discarding response");
            return false;
        };

        if response.request_id() != pending {
            tracing::debug!(
                request_id = %response.request_id(),
                pending = %pending,
                query = %response.query(),
                "discarding superseded response"
            );
            return false;
        }

        match response {
            FetchResponse::Loaded { heroes, .. } => {
                tracing::debug!(hero_count = heroes.len(), "catalog loaded");
                self.collection = heroes;
                self.error = None;
                self.load_state = LoadState::Ready;
                self.refilter();
            }
            FetchResponse::Failed { message, .. } => {
                tracing::warn!(error = %message, query = %self.query, "catalog fetch failed");
                self.error = Some(message);
                self.load_state = LoadState::Failed;
            }
        }

        true
    }

    /// Moves to the next page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pagination.next_page()
    }

    /// Moves to the previous page. Returns `false` on page 1.
    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev_page()
    }

    /// Flips the favorite flag of `id` and returns the new status.
    pub fn toggle_favorite(&mut self, id: HeroId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        tracing::debug!(hero_id = id, favorite = now_favorite, "favorite toggled");
        now_favorite
    }

    /// Shows `id` in the detail view if it is in the filtered collection.
    ///
    /// Returns `false` and leaves the selection unchanged otherwise.
    pub fn select_for_detail(&mut self, id: HeroId) -> bool {
        let selected = self.selection.select(id, &self.filtered);
        if !selected {
            tracing::debug!(hero_id = id, "hero not in filtered collection, selection unchanged");
        }
        selected
    }

    /// Clears the detail selection. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    /// Derives the render model from the current state.
    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        let page = self.current_page();
        let selected_id = self.selection.selected_id();

        let cards = page
            .iter()
            .map(|hero| HeroCard {
                hero: hero.clone(),
                is_favorite: self.favorites.is_favorite(hero.id),
                is_selected: selected_id == Some(hero.id),
            })
            .collect();

        let detail = match self.selected_hero() {
            Some(hero) => DetailPanel::Hero(hero.clone()),
            None if page.is_empty() => DetailPanel::Placeholder {
                message: NO_SELECTION.to_string(),
            },
            None => DetailPanel::Placeholder {
                message: SELECT_PROMPT.to_string(),
            },
        };

        RenderModel {
            query: self.query.clone(),
            load_state: self.load_state,
            loading: self.load_state.is_loading(),
            error: self.error.clone(),
            cards,
            pager: self.compute_pager(),
            detail,
            empty_state: self.compute_empty_state(),
            favorites: self.favorites.sorted_ids(),
        }
    }

    /// Idle invariants: empty collection, no error, page 1, nothing pending.
    fn enter_idle(&mut self) {
        tracing::debug!(previous = ?self.load_state, "query cleared, entering idle");
        self.load_state = LoadState::Idle;
        self.collection.clear();
        self.filtered.clear();
        self.error = None;
        self.pagination.reset();
        self.pagination.set_total_items(0);
    }

    fn refilter(&mut self) {
        self.filtered = filter_heroes(&self.collection, &self.query);
        self.pagination.set_total_items(self.filtered.len());
    }

    fn compute_pager(&self) -> PagerInfo {
        let p = &self.pagination;
        PagerInfo {
            current_page: p.current_page(),
            page_count: p.page_count(),
            total_items: p.total_items(),
            has_prev: p.has_prev(),
            has_next: p.has_next(),
            prev_label: p
                .has_prev()
                .then(|| format!("Go to page {}", p.current_page() - 1)),
            next_label: p
                .has_next()
                .then(|| format!("Go to page {}", p.current_page() + 1)),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }

        match self.load_state {
            LoadState::Idle => Some(EmptyState {
                message: SEARCH_PROMPT.to_string(),
                subtitle: "Try \"Spider\" or \"Marvel\"".to_string(),
            }),
            LoadState::Loading { .. } => None,
            LoadState::Ready | LoadState::Failed => Some(EmptyState {
                message: format!("No heroes match \"{}\"", self.query.trim()),
                subtitle: SEARCH_PROMPT.to_string(),
            }),
        }
    }
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Spider-Man, Batman, Superman, Spider-Woman plus eleven Marvel fillers.
    fn catalog() -> Vec<Hero> {
        let mut heroes = vec![
            Hero::new(620, "Spider-Man", Some("Marvel Comics"), ""),
            Hero::new(70, "Batman", Some("DC Comics"), ""),
            Hero::new(644, "Superman", Some("DC Comics"), ""),
            Hero::new(623, "Spider-Woman", Some("Marvel Comics"), ""),
        ];
        heroes.extend((1..=11).map(|i| Hero::new(1000 + i, format!("Filler {i}"), Some("Marvel Comics"), "")));
        heroes
    }

    fn loaded(coordinator: &mut ViewCoordinator, query: &str) {
        let request = coordinator.set_query(query).unwrap();
        assert!(coordinator.apply_response(FetchResponse::from_result(request, Ok(catalog()))));
    }

    #[test]
    fn starts_idle_with_search_prompt() {
        let coordinator = ViewCoordinator::with_page_size(6);
        let model = coordinator.render_model();

        assert_eq!(coordinator.load_state(), LoadState::Idle);
        assert!(model.cards.is_empty());
        assert!(!model.loading);
        assert_eq!(model.empty_state.map(|e| e.message), Some(SEARCH_PROMPT.to_string()));
        assert_eq!(model.detail, DetailPanel::Placeholder { message: NO_SELECTION.to_string() });
    }

    #[test]
    fn non_empty_query_requests_fetch() {
        let mut coordinator = ViewCoordinator::with_page_size(6);

        let request = coordinator.set_query("s").unwrap();

        assert_eq!(request.query, "s");
        assert_eq!(coordinator.load_state(), LoadState::Loading { request_id: request.request_id });
        assert!(coordinator.render_model().loading);
    }

    #[test]
    fn spider_and_marvel_scenarios() {
        let mut coordinator = ViewCoordinator::with_page_size(6);

        loaded(&mut coordinator, "Spider");
        assert_eq!(coordinator.load_state(), LoadState::Ready);
        assert!(coordinator.filtered().iter().any(|h| h.name == "Spider-Man"));

        loaded(&mut coordinator, "marvel");
        assert!(coordinator
            .filtered()
            .iter()
            .all(|h| h.publisher.as_deref() == Some("Marvel Comics")));
        assert_eq!(coordinator.filtered().len(), 13);
    }

    #[test]
    fn thirteen_results_page_through_three_pages() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "marvel");

        let first = coordinator.render_model();
        assert_eq!(first.pager.page_count, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.pager.next_label.as_deref(), Some("Go to page 2"));
        assert!(first.pager.prev_label.is_none());

        assert!(coordinator.next_page());
        assert!(coordinator.next_page());
        assert!(!coordinator.next_page());

        let last = coordinator.render_model();
        assert_eq!(last.cards.len(), 1);
        assert!(!last.has_next());
        assert_eq!(last.pager.prev_label.as_deref(), Some("Go to page 2"));
    }

    #[test]
    fn query_change_resets_to_first_page() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "marvel");
        coordinator.next_page();
        coordinator.next_page();
        assert_eq!(coordinator.pagination().current_page(), 3);

        coordinator.set_query("marvel comics");
        assert_eq!(coordinator.pagination().current_page(), 1);
    }

    #[test]
    fn blank_query_enters_idle_and_keeps_favorites_and_selection() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "spider");
        coordinator.toggle_favorite(620);
        assert!(coordinator.select_for_detail(620));

        assert!(coordinator.set_query("").is_none());

        assert_eq!(coordinator.load_state(), LoadState::Idle);
        assert!(coordinator.collection().is_empty());
        assert!(coordinator.error().is_none());
        assert_eq!(coordinator.pagination().current_page(), 1);
        assert!(coordinator.is_favorite(620));

        loaded(&mut coordinator, "spider");
        assert_eq!(coordinator.selected_hero().map(|h| h.id), Some(620));
    }

    #[test]
    fn whitespace_query_is_idle() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        assert!(coordinator.set_query("   ").is_none());
        assert_eq!(coordinator.load_state(), LoadState::Idle);
    }

    #[test]
    fn unchanged_query_does_not_refetch() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        assert!(coordinator.set_query("bat").is_some());
        assert!(coordinator.set_query("bat").is_none());
    }

    #[test]
    fn failure_retains_previous_collection() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "spider");

        let request = coordinator.set_query("spider-").unwrap();
        let failed = FetchResponse::Failed {
            request_id: request.request_id,
            query: request.query,
            message: "could not reach the hero catalog".to_string(),
        };
        assert!(coordinator.apply_response(failed));

        assert_eq!(coordinator.load_state(), LoadState::Failed);
        assert_eq!(coordinator.error(), Some("could not reach the hero catalog"));
        assert_eq!(coordinator.collection().len(), catalog().len());

        let model = coordinator.render_model();
        assert_eq!(model.error.as_deref(), Some("could not reach the hero catalog"));
        assert_eq!(model.cards.len(), 2);

        loaded(&mut coordinator, "bat");
        assert!(coordinator.error().is_none());
        assert_eq!(coordinator.load_state(), LoadState::Ready);
    }

    #[test]
    fn clearing_query_after_failure_enters_idle_without_error() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "marvel");
        coordinator.next_page();

        let request = coordinator.set_query("marvel c").unwrap();
        coordinator.next_page();
        let failed = FetchResponse::Failed {
            request_id: request.request_id,
            query: request.query,
            message: "something went wrong! could not fetch data (HTTP 503)".to_string(),
        };
        assert!(coordinator.apply_response(failed));
        assert_eq!(coordinator.load_state(), LoadState::Failed);
        assert!(coordinator.error().is_some());

        assert!(coordinator.set_query("").is_none());

        assert_eq!(coordinator.load_state(), LoadState::Idle);
        assert!(coordinator.error().is_none());
        assert!(coordinator.collection().is_empty());
        assert!(coordinator.filtered().is_empty());
        assert_eq!(coordinator.pagination().current_page(), 1);

        let model = coordinator.render_model();
        assert!(model.error.is_none());
        assert_eq!(model.empty_state.map(|e| e.message), Some(SEARCH_PROMPT.to_string()));
    }

    #[test]
    fn late_response_for_superseded_query_is_discarded() {
        let mut coordinator = ViewCoordinator::with_page_size(6);

        let bat = coordinator.set_query("bat").unwrap();
        let superman = coordinator.set_query("superman").unwrap();

        let superman_heroes = vec![Hero::new(644, "Superman", Some("DC Comics"), "")];
        let bat_heroes = vec![Hero::new(70, "Batman", Some("DC Comics"), "")];

        assert!(coordinator.apply_response(FetchResponse::from_result(superman, Ok(superman_heroes))));
        assert!(!coordinator.apply_response(FetchResponse::from_result(bat, Ok(bat_heroes))));

        let names: Vec<_> = coordinator.filtered().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Superman"]);
        assert_eq!(coordinator.load_state(), LoadState::Ready);
    }

    #[test]
    fn response_after_going_idle_is_discarded() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        let request = coordinator.set_query("bat").unwrap();
        coordinator.set_query("");

        assert!(!coordinator.apply_response(FetchResponse::from_result(request, Ok(catalog()))));
        assert!(coordinator.collection().is_empty());
        assert_eq!(coordinator.load_state(), LoadState::Idle);
    }

    #[test]
    fn selecting_absent_hero_leaves_selection_unchanged() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "spider");

        assert!(!coordinator.select_for_detail(70));
        assert!(coordinator.selected_hero().is_none());

        assert!(coordinator.select_for_detail(623));
        assert!(!coordinator.select_for_detail(70));
        assert_eq!(coordinator.selected_hero().map(|h| h.id), Some(623));
    }

    #[test]
    fn selection_hidden_when_hero_filtered_out() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "spider");
        coordinator.select_for_detail(620);

        loaded(&mut coordinator, "batman");
        let model = coordinator.render_model();
        assert!(model.selected_hero().is_none());
        assert_eq!(model.detail, DetailPanel::Placeholder { message: SELECT_PROMPT.to_string() });
    }

    #[test]
    fn favorites_and_selection_do_not_change_load_state() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        let request = coordinator.set_query("spider").unwrap();
        let loading = coordinator.load_state();

        coordinator.toggle_favorite(620);
        coordinator.select_for_detail(620);
        assert_eq!(coordinator.load_state(), loading);

        assert!(coordinator.apply_response(FetchResponse::from_result(request, Ok(catalog()))));
        coordinator.toggle_favorite(623);
        assert_eq!(coordinator.load_state(), LoadState::Ready);
    }

    #[test]
    fn render_model_marks_favorites_and_selection() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "spider");
        coordinator.toggle_favorite(623);
        coordinator.select_for_detail(620);

        let model = coordinator.render_model();
        let spider_man = model.cards.iter().find(|c| c.hero.id == 620).unwrap();
        let spider_woman = model.cards.iter().find(|c| c.hero.id == 623).unwrap();

        assert!(!spider_man.is_favorite && spider_man.is_selected);
        assert!(spider_woman.is_favorite && !spider_woman.is_selected);
        assert!(model.is_favorite(623));
        assert!(!model.is_favorite(620));
        assert_eq!(model.selected_hero().map(|h| h.id), Some(620));
    }

    #[test]
    fn no_match_shows_empty_state() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "zzz");

        let model = coordinator.render_model();
        assert!(model.cards.is_empty());
        assert_eq!(model.pager.page_count, 0);
        assert_eq!(model.empty_state.map(|e| e.message), Some("No heroes match \"zzz\"".to_string()));
    }

    #[test]
    fn paging_over_stale_results_is_clamped_when_response_arrives() {
        let mut coordinator = ViewCoordinator::with_page_size(6);
        loaded(&mut coordinator, "marvel");

        let request = coordinator.set_query("a").unwrap();
        coordinator.next_page();
        coordinator.next_page();
        assert_eq!(coordinator.pagination().current_page(), 3);

        let few = vec![Hero::new(70, "Batman", Some("DC Comics"), "")];
        coordinator.apply_response(FetchResponse::from_result(request, Ok(few)));
        assert_eq!(coordinator.pagination().current_page(), 1);
        assert_eq!(coordinator.current_page().len(), 1);
    }
}
