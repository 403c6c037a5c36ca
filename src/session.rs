//! Presentation-facing handle over the view core.
//!
//! [`Session`] bundles a [`ViewCoordinator`], a [`CatalogWorker`] and the worker's
//! response channel. The presentation layer calls the callback methods, awaits
//! [`Session::next_response`] alongside its own input, and re-reads
//! [`Session::render_model`] whenever a call reports a change.
//!
//! All mutation goes through `&mut self`, so the coordinator has a single writer
//! even though fetches complete on other tasks.

use crate::app::{handle_event, Action, Event, ViewCoordinator};
use crate::catalog::CatalogSource;
use crate::domain::HeroId;
use crate::ui::RenderModel;
use crate::worker::{CatalogWorker, FetchResponse};
use crate::Config;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Interactive hero-search session.
#[derive(Debug)]
pub struct Session<S> {
    coordinator: ViewCoordinator,
    worker: CatalogWorker<S>,
    responses: UnboundedReceiver<FetchResponse>,
}

impl<S: CatalogSource> Session<S> {
    /// Creates an idle session fetching from `source`.
    #[must_use]
    pub fn new(config: &Config, source: S) -> Self {
        Self::with_shared_source(config, Arc::new(source))
    }

    /// Creates an idle session over a source shared with other owners.
    #[must_use]
    pub fn with_shared_source(config: &Config, source: Arc<S>) -> Self {
        let (worker, responses) = CatalogWorker::new(source);
        Self {
            coordinator: ViewCoordinator::new(config),
            worker,
            responses,
        }
    }

    /// Read access to the underlying coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &ViewCoordinator {
        &self.coordinator
    }

    /// Current render model.
    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        self.coordinator.render_model()
    }

    /// Handles one event and runs the resulting actions.
    ///
    /// Returns whether the render model changed. Fetch actions are spawned, so
    /// this must be called from within a tokio runtime.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.coordinator, event);
        for action in actions {
            self.execute_action(action);
        }
        should_render
    }

    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(Event::SetQuery(text.into()))
    }

    pub fn next_page(&mut self) -> bool {
        self.dispatch(Event::NextPage)
    }

    pub fn prev_page(&mut self) -> bool {
        self.dispatch(Event::PrevPage)
    }

    pub fn toggle_favorite(&mut self, id: HeroId) -> bool {
        self.dispatch(Event::ToggleFavorite(id))
    }

    pub fn select_for_detail(&mut self, id: HeroId) -> bool {
        self.dispatch(Event::SelectForDetail(id))
    }

    pub fn clear_selection(&mut self) -> bool {
        self.dispatch(Event::ClearSelection)
    }

    /// Waits for the next fetch to complete and applies it.
    ///
    /// Returns `Some(true)` if the render model changed, `Some(false)` if the
    /// response was superseded. The session keeps its own sender alive, so this
    /// only returns `None` if the channel is closed from elsewhere.
    pub async fn next_response(&mut self) -> Option<bool> {
        let response = self.responses.recv().await?;
        Some(self.dispatch(Event::CatalogResponse(response)))
    }

    /// Applies every response that has already arrived, without waiting.
    ///
    /// Returns whether any of them changed the render model.
    pub fn drain_responses(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.responses.try_recv() {
            changed |= self.dispatch(Event::CatalogResponse(response));
        }
        changed
    }

    fn execute_action(&self, action: Action) {
        match action {
            Action::FetchCatalog(request) => {
                tracing::debug!(request_id = %request.request_id, "dispatching catalog fetch");
                // Completion is observed through the response channel.
                drop(self.worker.dispatch(request));
            }
        }
    }
}
