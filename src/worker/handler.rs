//! Fetch worker running catalog requests off the presentation loop.
//!
//! Each [`FetchRequest`] is executed on its own tokio task. The tagged
//! [`FetchResponse`] is posted back over an unbounded channel in completion
//! order, which may differ from request order; the coordinator sorts that out
//! by request id.

use crate::catalog::CatalogSource;
use crate::worker::{FetchRequest, FetchResponse};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Dispatches catalog fetches and reports their results.
#[derive(Debug)]
pub struct CatalogWorker<S> {
    source: Arc<S>,
    responses: UnboundedSender<FetchResponse>,
}

impl<S: CatalogSource> CatalogWorker<S> {
    /// Creates a worker and the receiving end of its response channel.
    #[must_use]
    pub fn new(source: Arc<S>) -> (Self, UnboundedReceiver<FetchResponse>) {
        let (responses, receiver) = mpsc::unbounded_channel();
        (Self { source, responses }, receiver)
    }

    /// Runs `request` on a new task.
    ///
    /// Must be called from within a tokio runtime. The response is dropped
    /// silently if the receiver is gone.
    pub fn dispatch(&self, request: FetchRequest) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let responses = self.responses.clone();
        let span = tracing::debug_span!(
            "catalog_fetch",
            request_id = %request.request_id,
            query = %request.query
        );

        tokio::spawn(
            async move {
                let result = source.fetch(&request.query).await;
                let response = FetchResponse::from_result(request, result);

                if responses.send(response).is_err() {
                    tracing::debug!("response receiver dropped, discarding fetch result");
                }
            }
            .instrument(span),
        )
    }
}
