//! Side effects produced by the event handler.
//!
//! The handler stays synchronous and pure with respect to I/O: when an event calls
//! for network work it returns an [`Action`] and the runtime (see
//! [`Session`](crate::Session)) carries it out.

use crate::worker::FetchRequest;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the hero catalog for the tagged request.
    ///
    /// The response must be fed back as
    /// [`Event::CatalogResponse`](crate::app::Event::CatalogResponse).
    FetchCatalog(FetchRequest),
}
