//! Catalog access: the seam between the view core and the remote hero service.
//!
//! The core only depends on [`CatalogSource`]. Production code uses
//! [`HttpCatalog`]; tests plug in in-memory sources.
//!
//! # Contract
//!
//! - Called only for a non-empty query. An empty query is handled locally by the
//!   coordinator and never reaches a source.
//! - One request per call: no retry, no caching, no de-duplication.
//! - Success yields the complete collection, which replaces the previous one.
//! - Failure yields [`HeroDexError::FetchFailed`](crate::HeroDexError::FetchFailed)
//!   with a human-readable message.
//!
//! # Modules
//!
//! - [`http`]: reqwest-backed implementation against `<base>/all.json`
//! - [`records`]: Wire records for the JSON payload

pub mod http;
pub mod records;

pub use http::HttpCatalog;
pub use records::HeroRecord;

use crate::domain::{Hero, Result};
use futures_util::future::BoxFuture;

/// Something that can produce the hero collection for a query.
///
/// The returned future must be `Send` so the worker can run it on a spawned task.
/// The remote service has no server-side filtering, so implementations are free to
/// ignore `query` and return the whole catalog; narrowing happens in
/// [`filter_heroes`](crate::app::filter::filter_heroes).
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetches the collection for `query`.
    ///
    /// # Errors
    ///
    /// Returns `FetchFailed` when the collection cannot be retrieved.
    fn fetch<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<Hero>>>;
}
