//! Background fetch execution.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types tagged with [`RequestId`]
//! - `handler`: [`CatalogWorker`], which runs each fetch on a tokio task

pub mod handler;
pub mod messages;

pub use handler::CatalogWorker;
pub use messages::{FetchRequest, FetchResponse, RequestId};
