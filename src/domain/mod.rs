//! Domain layer for herodex.
//!
//! This module contains the core domain types, independent of the HTTP client,
//! the async runtime, or any presentation concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`hero`]: Hero record and detail sub-records

pub mod error;
pub mod hero;

pub use error::{HeroDexError, Result};
pub use hero::{Hero, HeroId, Powerstats};
