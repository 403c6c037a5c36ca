//! Request and response types exchanged between the coordinator and the fetch worker.
//!
//! Every request carries a [`RequestId`] taken from a monotonically increasing
//! sequence. The response echoes it back so the coordinator can discard answers
//! to requests that a newer query has superseded.

use crate::domain::Hero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence tag identifying one catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl RequestId {
    /// First id handed out by a fresh sequence.
    pub const FIRST: Self = Self(1);

    /// Returns this id and advances `self` to the next one.
    pub fn advance(&mut self) -> Self {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fetch the coordinator wants performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Tag echoed back in the response.
    pub request_id: RequestId,

    /// Query the fetch was issued for.
    pub query: String,
}

/// Outcome of a fetch, tagged with the request it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// The catalog was retrieved.
    Loaded {
        request_id: RequestId,
        query: String,
        heroes: Vec<Hero>,
    },

    /// The fetch failed.
    Failed {
        request_id: RequestId,
        query: String,
        /// Human-readable error message.
        message: String,
    },
}

impl FetchResponse {
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        match self {
            Self::Loaded { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Loaded { query, .. } | Self::Failed { query, .. } => query,
        }
    }

    /// Builds the response for `request` from a fetch result.
    #[must_use]
    pub fn from_result(request: FetchRequest, result: crate::Result<Vec<Hero>>) -> Self {
        let FetchRequest { request_id, query } = request;
        match result {
            Ok(heroes) => Self::Loaded {
                request_id,
                query,
                heroes,
            },
            Err(e) => Self::Failed {
                request_id,
                query,
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeroDexError;

    #[test]
    fn request_ids_increase() {
        let mut next = RequestId::FIRST;
        let first = next.advance();
        let second = next.advance();
        assert!(second > first);
        assert_eq!(first.to_string(), "#1");
    }

    #[test]
    fn failed_result_keeps_message() {
        let request = FetchRequest {
            request_id: RequestId(4),
            query: "bat".to_string(),
        };
        let response = FetchResponse::from_result(request, Err(HeroDexError::fetch("offline")));

        assert_eq!(response.request_id(), RequestId(4));
        assert_eq!(response.query(), "bat");
        assert!(matches!(response, FetchResponse::Failed { ref message, .. } if message == "offline"));
    }
}
