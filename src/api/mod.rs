// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Discovery API seam
//!
//! The like/pass/super-like requests are performed by an external backend.
//! This module defines the request shapes and the `DiscoveryApi` trait the
//! deck talks to, plus two in-process implementations:
//!
//! - **DryRunApi**: Accepts everything, never sends anything, never matches
//! - **ScriptedApi**: Matches or fails chosen profiles and records requests
//!
//! # Example
//! ```
//! use swipe_deck::api::{DecisionRequest, DiscoveryApi, DryRunApi};
//! use swipe_deck::core::Decision;
//! use swipe_deck::session::Session;
//!
//! let api = DryRunApi;
//! let session = Session::signed_in("me", "token");
//! let request = DecisionRequest::new("p-42", Decision::Like);
//!
//! assert_eq!(request.endpoint(), "/api/likes");
//! assert!(!api.submit(&session, &request).unwrap().is_match);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

use crate::core::Decision;
use crate::session::Session;

/// Errors reported by a discovery backend
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// No signed-in session
    #[error("Not signed in")]
    Unauthorized,

    /// Request never reached the backend
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with an error status
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// One decision to confirm with the backend
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DecisionRequest {
    pub profile_id: String,
    pub decision: Decision,
}

impl DecisionRequest {
    pub fn new(profile_id: &str, decision: Decision) -> Self {
        Self {
            profile_id: profile_id.to_string(),
            decision,
        }
    }

    /// REST endpoint the request is POSTed to
    pub fn endpoint(&self) -> &'static str {
        match self.decision {
            Decision::Like => "/api/likes",
            Decision::Pass => "/api/passes",
            Decision::SuperLike => "/api/payments/super-like",
        }
    }

    /// JSON body sent to `endpoint()`
    pub fn body(&self) -> Value {
        match self.decision {
            Decision::Like => json!({ "userId": self.profile_id, "type": "regular" }),
            Decision::Pass | Decision::SuperLike => json!({ "userId": self.profile_id }),
        }
    }
}

/// Backend answer to a confirmed decision
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DecisionOutcome {
    /// Both sides liked each other
    #[serde(rename = "isMatch", default)]
    pub is_match: bool,
}

/// Confirms committed decisions with a backend
pub trait DiscoveryApi {
    fn submit(&self, session: &Session, request: &DecisionRequest) -> Result<DecisionOutcome, ApiError>;
}

/// Validation only - NEVER talks to a backend
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunApi;

impl DiscoveryApi for DryRunApi {
    fn submit(&self, session: &Session, request: &DecisionRequest) -> Result<DecisionOutcome, ApiError> {
        debug!(user_id = ?session.user_id(), endpoint = request.endpoint(), body = %request.body(),
            "dry run: request not sent");
        Ok(DecisionOutcome::default())
    }
}

/// Canned backend for tests and simulations
///
/// Like a real backend it refuses requests from a session without a token.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    matches: HashSet<String>,
    failures: HashMap<String, ApiError>,
    requests: RefCell<Vec<DecisionRequest>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Likes and super-likes of `profile_id` come back as a match
    pub fn with_match(mut self, profile_id: &str) -> Self {
        self.matches.insert(profile_id.to_string());
        self
    }

    /// Every request about `profile_id` fails with `error`
    pub fn with_failure(mut self, profile_id: &str, error: ApiError) -> Self {
        self.failures.insert(profile_id.to_string(), error);
        self
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<DecisionRequest> {
        self.requests.borrow().clone()
    }
}

impl DiscoveryApi for ScriptedApi {
    fn submit(&self, session: &Session, request: &DecisionRequest) -> Result<DecisionOutcome, ApiError> {
        if session.token().is_none() {
            return Err(ApiError::Unauthorized);
        }
        self.requests.borrow_mut().push(request.clone());

        if let Some(error) = self.failures.get(&request.profile_id) {
            return Err(error.clone());
        }

        let is_match = request.decision != Decision::Pass && self.matches.contains(&request.profile_id);
        Ok(DecisionOutcome { is_match })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(DecisionRequest::new("p", Decision::Like).endpoint(), "/api/likes");
        assert_eq!(DecisionRequest::new("p", Decision::Pass).endpoint(), "/api/passes");
        assert_eq!(
            DecisionRequest::new("p", Decision::SuperLike).endpoint(),
            "/api/payments/super-like"
        );
    }

    #[test]
    fn test_like_body_is_regular() {
        let body = DecisionRequest::new("p-7", Decision::Like).body();
        assert_eq!(body["userId"], "p-7");
        assert_eq!(body["type"], "regular");

        let body = DecisionRequest::new("p-7", Decision::Pass).body();
        assert!(body.get("type").is_none());
    }

    #[test]
    fn test_outcome_parses_backend_json() {
        let outcome: DecisionOutcome = serde_json::from_str(r#"{"isMatch": true}"#).unwrap();
        assert!(outcome.is_match);

        let outcome: DecisionOutcome = serde_json::from_str("{}").unwrap();
        assert!(!outcome.is_match, "Missing flag means no match");
    }

    #[test]
    fn test_scripted_api_matches_and_failures() {
        let api = ScriptedApi::new()
            .with_match("p-1")
            .with_failure("p-2", ApiError::Network("offline".to_string()));
        let session = Session::signed_in("me", "token");

        let liked = api.submit(&session, &DecisionRequest::new("p-1", Decision::Like));
        assert_eq!(liked, Ok(DecisionOutcome { is_match: true }));

        let passed = api.submit(&session, &DecisionRequest::new("p-1", Decision::Pass));
        assert_eq!(passed, Ok(DecisionOutcome { is_match: false }), "Passing never matches");

        let failed = api.submit(&session, &DecisionRequest::new("p-2", Decision::Like));
        assert!(matches!(failed, Err(ApiError::Network(_))));

        assert_eq!(api.requests().len(), 3);
    }

    #[test]
    fn test_scripted_api_requires_token() {
        let api = ScriptedApi::new().with_match("p-1");
        let request = DecisionRequest::new("p-1", Decision::Like);

        let result = api.submit(&Session::new(), &request);
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(api.requests().is_empty(), "Refused requests are not recorded");
    }
}
