//! # Mock Transport & Testing Guide
//!
//! The `MockGraphQLClient` implements [`GraphQLClient`] entirely in-memory. Tests queue the
//! responses the API would give, run an adapter through a real [`ResourceClient`], then inspect
//! the documents that were rendered and sent.
//!
//! ## When to use the Mock vs a real endpoint
//!
//! | Feature | MockGraphQLClient | Real endpoint |
//! |---------|-------------------|---------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Determinism** | 100% Deterministic | Subject to eventual consistency |
//! | **Error Injection** | Easy (`return_err`, error payloads) | Hard |
//! | **Use Case** | Testing adapters and the action cycle | Acceptance testing |
//!
//! ## Example
//!
//! ```rust
//! use destination_adapter::destination::{Destination, DestinationPayload};
//! use destination_adapter::framework::mock::MockGraphQLClient;
//! use destination_adapter::framework::{ClientConfig, ResourceClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Setup expectations
//!     let mut mock = MockGraphQLClient::new();
//!     mock.expect_execute()
//!         .containing("aiNotificationsCreateDestination")
//!         .return_ok(json!({
//!             "aiNotificationsCreateDestination": {
//!                 "destination": { "id": "d-1" },
//!                 "error": null
//!             }
//!         }));
//!
//!     // 2. Drive an adapter through the real client
//!     let client = ResourceClient::new(mock.client(), ClientConfig::new(1));
//!     let mut payload = DestinationPayload::new(Destination {
//!         fragment: Some("destination: {name: \"d1\"}".into()),
//!         ..Default::default()
//!     });
//!     let id = client.create(&mut payload).await.unwrap();
//!     assert_eq!(id, "d-1");
//!
//!     // 3. Inspect what was sent
//!     assert!(mock.documents()[0].contains("accountId: 1"));
//!     mock.verify();
//! }
//! ```
//!
//! [`ResourceClient`]: crate::framework::ResourceClient

use crate::framework::client::GraphQLClient;
use crate::framework::error::FrameworkError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation {
    contains: Option<String>,
    response: Result<Value, FrameworkError>,
}

/// A mock GraphQL transport that answers from a queue of expectations.
///
/// Clones share the same queue and document log, so a clone can be handed to a
/// [`ResourceClient`](crate::framework::ResourceClient) while the test keeps the original.
#[derive(Clone, Default)]
pub struct MockGraphQLClient {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    documents: Arc<Mutex<Vec<String>>>,
}

impl MockGraphQLClient {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle for use by the code under test.
    pub fn client(&self) -> Self {
        self.clone()
    }

    /// Expects one more `execute` call.
    pub fn expect_execute(&mut self) -> ExecuteExpectationBuilder {
        ExecuteExpectationBuilder {
            contains: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every document executed so far, in order.
    pub fn documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl GraphQLClient for MockGraphQLClient {
    async fn execute(&self, document: &str) -> Result<Value, FrameworkError> {
        self.documents.lock().unwrap().push(document.to_string());

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation { contains, response }) => {
                if let Some(fragment) = contains {
                    if !document.contains(&fragment) {
                        panic!("Expected document containing {fragment:?}, got:\n{document}");
                    }
                }
                response
            }
            None => panic!("Unexpected request:\n{document}"),
        }
    }
}

/// Builder for `execute` expectations.
pub struct ExecuteExpectationBuilder {
    contains: Option<String>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExecuteExpectationBuilder {
    /// Requires the rendered document to contain `fragment`.
    pub fn containing(mut self, fragment: impl Into<String>) -> Self {
        self.contains = Some(fragment.into());
        self
    }

    /// Sets the expectation to return `data` as the decoded response body.
    pub fn return_ok(self, data: Value) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            contains: self.contains,
            response: Ok(data),
        });
    }

    /// Sets the expectation to fail at the transport level.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            contains: self.contains,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mut mock = MockGraphQLClient::new();
        mock.expect_execute().return_ok(json!({ "n": 1 }));
        mock.expect_execute()
            .return_err(FrameworkError::Transport("timeout".into()));

        let client = mock.client();
        assert_eq!(client.execute("first").await.unwrap(), json!({ "n": 1 }));
        assert_eq!(
            client.execute("second").await,
            Err(FrameworkError::Transport("timeout".into()))
        );

        assert_eq!(mock.documents(), vec!["first", "second"]);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Expected document containing")]
    async fn test_mock_checks_document() {
        let mut mock = MockGraphQLClient::new();
        mock.expect_execute().containing("mutation").return_ok(json!({}));
        let _ = mock.client().execute("{ actor { user { id } } }").await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_unmet() {
        let mut mock = MockGraphQLClient::new();
        mock.expect_execute().return_ok(json!({}));
        mock.verify();
    }
}
