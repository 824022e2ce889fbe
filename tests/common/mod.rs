//! Shared helpers for the mock-server tests.

#![allow(dead_code)]

use wiremock::{MockServer, Request};
use zendesk_client::{Config, ZendeskClient};

pub const TEST_TOKEN: &str = "test-token-5f2c";

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, ZendeskClient) {
    let server = MockServer::start().await;
    let config = Config::new(server.uri(), "agent@example.com", TEST_TOKEN).unwrap();
    let client = ZendeskClient::new(&config).unwrap();
    (server, client)
}

/// Returns every request the server received, in order.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// Looks up a decoded query parameter on a recorded request.
pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
