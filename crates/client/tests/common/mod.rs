//! Common test utilities for integration tests.
//!
//! Re-exports the fixture loader and the types most tests need so test
//! files can start with `use common::*;`.

// Re-export test utilities from adzerk-client
#[allow(unused_imports)]
pub use adzerk_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use adzerk_client::{AdzerkClient, ClientError, Placement, Request};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A client pointed at a wiremock server.
#[allow(dead_code)]
pub fn test_client(mock_server: &MockServer) -> AdzerkClient {
    AdzerkClient::builder()
        .base_url(mock_server.uri())
        .build()
        .expect("client should build")
}

/// The single-placement request used across tests.
#[allow(dead_code)]
pub fn test_request() -> Request {
    Request::builder(vec![Placement::new("div1", 9709, 70464, vec![5])])
        .build()
        .expect("request should build")
}
