//! Common test utilities and constants
//!
//! Shared functionality used across all test modules.

use serde_json::{Value, json};
use shiori::net::ClientConfigBuilder;
use shiori::prelude::*;
use std::time::Duration;
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Installs a test subscriber once; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client pointed at a mock server, without request pacing.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> JikanClient {
    let config = ClientConfigBuilder::default()
        .base_url(format!("{}/v4", server.uri()))
        .rate_limit(Duration::ZERO)
        .timeout(TEST_TIMEOUT)
        .build()
        .unwrap();
    JikanClient::with_config(&config).unwrap()
}

/// A one-page list body around `data`.
#[allow(dead_code)]
pub fn page_body(data: Value) -> Value {
    let count = data.as_array().map(Vec::len).unwrap_or(0);
    json!({
        "data": data,
        "pagination": {
            "last_visible_page": 1,
            "has_next_page": false,
            "current_page": 1,
            "items": { "count": count, "total": count, "per_page": 25 }
        }
    })
}
