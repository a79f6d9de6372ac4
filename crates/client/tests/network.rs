//! Behavioral tests against an unreachable origin.
//!
//! Nothing listens on the target port, so every request fails at the
//! transport layer before a response exists. That is exactly the situation
//! the token-retention policy is about.

use std::sync::Arc;

use url::Url;

use shoplite_client::{ApiClient, ApiConfig, ApiError, MemoryTokenStore, ProductQuery, TokenStore};

fn unreachable_client() -> (ApiClient, Arc<MemoryTokenStore>) {
    // Port 1 is reserved and never bound in the test environment, so
    // connections are refused immediately.
    let url = Url::parse("http://127.0.0.1:1/api").expect("url");
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::with_store(&ApiConfig::new(&url), store.clone());
    (client, store)
}

#[tokio::test]
async fn logout_failure_leaves_token_intact() {
    let (client, store) = unreachable_client();
    client.set_token("tok-live");

    let result = client.logout().await;
    assert!(matches!(result, Err(ApiError::Network(_))));

    // The failed call must not produce a false logged-out state.
    assert!(store.load().is_some());
    assert!(client.has_token());
}

#[tokio::test]
async fn transport_failure_surfaces_as_network_error() {
    let (client, _store) = unreachable_client();

    let err = client
        .products(&ProductQuery::default())
        .await
        .expect_err("no server is listening");

    assert!(matches!(err, ApiError::Network(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn login_failure_stores_no_token() {
    let (client, store) = unreachable_client();

    let result = client.login("ada@example.com", "pw").await;
    assert!(result.is_err());
    assert!(store.load().is_none());
}
