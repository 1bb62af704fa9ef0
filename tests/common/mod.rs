//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod fake_api;
pub mod mock_backend;

use std::sync::Arc;

use budget_client::api::ApiClient;
use budget_client::session::{MemorySessionStore, SecureString, SessionStore};

/// Client backed by an in-memory session, plus a handle to that session.
pub fn client_for(base_url: &str) -> (ApiClient, Arc<MemorySessionStore>) {
    let session = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(base_url, session.clone()).expect("build client");
    (client, session)
}

/// Same as `client_for`, starting with `token` already stored.
pub fn signed_in_client(base_url: &str, token: &str) -> (ApiClient, Arc<MemorySessionStore>) {
    let (client, session) = client_for(base_url);
    session
        .set(&SecureString::new(token))
        .expect("seed session");
    (client, session)
}

/// Base URL where nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/v1", addr)
}
