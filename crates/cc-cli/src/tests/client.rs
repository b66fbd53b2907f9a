use crate::{Client, ClientError, MemorySessionStore, SessionStore};

use std::sync::Arc;

use cc_core::NewCustomer;
use googletest::assert_that;
use googletest::prelude::{eq, none};

fn client_with(session: MemorySessionStore) -> Client {
    // Port 9 (discard) is never reached by these tests.
    Client::new("http://127.0.0.1:9/", Arc::new(session))
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = client_with(MemorySessionStore::new());
    assert_eq!(client.base_url, "http://127.0.0.1:9");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000", Arc::new(MemorySessionStore::new()));
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_is_authenticated_follows_session() {
    let client = client_with(MemorySessionStore::with_token("tok"));
    assert!(client.is_authenticated());

    client.logout().unwrap();

    assert!(!client.is_authenticated());
    assert_that!(client.session().token(), none());
}

#[tokio::test]
async fn test_list_customers_without_token_is_unauthorized_before_any_request() {
    let client = client_with(MemorySessionStore::new());

    let err = client.list_customers().await.unwrap_err();

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_register_with_blank_name_fails_locally() {
    let client = client_with(MemorySessionStore::new());

    let err = client
        .register_customer(&NewCustomer::new("", "+4512345678"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation { .. }));
    assert_that!(
        err.message_or("Error registering customer"),
        eq("Name is required")
    );
}

#[test]
fn test_message_or_prefers_backend_message() {
    let err = ClientError::api_error(409, Some("Phone number already registered".into()));
    assert_that!(
        err.message_or("fallback"),
        eq("Phone number already registered")
    );
}

#[test]
fn test_message_or_falls_back_without_backend_message() {
    let err = ClientError::api_error(500, None);
    assert_that!(err.message_or("Error deducting cut"), eq("Error deducting cut"));
}

#[test]
fn test_memory_store_rejects_empty_token() {
    let store = MemorySessionStore::new();
    assert!(store.store("").is_err());
    assert_that!(store.token(), none());

    store.store("abc").unwrap();
    assert_eq!(store.token().as_deref(), Some("abc"));
}
