mod common;

use common::*;
use journalkeeper::error::FALLBACK_ERROR;
use journalkeeper::models::{EntryDraft, NewUser};
use journalkeeper::state::RequestStatus;
use journalkeeper::storage::TokenStore;
use journalkeeper::thunks::{self, SIGN_IN_REQUIRED};
use journalkeeper::{RequestError, Store};
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ann() -> NewUser {
    NewUser {
        username: "ann".into(),
        name: "Ann Example".into(),
        email: "ann@example.com".into(),
        password: "s3cret".into(),
    }
}

#[tokio::test]
async fn create_user_dispatches_pending_then_fulfilled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({
            "username": "ann",
            "name": "Ann Example",
            "email": "ann@example.com",
            "password": "s3cret"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |s| sink.borrow_mut().push(s.auth.request_status));

    thunks::create_user(&mut store, &services, ann()).await.unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![RequestStatus::Loading, RequestStatus::Succeeded]
    );
    assert_eq!(store.state().auth.request_error, None);
    // registering does not sign in
    assert_eq!(store.state().auth.token, None);
}

#[tokio::test]
async fn create_user_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "USERNAME ALREADY TAKEN"})),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    let err = thunks::create_user(&mut store, &services, ann())
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Server { .. }));
    assert_eq!(store.state().auth.request_status, RequestStatus::Failed);
    assert_eq!(
        store.state().auth.request_error.as_deref(),
        Some("USERNAME ALREADY TAKEN")
    );
}

#[tokio::test]
async fn create_user_without_error_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    assert!(thunks::create_user(&mut store, &services, ann()).await.is_err());
    assert_eq!(store.state().auth.request_error.as_deref(), Some(FALLBACK_ERROR));
}

#[tokio::test]
async fn unreachable_backend_falls_back() {
    let dir = TempDir::new().unwrap();
    // nothing listens on the discard port
    let services = services("http://127.0.0.1:9", &dir);
    let mut store = Store::default();

    let err = thunks::create_user(&mut store, &services, ann())
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Network(_)));
    assert_eq!(store.state().auth.request_status, RequestStatus::Failed);
    assert_eq!(store.state().auth.request_error.as_deref(), Some(FALLBACK_ERROR));
}

#[tokio::test]
async fn issue_token_stores_and_persists_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .and(header("Authorization", "Basic YW5uOnMzY3JldA=="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    let token = thunks::issue_token(&mut store, &services, "ann", "s3cret")
        .await
        .unwrap();

    assert_eq!(token, TOKEN);
    assert_eq!(store.state().auth.token.as_deref(), Some(TOKEN));
    assert_eq!(store.state().auth.request_status, RequestStatus::Succeeded);
    assert_eq!(stored_token(&dir).as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn issue_token_with_bad_credentials_keeps_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "INVALID CREDENTIALS"})),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    let err = thunks::issue_token(&mut store, &services, "ann", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "INVALID CREDENTIALS");
    assert_eq!(store.state().auth.token, None);
    assert_eq!(
        store.state().auth.request_error.as_deref(),
        Some("INVALID CREDENTIALS")
    );
    assert_eq!(stored_token(&dir), None);
}

#[tokio::test]
async fn issue_token_rejects_blank_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": " "})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    let err = thunks::issue_token(&mut store, &services, "ann", "s3cret")
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::Decode(_)));
    assert_eq!(store.state().auth.token, None);
    assert_eq!(store.state().auth.request_status, RequestStatus::Failed);
    assert_eq!(
        store.state().auth.request_error.as_deref(),
        Some(FALLBACK_ERROR)
    );
    assert_eq!(stored_token(&dir), None);
}

#[tokio::test]
async fn token_response_without_token_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": "x"})))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    let err = thunks::issue_token(&mut store, &services, "ann", "s3cret")
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
    assert_eq!(store.state().auth.token, None);
    assert_eq!(store.state().auth.request_error.as_deref(), Some(FALLBACK_ERROR));
}

#[tokio::test]
async fn guarded_thunks_without_token_never_hit_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = Store::default();

    let err = thunks::fetch_entries(&mut store, &services).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(store.state().entries.request_status, RequestStatus::Failed);
    assert_eq!(
        store.state().entries.request_error.as_deref(),
        Some(SIGN_IN_REQUIRED)
    );

    assert!(thunks::fetch_profile(&mut store, &services).await.is_err());
    assert_eq!(
        store.state().profile.request_error.as_deref(),
        Some(SIGN_IN_REQUIRED)
    );
}

#[tokio::test]
async fn fetch_entries_sends_bearer_token_and_sorts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/entries"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            entry_json(1, "2024-01-01T08:00:00Z", "new year"),
            entry_json(2, "2024-03-10T20:15:00Z", "spring"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = signed_in_store();

    let entries = thunks::fetch_entries(&mut store, &services).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(store.state().entries.ids, vec![2, 1]);
    assert_eq!(store.state().entries.request_status, RequestStatus::Succeeded);
    // other slices untouched
    assert_eq!(store.state().auth.request_status, RequestStatus::Idle);
}

#[tokio::test]
async fn expired_token_signs_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user-profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "TOKEN EXPIRED"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    services.tokens.save(TOKEN).unwrap();
    let mut store = signed_in_store();

    let err = thunks::fetch_profile(&mut store, &services).await.unwrap_err();
    assert_eq!(err.message(), "TOKEN EXPIRED");
    assert!(!store.state().auth.has_token());
    assert_eq!(stored_token(&dir), None);
}

#[tokio::test]
async fn fetch_profile_stores_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user-profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "ann",
            "name": "Ann Example",
            "email": "ann@example.com",
            "createdAt": "2023-12-24T10:00:00Z"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = signed_in_store();

    thunks::fetch_profile(&mut store, &services).await.unwrap();
    let profile = store.state().profile.profile.clone().unwrap();
    assert_eq!(profile.username, "ann");
    assert_eq!(
        profile.created_at,
        Some(Utc.with_ymd_and_hms(2023, 12, 24, 10, 0, 0).unwrap())
    );
    assert_eq!(profile.updated_at, None);
}

#[tokio::test]
async fn entry_create_update_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/entries"))
        .and(body_json(json!({
            "timestamp": "2024-04-02T09:30:00Z",
            "content": "first"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(entry_json(7, "2024-04-02T09:30:00Z", "first")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/entries/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(entry_json(7, "2024-04-02T09:30:00Z", "edited")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/entries/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let services = services(&server.uri(), &dir);
    let mut store = signed_in_store();
    let timestamp = Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0).unwrap();

    let created = thunks::create_entry(
        &mut store,
        &services,
        EntryDraft {
            timestamp,
            content: "first".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.id, 7);
    assert_eq!(store.state().entries.ids, vec![7]);

    thunks::update_entry(
        &mut store,
        &services,
        7,
        EntryDraft {
            timestamp,
            content: "edited".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        store.state().entries.get(7).map(|e| e.content.as_str()),
        Some("edited")
    );

    assert_eq!(thunks::delete_entry(&mut store, &services, 7).await.unwrap(), 7);
    assert!(store.state().entries.ids.is_empty());
}

#[tokio::test]
async fn sign_out_clears_state_and_storage() {
    let dir = TempDir::new().unwrap();
    let services = services("http://127.0.0.1:9", &dir);
    services.tokens.save(TOKEN).unwrap();
    let mut store = signed_in_store();

    thunks::sign_out(&mut store, &services);

    assert_eq!(store.state().auth.token, None);
    assert_eq!(stored_token(&dir), None);
}
