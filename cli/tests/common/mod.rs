#![allow(dead_code)]

use journalkeeper::api::ApiClient;
use journalkeeper::storage::{FileTokenStore, TokenStore};
use journalkeeper::thunks::Services;
use journalkeeper::{AppState, Store};
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

pub const TOKEN: &str = "jwt-abc";

/// Services wired to `base_url` with a file token store inside `dir`.
pub fn services(base_url: &str, dir: &TempDir) -> Services {
    Services::new(
        ApiClient::new(base_url),
        Box::new(FileTokenStore::new(token_path(dir))),
    )
}

pub fn token_path(dir: &TempDir) -> PathBuf {
    dir.path().join("storage.toml")
}

pub fn stored_token(dir: &TempDir) -> Option<String> {
    FileTokenStore::new(token_path(dir)).load().unwrap()
}

pub fn signed_in_store() -> Store {
    Store::new(AppState::with_token(Some(TOKEN.to_string())))
}

pub fn alert_messages(store: &Store) -> Vec<String> {
    store
        .state()
        .alerts
        .iter()
        .map(|a| a.message.clone())
        .collect()
}

pub fn entry_json(id: i64, timestamp: &str, content: &str) -> Value {
    json!({
        "id": id,
        "timestamp": timestamp,
        "content": content,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z",
        "userId": 1
    })
}
