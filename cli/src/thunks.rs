//! Asynchronous action creators.
//!
//! Each thunk dispatches `pending`, awaits exactly one request, then
//! dispatches `fulfilled` or `rejected` and hands the outcome back to the
//! caller so it can chain its own alerts.

use crate::actions::{self, Action, Lifecycle};
use crate::api::ApiClient;
use crate::error::RequestError;
use crate::models::{Entry, EntryDraft, NewUser, UserProfile};
use crate::storage::TokenStore;
use crate::store::Store;
use std::future::Future;

pub const SIGN_IN_REQUIRED: &str = "YOU MUST BE SIGNED IN";

/// Collaborators the thunks talk to.
pub struct Services {
    pub api: ApiClient,
    pub tokens: Box<dyn TokenStore>,
}

impl Services {
    pub fn new(api: ApiClient, tokens: Box<dyn TokenStore>) -> Self {
        Self { api, tokens }
    }
}

async fn run<T, Fut>(
    store: &mut Store,
    wrap: fn(Lifecycle<T>) -> Action,
    request: Fut,
) -> Result<T, RequestError>
where
    T: Clone,
    Fut: Future<Output = Result<T, RequestError>>,
{
    store.dispatch(wrap(Lifecycle::Pending));
    match request.await {
        Ok(payload) => {
            store.dispatch(wrap(Lifecycle::Fulfilled(payload.clone())));
            Ok(payload)
        }
        Err(e) => {
            store.dispatch(wrap(Lifecycle::Rejected(e.message())));
            Err(e)
        }
    }
}

/// Like [`run`] for endpoints behind bearer auth.
///
/// Without a token nothing is sent. A 401 signs the user out so the stale
/// token is not reused.
async fn run_authed<'s, T, F, Fut>(
    store: &mut Store,
    services: &'s Services,
    wrap: fn(Lifecycle<T>) -> Action,
    request: F,
) -> Result<T, RequestError>
where
    T: Clone,
    F: FnOnce(&'s ApiClient, String) -> Fut,
    Fut: Future<Output = Result<T, RequestError>>,
{
    let token = store
        .state()
        .auth
        .token
        .clone()
        .filter(|t| !t.trim().is_empty());
    let Some(token) = token else {
        store.dispatch(wrap(Lifecycle::Pending));
        store.dispatch(wrap(Lifecycle::Rejected(SIGN_IN_REQUIRED.to_string())));
        return Err(RequestError::Unauthorized(SIGN_IN_REQUIRED.to_string()));
    };

    let result = run(store, wrap, request(&services.api, token)).await;
    if let Err(e) = &result {
        if e.is_unauthorized() {
            log::info!("token rejected by server, signing out");
            sign_out(store, services);
        }
    }
    result
}

/// Registers a new account. Does not sign in.
pub async fn create_user(
    store: &mut Store,
    services: &Services,
    user: NewUser,
) -> Result<(), RequestError> {
    run(store, Action::CreateUser, services.api.create_user(&user)).await
}

/// Exchanges credentials for a token, keeps it in state and persists it.
pub async fn issue_token(
    store: &mut Store,
    services: &Services,
    username: &str,
    password: &str,
) -> Result<String, RequestError> {
    let token = run(
        store,
        Action::IssueToken,
        services.api.create_token(username, password),
    )
    .await?;

    // A failed write only costs the next run a sign-in.
    if let Err(e) = services.tokens.save(&token) {
        log::warn!("could not persist token: {:#}", e);
    }
    Ok(token)
}

/// Forgets the token locally and in persistent storage.
pub fn sign_out(store: &mut Store, services: &Services) {
    if let Err(e) = services.tokens.clear() {
        log::warn!("could not clear persisted token: {:#}", e);
    }
    store.dispatch(actions::sign_out());
}

pub async fn fetch_profile(
    store: &mut Store,
    services: &Services,
) -> Result<UserProfile, RequestError> {
    run_authed(store, services, Action::FetchProfile, |api, token| async move {
        api.user_profile(&token).await
    })
    .await
}

pub async fn fetch_entries(
    store: &mut Store,
    services: &Services,
) -> Result<Vec<Entry>, RequestError> {
    run_authed(store, services, Action::FetchEntries, |api, token| async move {
        api.list_entries(&token).await
    })
    .await
}

pub async fn create_entry(
    store: &mut Store,
    services: &Services,
    draft: EntryDraft,
) -> Result<Entry, RequestError> {
    run_authed(store, services, Action::CreateEntry, |api, token| async move {
        api.create_entry(&token, &draft).await
    })
    .await
}

pub async fn update_entry(
    store: &mut Store,
    services: &Services,
    id: i64,
    draft: EntryDraft,
) -> Result<Entry, RequestError> {
    run_authed(store, services, Action::UpdateEntry, |api, token| async move {
        api.update_entry(&token, id, &draft).await
    })
    .await
}

pub async fn delete_entry(
    store: &mut Store,
    services: &Services,
    id: i64,
) -> Result<i64, RequestError> {
    run_authed(store, services, Action::DeleteEntry, |api, token| async move {
        api.delete_entry(&token, id).await.map(|()| id)
    })
    .await
}
