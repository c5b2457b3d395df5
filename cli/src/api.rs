//! Thin typed wrapper over the JournalKeeper REST API.

use crate::error::{RequestError, extract_error_message};
use crate::models::{Entry, EntryDraft, NewUser, TokenResponse, UserProfile};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the server root without a trailing slash, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// `POST /api/users`. Any 2xx counts as success, body ignored.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), RequestError> {
        let res = send(self.http.post(self.url("users")).json(user)).await?;
        check(res).await.map(|_| ())
    }

    /// `POST /api/tokens` with HTTP Basic credentials. A blank token is a decode error.
    pub async fn create_token(&self, username: &str, password: &str) -> Result<String, RequestError> {
        let req = self
            .http
            .post(self.url("tokens"))
            .basic_auth(username, Some(password));
        let body: TokenResponse = json(check(send(req).await?).await?).await?;
        if body.token.trim().is_empty() {
            return Err(RequestError::Decode("empty token".into()));
        }
        Ok(body.token)
    }

    pub async fn user_profile(&self, token: &str) -> Result<UserProfile, RequestError> {
        let req = self.http.get(self.url("user-profile")).bearer_auth(token);
        json(check(send(req).await?).await?).await
    }

    pub async fn list_entries(&self, token: &str) -> Result<Vec<Entry>, RequestError> {
        let req = self.http.get(self.url("entries")).bearer_auth(token);
        json(check(send(req).await?).await?).await
    }

    pub async fn create_entry(&self, token: &str, draft: &EntryDraft) -> Result<Entry, RequestError> {
        let req = self.http.post(self.url("entries")).bearer_auth(token).json(draft);
        json(check(send(req).await?).await?).await
    }

    pub async fn update_entry(
        &self,
        token: &str,
        id: i64,
        draft: &EntryDraft,
    ) -> Result<Entry, RequestError> {
        let req = self
            .http
            .put(self.url(&format!("entries/{}", id)))
            .bearer_auth(token)
            .json(draft);
        json(check(send(req).await?).await?).await
    }

    pub async fn delete_entry(&self, token: &str, id: i64) -> Result<(), RequestError> {
        let req = self
            .http
            .delete(self.url(&format!("entries/{}", id)))
            .bearer_auth(token);
        check(send(req).await?).await.map(|_| ())
    }
}

async fn send(req: RequestBuilder) -> Result<Response, RequestError> {
    let res = req.send().await?;
    log::debug!("{} -> {}", res.url().path(), res.status());
    Ok(res)
}

/// Turns non-2xx responses into errors carrying the backend's `{error}` message.
async fn check(res: Response) -> Result<Response, RequestError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    // Unreadable bodies still fall back to the placeholder message.
    let text = res.text().await.unwrap_or_default();
    let message = extract_error_message(&text);
    if status == StatusCode::UNAUTHORIZED {
        Err(RequestError::Unauthorized(message))
    } else {
        Err(RequestError::Server { status, message })
    }
}

async fn json<T: DeserializeOwned>(res: Response) -> Result<T, RequestError> {
    let text = res.text().await?;
    serde_json::from_str(&text).map_err(|e| RequestError::Decode(e.to_string()))
}
