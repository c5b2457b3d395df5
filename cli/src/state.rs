use crate::models::{Entry, UserProfile};
use std::collections::HashMap;

/// Where the last request of a slice stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Failed,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: String,
    pub message: String,
}

/// Alerts keyed by id. `ids` is the display order, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertsState {
    pub ids: Vec<String>,
    pub entities: HashMap<String, Alert>,
}

impl AlertsState {
    /// Alerts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub request_status: RequestStatus,
    pub request_error: Option<String>,
    pub token: Option<String>,
}

impl AuthState {
    /// True when a non-blank token is held.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub request_status: RequestStatus,
    pub request_error: Option<String>,
    pub profile: Option<UserProfile>,
}

/// Entries keyed by id. `ids` is ordered by timestamp, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntriesState {
    pub request_status: RequestStatus,
    pub request_error: Option<String>,
    pub ids: Vec<i64>,
    pub entities: HashMap<i64, Entry>,
}

impl EntriesState {
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn get(&self, id: i64) -> Option<&Entry> {
        self.entities.get(&id)
    }

    pub(crate) fn sort_ids(&mut self) {
        let entities = &self.entities;
        self.ids.sort_by(|a, b| {
            let ta = entities.get(a).map(|e| e.timestamp);
            let tb = entities.get(b).map(|e| e.timestamp);
            tb.cmp(&ta).then(b.cmp(a))
        });
    }
}

/// Canonical client state. Only [`crate::reducer::reduce`] produces new values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub alerts: AlertsState,
    pub auth: AuthState,
    pub profile: ProfileState,
    pub entries: EntriesState,
}

impl AppState {
    /// Initial state, seeded with whatever token was persisted last session.
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            auth: AuthState {
                token,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
