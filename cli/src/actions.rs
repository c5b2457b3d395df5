//! Actions and their creators.
//!
//! Every request kind carries one [`Lifecycle`], so the reducer sees
//! `pending`, then exactly one of `fulfilled` / `rejected`.

use crate::models::{Entry, UserProfile};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

impl<T> Lifecycle<T> {
    fn phase(&self) -> &'static str {
        match self {
            Lifecycle::Pending => "pending",
            Lifecycle::Fulfilled(_) => "fulfilled",
            Lifecycle::Rejected(_) => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AlertCreate { id: String, message: String },
    AlertRemove { id: String },
    CreateUser(Lifecycle<()>),
    IssueToken(Lifecycle<String>),
    SignOut,
    FetchProfile(Lifecycle<UserProfile>),
    FetchEntries(Lifecycle<Vec<Entry>>),
    CreateEntry(Lifecycle<Entry>),
    UpdateEntry(Lifecycle<Entry>),
    DeleteEntry(Lifecycle<i64>),
}

impl Action {
    /// Slash-separated tag, e.g. `auth/createUser/pending`. Used for logging.
    pub fn name(&self) -> String {
        match self {
            Action::AlertCreate { .. } => "alerts/alertCreate".to_string(),
            Action::AlertRemove { .. } => "alerts/alertRemove".to_string(),
            Action::CreateUser(l) => format!("auth/createUser/{}", l.phase()),
            Action::IssueToken(l) => format!("auth/issueToken/{}", l.phase()),
            Action::SignOut => "auth/signOut".to_string(),
            Action::FetchProfile(l) => format!("profile/fetch/{}", l.phase()),
            Action::FetchEntries(l) => format!("entries/fetch/{}", l.phase()),
            Action::CreateEntry(l) => format!("entries/create/{}", l.phase()),
            Action::UpdateEntry(l) => format!("entries/update/{}", l.phase()),
            Action::DeleteEntry(l) => format!("entries/delete/{}", l.phase()),
        }
    }
}

/// The caller supplies an id that is not already in use.
pub fn alert_create(id: impl Into<String>, message: impl Into<String>) -> Action {
    Action::AlertCreate {
        id: id.into(),
        message: message.into(),
    }
}

/// Same as [`alert_create`] with a freshly generated id.
pub fn alert_create_fresh(message: impl Into<String>) -> Action {
    alert_create(Uuid::new_v4().to_string(), message)
}

pub fn alert_remove(id: impl Into<String>) -> Action {
    Action::AlertRemove { id: id.into() }
}

pub fn sign_out() -> Action {
    Action::SignOut
}
