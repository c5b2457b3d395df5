//! The single state-transition function.

use crate::actions::{Action, Lifecycle};
use crate::state::{
    Alert, AlertsState, AppState, AuthState, EntriesState, ProfileState, RequestStatus,
};

/// Computes the state that follows `action`.
///
/// Never touches `state`; slices the action does not address are carried
/// over as equal copies.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::AlertCreate { id, message } => {
            next.alerts = alerts_create(&state.alerts, id, message);
        }
        Action::AlertRemove { id } => {
            next.alerts = alerts_remove(&state.alerts, id);
        }
        Action::CreateUser(lifecycle) => {
            let auth = &mut next.auth;
            apply(&mut auth.request_status, &mut auth.request_error, lifecycle);
        }
        Action::IssueToken(lifecycle) => {
            let auth = &mut next.auth;
            if let Some(token) = apply(&mut auth.request_status, &mut auth.request_error, lifecycle)
            {
                auth.token = Some(token.clone());
            }
        }
        Action::SignOut => {
            next.auth = AuthState::default();
            next.profile = ProfileState::default();
            next.entries = EntriesState::default();
        }
        Action::FetchProfile(lifecycle) => {
            let p = &mut next.profile;
            if let Some(profile) = apply(&mut p.request_status, &mut p.request_error, lifecycle) {
                p.profile = Some(profile.clone());
            }
        }
        Action::FetchEntries(lifecycle) => {
            let e = &mut next.entries;
            if let Some(list) = apply(&mut e.request_status, &mut e.request_error, lifecycle) {
                e.entities = list.iter().map(|entry| (entry.id, entry.clone())).collect();
                e.ids = e.entities.keys().copied().collect();
                e.sort_ids();
            }
        }
        Action::CreateEntry(lifecycle) | Action::UpdateEntry(lifecycle) => {
            let e = &mut next.entries;
            if let Some(entry) = apply(&mut e.request_status, &mut e.request_error, lifecycle) {
                if e.entities.insert(entry.id, entry.clone()).is_none() {
                    e.ids.push(entry.id);
                }
                e.sort_ids();
            }
        }
        Action::DeleteEntry(lifecycle) => {
            let e = &mut next.entries;
            if let Some(id) = apply(&mut e.request_status, &mut e.request_error, lifecycle) {
                e.ids.retain(|x| x != id);
                e.entities.remove(id);
            }
        }
    }
    next
}

/// Shared pending/fulfilled/rejected bookkeeping. Returns the payload on fulfilment.
fn apply<'a, T>(
    status: &mut RequestStatus,
    error: &mut Option<String>,
    lifecycle: &'a Lifecycle<T>,
) -> Option<&'a T> {
    match lifecycle {
        Lifecycle::Pending => {
            *status = RequestStatus::Loading;
            None
        }
        Lifecycle::Fulfilled(payload) => {
            *status = RequestStatus::Succeeded;
            *error = None;
            Some(payload)
        }
        Lifecycle::Rejected(message) => {
            *status = RequestStatus::Failed;
            *error = Some(message.clone());
            None
        }
    }
}

fn alerts_create(alerts: &AlertsState, id: &str, message: &str) -> AlertsState {
    let mut ids: Vec<String> = Vec::with_capacity(alerts.ids.len() + 1);
    ids.push(id.to_string());
    ids.extend(alerts.ids.iter().filter(|x| *x != id).cloned());

    let mut entities = alerts.entities.clone();
    entities.insert(
        id.to_string(),
        Alert {
            id: id.to_string(),
            message: message.to_string(),
        },
    );
    AlertsState { ids, entities }
}

fn alerts_remove(alerts: &AlertsState, id: &str) -> AlertsState {
    let mut entities = alerts.entities.clone();
    entities.remove(id);
    AlertsState {
        ids: alerts.ids.iter().filter(|x| *x != id).cloned().collect(),
        entities,
    }
}
