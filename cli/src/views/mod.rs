//! Terminal views. Each one collects a form, drives the store, and leaves
//! its outcome behind as alerts.

pub mod entries;
pub mod profile;
pub mod router;
pub mod session;
pub mod signup;

pub use router::{InquirePrompter, Prompter, visit};

use crate::actions::{alert_create_fresh, alert_remove};
use crate::logger::Logger;
use crate::state::Alert;
use crate::store::Store;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Queues a user-facing alert under a fresh id.
pub fn notify(store: &mut Store, message: impl Into<String>) {
    store.dispatch(alert_create_fresh(message));
}

/// Prints every pending alert, oldest first, and dismisses it.
/// Returns the alerts that were shown.
pub fn flush_alerts(store: &mut Store) -> Vec<Alert> {
    let mut shown: Vec<Alert> = store.state().alerts.iter().cloned().collect();
    shown.reverse();
    for alert in &shown {
        Logger::alert(&alert.message);
        store.dispatch(alert_remove(alert.id.clone()));
    }
    shown
}

/// Runs `fut` behind a spinner so a pending request is visible.
pub async fn with_spinner<T>(message: &str, fut: impl Future<Output = T>) -> T {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    let out = fut.await;
    pb.finish_and_clear();
    out
}
