use super::notify;
use crate::models::{Entry, EntryDraft};
use crate::state::EntriesState;
use crate::store::Store;
use crate::thunks::{self, Services};
use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use comfy_table::Table;
use inquire::Text;

pub const ENTRY_CREATED: &str = "ENTRY CREATED";
pub const ENTRY_UPDATED: &str = "ENTRY UPDATED";
pub const ENTRY_DELETED: &str = "ENTRY DELETED";
pub const EMPTY_CONTENT: &str = "THE ENTRY CONTENT MUST NOT BE EMPTY";
pub const INVALID_TIMESTAMP: &str = "INVALID DATE, USE YYYY-MM-DD OR YYYY-MM-DD HH:MM";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    /// Blank means "now".
    pub timestamp: String,
    pub content: String,
}

impl EntryForm {
    /// Prompts for an entry, pre-filled from `existing` when editing.
    pub fn prompt(existing: Option<&Entry>) -> Result<Self> {
        let default_ts = existing
            .map(|e| e.timestamp.format(DISPLAY_FORMAT).to_string())
            .unwrap_or_default();
        let default_content = existing.map(|e| e.content.clone()).unwrap_or_default();

        let timestamp = Text::new("Date (YYYY-MM-DD HH:MM, blank for now):")
            .with_initial_value(&default_ts)
            .prompt()?;
        let content = Text::new("Entry:")
            .with_initial_value(&default_content)
            .prompt()?;
        Ok(Self { timestamp, content })
    }

    /// Local validation, run before any request.
    fn into_draft(self, now: DateTime<Utc>) -> Result<EntryDraft, &'static str> {
        if self.content.trim().is_empty() {
            return Err(EMPTY_CONTENT);
        }
        let timestamp = parse_timestamp(&self.timestamp, now).ok_or(INVALID_TIMESTAMP)?;
        Ok(EntryDraft {
            timestamp,
            content: self.content.trim().to_string(),
        })
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM`, or `YYYY-MM-DD` (midnight). Times are UTC.
pub fn parse_timestamp(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(now);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, DISPLAY_FORMAT) {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Entries as a table, newest first.
pub fn entries_table(entries: &EntriesState) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Entry"]);
    for entry in entries.iter() {
        table.add_row(vec![
            entry.id.to_string(),
            entry.timestamp.format(DISPLAY_FORMAT).to_string(),
            entry.content.clone(),
        ]);
    }
    table
}

/// Loads the signed-in user's entries into the store.
pub async fn load(store: &mut Store, services: &Services) -> bool {
    match thunks::fetch_entries(store, services).await {
        Ok(_) => true,
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}

pub async fn create(store: &mut Store, services: &Services, form: EntryForm) -> bool {
    let draft = match form.into_draft(Utc::now()) {
        Ok(d) => d,
        Err(msg) => {
            notify(store, msg);
            return false;
        }
    };
    match thunks::create_entry(store, services, draft).await {
        Ok(_) => {
            notify(store, ENTRY_CREATED);
            true
        }
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}

pub async fn edit(store: &mut Store, services: &Services, id: i64, form: EntryForm) -> bool {
    let draft = match form.into_draft(Utc::now()) {
        Ok(d) => d,
        Err(msg) => {
            notify(store, msg);
            return false;
        }
    };
    match thunks::update_entry(store, services, id, draft).await {
        Ok(_) => {
            notify(store, ENTRY_UPDATED);
            true
        }
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}

pub async fn delete(store: &mut Store, services: &Services, id: i64) -> bool {
    match thunks::delete_entry(store, services, id).await {
        Ok(_) => {
            notify(store, ENTRY_DELETED);
            true
        }
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}
