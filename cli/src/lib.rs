//! JournalKeeper client: a predictable state store over the JournalKeeper
//! REST API, plus the terminal views that drive it.

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod reducer;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
pub mod thunks;
pub mod views;

pub use actions::{Action, Lifecycle};
pub use error::RequestError;
pub use state::AppState;
pub use store::Store;
