pub mod config;
pub mod core;
pub mod models;
pub mod view;

pub use config::ApiConfig;
pub use crate::core::{ApiClient, ApiError, ApiResult, AppState, Change, PartyRepository};
pub use models::{Guest, NewParty, Party, Rsvp};

#[cfg(feature = "gui")]
pub mod gui;
