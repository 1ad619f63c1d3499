pub mod api;
pub mod state;
pub mod sync;

pub use api::{ApiClient, ApiError, ApiResult, PartyRepository};
pub use state::{AppState, Change, Ticket};
