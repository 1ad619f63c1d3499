mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from party_planner for tests
#[allow(unused_imports)]
pub use party_planner::core::sync;
#[allow(unused_imports)]
pub use party_planner::{
    ApiClient, ApiConfig, ApiError, AppState, Change, Guest, NewParty, Party, PartyRepository,
    Rsvp,
};
