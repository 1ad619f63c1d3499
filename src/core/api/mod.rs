mod client;
mod error;
mod repository;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use repository::PartyRepository;
