use std::future::Future;

use crate::core::api::ApiResult;
use crate::models::{Guest, NewParty, Party, Rsvp};

/// The remote source of truth for parties, RSVPs and guests.
pub trait PartyRepository: Send + Sync {
    fn list_parties(&self) -> impl Future<Output = ApiResult<Vec<Party>>> + Send;
    fn get_party(&self, id: i64) -> impl Future<Output = ApiResult<Party>> + Send;
    fn list_rsvps(&self) -> impl Future<Output = ApiResult<Vec<Rsvp>>> + Send;
    fn list_guests(&self) -> impl Future<Output = ApiResult<Vec<Guest>>> + Send;
    fn create_party(&self, party: &NewParty) -> impl Future<Output = ApiResult<()>> + Send;
    fn delete_party(&self, id: i64) -> impl Future<Output = ApiResult<()>> + Send;
}
