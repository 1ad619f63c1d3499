//! One async operation per user-visible API call.
//!
//! Each operation performs its request(s) and describes the resulting state
//! mutation as a single [`Change`]. Nothing here touches [`AppState`] directly.
//!
//! [`AppState`]: crate::core::AppState

use crate::core::api::{ApiResult, PartyRepository};
use crate::core::state::{Change, Ticket};
use crate::models::NewParty;

pub async fn refresh_parties<R: PartyRepository>(repo: &R) -> ApiResult<Change> {
    Ok(Change::Parties(repo.list_parties().await?))
}

pub async fn select_party<R: PartyRepository>(
    repo: &R,
    id: i64,
    ticket: Ticket,
) -> ApiResult<Change> {
    let party = repo.get_party(id).await?;
    Ok(Change::Selected { ticket, party })
}

pub async fn refresh_rsvps<R: PartyRepository>(repo: &R) -> ApiResult<Change> {
    Ok(Change::Rsvps(repo.list_rsvps().await?))
}

pub async fn refresh_guests<R: PartyRepository>(repo: &R) -> ApiResult<Change> {
    Ok(Change::Guests(repo.list_guests().await?))
}

/// Create a party, then re-read the full list from the server.
pub async fn create_party<R: PartyRepository>(repo: &R, party: &NewParty) -> ApiResult<Change> {
    repo.create_party(party).await?;
    tracing::info!(name = %party.name, "Party created");
    refresh_parties(repo).await
}

/// Delete a party, then re-read the full list from the server.
pub async fn delete_party<R: PartyRepository>(repo: &R, id: i64) -> ApiResult<Change> {
    repo.delete_party(id).await?;
    let parties = match repo.list_parties().await {
        Ok(parties) => Some(parties),
        Err(err) => {
            tracing::error!(error = %err, party = id, "Refresh after delete failed");
            None
        }
    };
    Ok(Change::PartyRemoved { id, parties })
}
