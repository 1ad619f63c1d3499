use crate::core::api::ApiResult;
use crate::models::{Guest, Party, Rsvp};

/// Sequence number handed out for every party selection.
///
/// Only the response carrying the most recent ticket may change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Ticket(u64);

/// One mutation of [`AppState`], produced by a sync operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Parties(Vec<Party>),
    Selected { ticket: Ticket, party: Party },
    Rsvps(Vec<Rsvp>),
    Guests(Vec<Guest>),
    /// A party was deleted. `parties` is `None` when the follow-up refresh failed.
    PartyRemoved { id: i64, parties: Option<Vec<Party>> },
}

/// Everything the views read. Created empty at startup, filled by [`Change`]s.
#[derive(Debug, Default)]
pub struct AppState {
    parties: Vec<Party>,
    selected: Option<Party>,
    rsvps: Vec<Rsvp>,
    guests: Vec<Guest>,
    selection: Ticket,
}

impl AppState {
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn selected(&self) -> Option<&Party> {
        self.selected.as_ref()
    }

    pub fn rsvps(&self) -> &[Rsvp] {
        &self.rsvps
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Ticket of the most recent selection.
    pub fn selection(&self) -> Ticket {
        self.selection
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.as_ref().is_some_and(|party| party.id == id)
    }

    /// Guests holding an RSVP for `party_id`, in guest-list order.
    pub fn guests_attending(&self, party_id: i64) -> impl Iterator<Item = &Guest> {
        self.guests.iter().filter(move |guest| {
            self.rsvps
                .iter()
                .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
        })
    }

    /// Start a new selection; responses to earlier selections become stale.
    pub fn begin_selection(&mut self) -> Ticket {
        self.selection = Ticket(self.selection.0 + 1);
        self.selection
    }

    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Parties(parties) => self.parties = parties,
            Change::Selected { ticket, party } => {
                if ticket == self.selection {
                    self.selected = Some(party);
                } else {
                    tracing::debug!(party = party.id, "Dropping stale party selection");
                }
            }
            Change::Rsvps(rsvps) => self.rsvps = rsvps,
            Change::Guests(guests) => self.guests = guests,
            Change::PartyRemoved { id, parties } => {
                tracing::info!(party = id, "Party removed");
                self.selected = None;
                self.begin_selection();
                if let Some(parties) = parties {
                    self.parties = parties;
                }
            }
        }
    }

    /// Apply a successful result; log and ignore a failed one.
    ///
    /// Returns `true` when the result was applied.
    pub fn absorb(&mut self, result: ApiResult<Change>) -> bool {
        match result {
            Ok(change) => {
                self.apply(change);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Request failed");
                false
            }
        }
    }
}
