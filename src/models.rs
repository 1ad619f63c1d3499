use serde::{Deserialize, Serialize};

/// A single party (an "event" on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// ISO-8601 timestamp as returned by the server.
    pub date: String,
    pub location: String,
}

impl Party {
    /// The date portion of the timestamp (`YYYY-MM-DD`).
    pub fn day(&self) -> &str {
        match self.date.char_indices().nth(10) {
            Some((idx, _)) => &self.date[..idx],
            None => &self.date,
        }
    }
}

/// Body of a `POST /events` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewParty {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: i64,
    pub guest_id: i64,
    pub event_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
}

/// Every response from the API wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}
