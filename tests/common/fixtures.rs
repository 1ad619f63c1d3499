#![allow(dead_code)]

use party_planner::{ApiClient, ApiConfig, Guest, Party, Rsvp};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COHORT: &str = "test-cohort";

/// Full request path for an endpoint, e.g. `/events` -> `/api/test-cohort/events`.
pub fn api_path(endpoint: &str) -> String {
    format!("/api/{COHORT}{endpoint}")
}

/// Starts a mock API and a client pointed at it.
/// The server must be kept alive for as long as the client is used.
pub async fn start_api() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let config = ApiConfig::new(format!("{}/api", server.uri()), COHORT);
    let client = ApiClient::new(&config).expect("Failed to build test client");
    (server, client)
}

/// Wire representation of a party, including fields the client ignores.
pub fn party_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "date": "2025-06-01T18:30:00.000Z",
        "location": "Town Hall",
        "cohortId": 42,
    })
}

pub fn make_party(id: i64, name: &str) -> Party {
    Party {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        date: "2025-06-01T18:30:00.000Z".to_string(),
        location: "Town Hall".to_string(),
    }
}

pub fn make_guest(id: i64, name: &str) -> Guest {
    Guest {
        id,
        name: name.to_string(),
    }
}

pub fn make_rsvp(id: i64, guest_id: i64, event_id: i64) -> Rsvp {
    Rsvp {
        id,
        guest_id,
        event_id,
    }
}

/// `200 OK` with `{ "data": data }`.
pub fn envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

pub async fn mount_get(server: &MockServer, endpoint: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(api_path(endpoint)))
        .respond_with(envelope(data))
        .mount(server)
        .await;
}
