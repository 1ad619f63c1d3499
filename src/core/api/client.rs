use anyhow::Context;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::core::api::{ApiError, ApiResult, PartyRepository};
use crate::models::{Envelope, Guest, NewParty, Party, Rsvp};

/// HTTP implementation of [`PartyRepository`].
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    root: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            root: config.api_root(),
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    /// GET `path` and unwrap the `data` envelope.
    ///
    /// The status code is not inspected; an error body simply fails to decode.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        let body = response.bytes().await?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(envelope.data)
    }

    fn ensure_success(method: &'static str, path: &str, response: &Response) -> ApiResult<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status,
            });
        }
        Ok(())
    }
}

impl PartyRepository for ApiClient {
    async fn list_parties(&self) -> ApiResult<Vec<Party>> {
        self.fetch("/events").await
    }

    async fn get_party(&self, id: i64) -> ApiResult<Party> {
        self.fetch(&format!("/events/{id}")).await
    }

    async fn list_rsvps(&self) -> ApiResult<Vec<Rsvp>> {
        self.fetch("/rsvps").await
    }

    async fn list_guests(&self) -> ApiResult<Vec<Guest>> {
        self.fetch("/guests").await
    }

    async fn create_party(&self, party: &NewParty) -> ApiResult<()> {
        let path = "/events";
        tracing::debug!(path, name = %party.name, "POST");
        let response = self.http.post(self.url(path)).json(party).send().await?;
        Self::ensure_success("POST", path, &response)
    }

    async fn delete_party(&self, id: i64) -> ApiResult<()> {
        let path = format!("/events/{id}");
        tracing::debug!(path = %path, "DELETE");
        let response = self
            .http
            .request(Method::DELETE, self.url(&path))
            .send()
            .await?;
        Self::ensure_success("DELETE", &path, &response)
    }
}
