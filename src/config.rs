use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2509-FTB-CT-WEB-PT";

/// Where the party API lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub cohort: String,
    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cohort: cohort.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Root every endpoint path is appended to, e.g. `https://host/api/cohort`.
    pub fn api_root(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.cohort.trim_matches('/')
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL {:?}", self.base_url))?;
        if self.cohort.trim_matches('/').is_empty() {
            anyhow::bail!("Cohort must not be empty");
        }
        Ok(())
    }
}
