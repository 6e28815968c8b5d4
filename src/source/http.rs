//! Management API metrics source.
//!
//! Queries `GET {server}/api/projects/{project}/environments/{environment}/toggles/{toggle}/metrics`
//! with a `lastHours` query parameter.
//!
//! ## Example
//!
//! ```rust,no_run
//! use flagwatch::{FlagTarget, HttpSource, MetricsQuery, TimeWindow};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::builder()
//!         .endpoint("http://localhost:4009")
//!         .token("my-api-token")
//!         .build()?;
//!
//!     let target = FlagTarget::new("shop", "online", "new_checkout");
//!     let response = source.fetch(&target, TimeWindow::OneDay).await?;
//!
//!     if let Some(data) = response.data {
//!         for entry in &data.summary {
//!             println!("{}: {}", entry.value, entry.count);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::{FetchError, FlagTarget, MetricContent, MetricsQuery, MetricsResponse};
use crate::data::TimeWindow;

/// Metrics source for the FeatureProbe management API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
    token: Option<String>,
    description: String,
}

impl HttpSource {
    /// Create a new builder for configuring the source.
    pub fn builder() -> HttpSourceBuilder {
        HttpSourceBuilder::default()
    }

    /// Build the metrics URL for a toggle, without the query string.
    pub fn metrics_url(&self, target: &FlagTarget) -> Result<Url, FetchError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend([
                "api",
                "projects",
                target.project.as_str(),
                "environments",
                target.environment.as_str(),
                "toggles",
                target.toggle.as_str(),
                "metrics",
            ]);
        Ok(url)
    }
}

#[async_trait]
impl MetricsQuery for HttpSource {
    async fn fetch(
        &self,
        target: &FlagTarget,
        window: TimeWindow,
    ) -> Result<MetricsResponse, FetchError> {
        let url = self.metrics_url(target)?;

        let mut request = self.client.get(url).query(&[("lastHours", window.value())]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let data: MetricContent =
                response.json().await.map_err(|e| FetchError::Parse(e.to_string()))?;
            return Ok(MetricsResponse::ok(data));
        }

        // Error bodies look like {"code": "...", "message": "..."}
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        debug!(%status, ?message, toggle = %target, "metrics request rejected");
        Ok(MetricsResponse::failure(message))
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for HttpSource.
#[derive(Debug, Default)]
pub struct HttpSourceBuilder {
    endpoint: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl HttpSourceBuilder {
    /// Set the server base URL (e.g., "http://localhost:4009").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the API token sent as a bearer credential.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the source.
    pub fn build(self) -> Result<HttpSource, FetchError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));
        let raw = self.endpoint.unwrap_or_else(|| "http://localhost:4009".to_string());

        let endpoint =
            Url::parse(&raw).map_err(|e| FetchError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(FetchError::InvalidEndpoint(raw));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(HttpSource {
            client,
            description: format!("http: {}", endpoint),
            endpoint,
            token: self.token.filter(|t| !t.is_empty()),
        })
    }
}

/// Error body returned by the management API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}
