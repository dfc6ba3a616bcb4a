//! Single-endpoint source fetcher.
//!
//! One HTTP GET, JSON parse, outcome classification. Nothing here raises
//! past the boundary: transport errors, non-2xx statuses, and decode
//! failures all come back as [`FetchResult::Failed`] for the caller's
//! degrade policy to handle. A 2xx body of JSON `null` is the backend
//! saying "the real answer is nothing" and maps to [`FetchResult::Empty`],
//! which is not a failure.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use pulse_core::config::ApiConfig;

/// Classified outcome of one fetch.
#[derive(Debug)]
pub enum FetchResult<T> {
    /// 2xx with a decodable, non-null body.
    Real(T),
    /// 2xx whose body was JSON `null`: reachable backend, no data.
    Empty,
    /// Anything that prevents trusting the endpoint right now.
    Failed(FetchError),
}

impl<T> FetchResult<T> {
    pub fn is_real(&self) -> bool {
        matches!(self, FetchResult::Real(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchResult::Failed(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// HTTP client for one telemetry backend.
///
/// Cheap to clone; the inner `reqwest::Client` pools connections. Every
/// request carries the configured deadline, so a hung backend degrades
/// the fetch instead of stalling the dashboard.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with `query` parameters and decode the JSON body.
    ///
    /// Never returns an error: all failure modes classify into the
    /// outcome. Failures are logged here as warnings so callers only
    /// handle the degrade decision.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = match self
            .http
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(url = %url, error = %e, "fetch transport failure");
                return FetchResult::Failed(FetchError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "fetch returned non-2xx status");
            return FetchResult::Failed(FetchError::Status(status.as_u16()));
        }

        let value: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!(url = %url, error = %e, "fetch body is not valid JSON");
                return FetchResult::Failed(FetchError::Decode(e.to_string()));
            }
        };

        if value.is_null() {
            debug!(url = %url, "fetch returned null body (no data)");
            return FetchResult::Empty;
        }

        match serde_json::from_value(value) {
            Ok(data) => FetchResult::Real(data),
            Err(e) => {
                warn!(url = %url, error = %e, "fetch body has unexpected shape");
                FetchResult::Failed(FetchError::Decode(e.to_string()))
            }
        }
    }
}
