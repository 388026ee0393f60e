//! `RouteDurationClient` — one outbound call per evaluation.

use tracing::debug;

use routewatch_core::config::RoutingConfig;
use routewatch_core::DurationResult;

use crate::error::RoutingError;
use crate::response::MatrixResponse;

/// Fetches the live travel duration for one origin/destination pair.
///
/// Holds the process-wide `reqwest::Client` (built once at startup with the
/// configured timeout) and the routing credentials. No caching, no retry:
/// a failure is reported upward and the watch is skipped for that tick.
#[derive(Debug, Clone)]
pub struct RouteDurationClient {
    http: reqwest::Client,
    base_uri: String,
    api_key: String,
}

impl RouteDurationClient {
    pub fn new(http: reqwest::Client, config: &RoutingConfig) -> Self {
        Self {
            http,
            base_uri: config.base_uri.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// GET the distance matrix for `source` → `destination` with driving
    /// mode and depart-now semantics, and normalize `rows[0].elements[0]`.
    pub async fn fetch(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<DurationResult, RoutingError> {
        debug!(%source, %destination, "fetching route duration");

        let response = self
            .http
            .get(&self.base_uri)
            .query(&[
                ("origins", source),
                ("destinations", destination),
                ("mode", "driving"),
                ("departure_time", "now"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RoutingError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(RoutingError::Status(status.as_u16()));
        }

        let body: MatrixResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::Malformed(e.to_string()))?;

        body.into_result()
    }
}
