use crate::api::source::StatSource;
use crate::api::{CountryStat, History, Snapshot};
use crate::utils::error::TrackerError;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://disease.sh/v3/covid-19";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error envelope disease.sh returns on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// [`StatSource`] backed by the public disease.sh REST API.
pub struct DiseaseSh {
    endpoint: String,
    client: Client,
}

impl DiseaseSh {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TrackerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::Config(format!("Failed to create HTTP client: {e}")))?;
        let endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(Self { endpoint, client })
    }

    pub fn with_defaults() -> Result<Self, TrackerError> {
        Self::new(
            DEFAULT_ENDPOINT.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, TrackerError> {
        let url = format!("{}/{path}", self.endpoint);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        Self::read_json(response, &url).await
    }

    /// Check the status and decode the body, mapping API failures to
    /// domain errors.
    async fn read_json<T: DeserializeOwned>(
        response: Response,
        url: &str,
    ) -> Result<T, TrackerError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(TrackerError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // disease.sh wraps errors as {"message": "..."}
            let message = match serde_json::from_str::<ApiMessage>(&body) {
                Ok(api) => api.message,
                Err(_) => format!("HTTP {status}: {body}"),
            };

            return Err(TrackerError::Source {
                endpoint: url.to_string(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl StatSource for DiseaseSh {
    async fn global(&self) -> Result<Snapshot, TrackerError> {
        self.fetch("all").await
    }

    async fn countries(&self) -> Result<Vec<CountryStat>, TrackerError> {
        self.fetch("countries").await
    }

    async fn country(&self, code: &str) -> Result<Snapshot, TrackerError> {
        let url = format!("{}/countries/{code}", self.endpoint);
        tracing::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;

        // The API answers 404 for codes it has no record of.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(TrackerError::unknown_country(code));
        }

        Self::read_json(response, &url).await
    }

    async fn history(&self, days: usize) -> Result<History, TrackerError> {
        self.fetch(&format!("historical/all?lastdays={days}")).await
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let source = DiseaseSh::new(
            "https://disease.sh/v3/covid-19/".to_string(),
            Duration::from_secs(5),
        )
        .expect("client should build");
        assert_eq!(source.endpoint(), "https://disease.sh/v3/covid-19");
    }

    #[test]
    fn test_default_construction() {
        let source = DiseaseSh::with_defaults().expect("client should build");
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }
}
