use crate::api::source::StatSource;
use crate::api::{CountryStat, History, Snapshot};
use crate::utils::error::TrackerError;

/// Client facade over a [`StatSource`].
///
/// Requests are single-shot: a failed fetch surfaces its error immediately
/// rather than retrying, so the dashboard never shows data older than the
/// user thinks it is.
pub struct StatClient {
    source: Box<dyn StatSource>,
}

impl StatClient {
    pub fn new(source: Box<dyn StatSource>) -> Self {
        Self { source }
    }

    pub async fn global(&self) -> Result<Snapshot, TrackerError> {
        self.source.global().await
    }

    pub async fn countries(&self) -> Result<Vec<CountryStat>, TrackerError> {
        self.source.countries().await
    }

    pub async fn country(&self, code: &str) -> Result<Snapshot, TrackerError> {
        self.source.country(code).await
    }

    pub async fn history(&self, days: usize) -> Result<History, TrackerError> {
        self.source.history(days).await
    }

    pub fn endpoint(&self) -> &str {
        self.source.endpoint()
    }
}
