use crate::api::{CountryStat, History, Snapshot};
use crate::utils::error::TrackerError;
use async_trait::async_trait;

/// A provider of COVID-19 statistics.
///
/// The dashboard talks to this trait, not to disease.sh directly, so tests
/// can substitute a mock server or a canned source.
#[async_trait]
pub trait StatSource: Send + Sync {
    /// Worldwide aggregate snapshot.
    async fn global(&self) -> Result<Snapshot, TrackerError>;

    /// All per-country records, in source order.
    async fn countries(&self) -> Result<Vec<CountryStat>, TrackerError>;

    /// Snapshot for a single country by ISO2 code.
    async fn country(&self, code: &str) -> Result<Snapshot, TrackerError>;

    /// Worldwide cumulative history for the last `days` days.
    async fn history(&self, days: usize) -> Result<History, TrackerError>;

    /// Endpoint this source reads from, for logging and error context.
    fn endpoint(&self) -> &str;
}
