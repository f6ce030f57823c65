//! Access to the archive of weather samples.

pub mod error;
pub mod hourly_store;
pub mod memory_store;

use crate::store::error::StoreError;
use crate::types::sample::Sample;
use chrono::{DateTime, Utc};

/// A time-ordered archive of samples keyed by UTC instant.
///
/// Implementations return samples in ascending order without duplicate
/// timestamps.
pub trait SampleStore {
    /// All samples with `start <= idx < stop`.
    fn range(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<Vec<Sample>, StoreError>;

    /// The last sample with `idx < instant`, or `None` if there is none.
    fn latest_before(&self, instant: DateTime<Utc>) -> Result<Option<Sample>, StoreError>;

    /// The most recent sample in the archive.
    fn latest(&self) -> Result<Option<Sample>, StoreError> {
        self.latest_before(DateTime::<Utc>::MAX_UTC)
    }
}
