use crate::store::error::StoreError;
use crate::store::SampleStore;
use crate::types::sample::Sample;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A [`SampleStore`] holding its samples in memory.
///
/// Samples are sorted on construction; when two share a timestamp the later
/// one in the input wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    samples: Vec<Sample>,
}

impl MemoryStore {
    pub fn new(samples: Vec<Sample>) -> Self {
        let samples = samples
            .into_iter()
            .map(|sample| (sample.idx, sample))
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .collect();
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn position(&self, instant: DateTime<Utc>) -> usize {
        self.samples.partition_point(|sample| sample.idx < instant)
    }
}

impl FromIterator<Sample> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl SampleStore for MemoryStore {
    fn range(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<Vec<Sample>, StoreError> {
        let first = self.position(start);
        let last = self.position(stop).max(first);
        Ok(self.samples[first..last].to_vec())
    }

    fn latest_before(&self, instant: DateTime<Utc>) -> Result<Option<Sample>, StoreError> {
        Ok(self
            .position(instant)
            .checked_sub(1)
            .map(|i| self.samples[i].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap()
    }

    fn store() -> MemoryStore {
        [9, 7, 8, 8]
            .into_iter()
            .enumerate()
            .map(|(i, hour)| Sample {
                pressure: Some(1000.0 + i as f64),
                ..Sample::new(at(hour))
            })
            .collect()
    }

    #[test]
    fn test_samples_sorted_and_deduplicated() {
        let store = store();
        assert_eq!(store.len(), 3);
        let all = store.range(at(0), at(23)).unwrap();
        let hours: Vec<_> = all.iter().map(|s| s.idx).collect();
        assert_eq!(hours, vec![at(7), at(8), at(9)]);
        // The second 08:00 sample replaced the first.
        assert_eq!(all[1].pressure, Some(1003.0));
    }

    #[test]
    fn test_range_is_half_open() {
        let store = store();
        let slice = store.range(at(7), at(9)).unwrap();
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].idx, at(7));
        assert_eq!(slice[1].idx, at(8));
        assert!(store.range(at(9), at(7)).unwrap().is_empty());
    }

    #[test]
    fn test_latest_before_is_strict() {
        let store = store();
        assert_eq!(store.latest_before(at(9)).unwrap().map(|s| s.idx), Some(at(8)));
        assert_eq!(store.latest_before(at(7)).unwrap(), None);
        assert_eq!(store.latest().unwrap().map(|s| s.idx), Some(at(9)));
        assert_eq!(MemoryStore::default().latest().unwrap(), None);
    }
}
