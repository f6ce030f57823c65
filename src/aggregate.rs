//! Bucketing of the archive into the four plot series.

use crate::dew_point::DewPointFn;
use crate::store::error::StoreError;
use crate::store::SampleStore;
use crate::types::series::{SeriesPoint, SevenDaySeries};
use crate::types::window::GraphWindow;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use log::{debug, info};

/// Width of one rainfall bucket.
pub const BUCKET_HOURS: i64 = 6;

/// Buckets walked per plot: the 28 quarter days of the window plus one
/// bucket before its left edge.
pub const BUCKET_COUNT: usize = 29;

/// One 6 hour slice of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Local start, inclusive.
    pub start: NaiveDateTime,
    /// Local stop, exclusive.
    pub stop: NaiveDateTime,
    pub start_utc: DateTime<Utc>,
    pub stop_utc: DateTime<Utc>,
    /// Local midpoint, the timestamp of the bucket's rainfall bar.
    pub centre: NaiveDateTime,
}

/// The 29 contiguous buckets covering `[x_lo - 6h, x_hi)`.
pub fn buckets(window: &GraphWindow) -> impl Iterator<Item = Bucket> {
    let window = *window;
    let width = Duration::hours(BUCKET_HOURS);
    let first = window.x_lo - width;
    (0..BUCKET_COUNT as i32).map(move |i| {
        let start = first + width * i;
        let stop = start + width;
        Bucket {
            start,
            stop,
            start_utc: window.to_utc(start),
            stop_utc: window.to_utc(stop),
            centre: start + width / 2,
        }
    })
}

/// Converts meters per second to miles per hour.
pub fn mps_to_mph(speed: f64) -> f64 {
    speed * 3.6 / 1.609344
}

/// Builds the four plot series for `window`.
///
/// Temperature, wind and pressure points are passed through for every
/// sample that has the required fields, stamped with the sample's local time.
/// Rainfall is summed per bucket and yields exactly one point per bucket.
///
/// # Errors
///
/// Store failures are returned unchanged.
pub fn aggregate(
    store: &dyn SampleStore,
    window: &GraphWindow,
    dew_point: DewPointFn,
) -> Result<SevenDaySeries, StoreError> {
    let mut series = SevenDaySeries::default();
    let mut sample_count = 0;
    for bucket in buckets(window) {
        let mut rain_total = 0.0;
        for sample in store.range(bucket.start_utc, bucket.stop_utc)? {
            sample_count += 1;
            let local = window.to_local(sample.idx);
            if let Some((temperature, humidity)) = sample.temperature_and_humidity() {
                series.temperature.push(SeriesPoint::new(
                    local,
                    [temperature, dew_point(temperature, humidity)],
                ));
            }
            if let Some((average, gust)) = sample.wind() {
                series
                    .wind
                    .push(SeriesPoint::new(local, [mps_to_mph(average), mps_to_mph(gust)]));
            }
            if let Some(pressure) = sample.pressure {
                series.pressure.push(SeriesPoint::new(local, [pressure]));
            }
            match sample.rain {
                Some(rain) => rain_total += rain,
                None => debug!("No rainfall recorded at {}, counted as 0", sample.idx),
            }
        }
        series.rain.push(SeriesPoint::new(bucket.centre, [rain_total]));
    }
    info!(
        "Aggregated {} samples: {} temperature, {} wind, {} pressure points",
        sample_count,
        series.temperature.len(),
        series.wind.len(),
        series.pressure.len()
    );
    Ok(series)
}
