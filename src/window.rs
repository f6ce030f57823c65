//! Placement of the 7 day graph window.

use crate::error::SevenDayPlotError;
use crate::types::sample::Sample;
use crate::types::window::GraphWindow;
use crate::zone::ZoneResolver;
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use log::info;

/// Length of the graph window.
pub const WINDOW_DAYS: i64 = 7;

/// Spacing of the local-time grid the right edge snaps to.
pub const QUARTER_DAY_HOURS: u32 = 6;

/// Returns the right edge of a graph whose newest point is at `local`.
///
/// `local` is pushed forward by 5h55m and then truncated to the 6 hour grid
/// (00:00, 06:00, 12:00, 18:00). A sample up to five minutes past a grid line
/// therefore gets that grid line as its right edge, anything later gets the
/// next one.
pub fn quarter_day_edge(local: NaiveDateTime) -> NaiveDateTime {
    let raw = local + Duration::hours(5) + Duration::minutes(55);
    let hour = raw.hour() - raw.hour() % QUARTER_DAY_HOURS;
    NaiveDateTime::new(raw.date(), NaiveTime::MIN) + Duration::hours(i64::from(hour))
}

/// Computes the graph window ending on the quarter day of `latest`.
///
/// The UTC offset is looked up once, at `latest`, and stored in the window.
///
/// # Errors
///
/// Returns [`SevenDayPlotError::NoData`] when there is no latest sample.
pub fn compute_window(
    latest: Option<&Sample>,
    zone: &dyn ZoneResolver,
) -> Result<GraphWindow, SevenDayPlotError> {
    let latest = latest.ok_or(SevenDayPlotError::NoData)?;
    let utc_offset = zone.offset_at(latest.idx);
    let x_hi = quarter_day_edge(latest.idx.naive_utc() + utc_offset);
    let x_lo = x_hi - Duration::days(WINDOW_DAYS);
    info!(
        "Latest sample at {}, plotting {} to {} (UTC offset {}s)",
        latest.idx,
        x_lo,
        x_hi,
        utc_offset.num_seconds()
    );
    Ok(GraphWindow {
        x_lo,
        x_hi,
        utc_offset,
    })
}
