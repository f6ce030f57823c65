use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

/// The local-time span covered by the 7 day plot.
///
/// `x_lo` and `x_hi` are wall-clock times in the zone of the latest sample.
/// `utc_offset` is the offset that was in force at that latest sample; it is
/// used for every local/UTC conversion of the run, including the buckets at
/// the far end of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphWindow {
    pub x_lo: NaiveDateTime,
    pub x_hi: NaiveDateTime,
    pub utc_offset: Duration,
}

impl GraphWindow {
    pub fn span(&self) -> Duration {
        self.x_hi - self.x_lo
    }

    /// Converts a local time of this window to UTC using the captured offset.
    pub fn to_utc(&self, local: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&(local - self.utc_offset))
    }

    /// Converts a UTC instant to local time using the captured offset.
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.naive_utc() + self.utc_offset
    }
}
