use chrono::{DateTime, Utc};

/// One record of the hourly weather archive.
///
/// Every measurement is optional: a `None` means the station did not report
/// that value, and it is never replaced by a default when plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    /// Time of the record (UTC).
    pub idx: DateTime<Utc>,
    /// Outdoor temperature in °C.
    pub temp_out: Option<f64>,
    /// Outdoor relative humidity in %.
    pub hum_out: Option<f64>,
    /// Average wind speed in m/s.
    pub wind_ave: Option<f64>,
    /// Wind gust speed in m/s.
    pub wind_gust: Option<f64>,
    /// Barometric pressure in hPa.
    pub pressure: Option<f64>,
    /// Rainfall in mm since the previous record.
    pub rain: Option<f64>,
}

impl Sample {
    pub fn new(idx: DateTime<Utc>) -> Self {
        Self {
            idx,
            ..Default::default()
        }
    }

    /// Temperature and humidity, only when both were recorded.
    pub fn temperature_and_humidity(&self) -> Option<(f64, f64)> {
        Some((self.temp_out?, self.hum_out?))
    }

    /// Average and gust wind speed, only when both were recorded.
    pub fn wind(&self) -> Option<(f64, f64)> {
        Some((self.wind_ave?, self.wind_gust?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_paired_fields_need_both_values() {
        let mut sample = Sample::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());
        sample.temp_out = Some(18.5);
        sample.wind_gust = Some(9.0);

        assert_eq!(sample.temperature_and_humidity(), None);
        assert_eq!(sample.wind(), None);

        sample.hum_out = Some(60.0);
        sample.wind_ave = Some(5.0);
        assert_eq!(sample.temperature_and_humidity(), Some((18.5, 60.0)));
        assert_eq!(sample.wind(), Some((5.0, 9.0)));
    }
}
