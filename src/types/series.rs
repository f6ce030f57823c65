//! Aggregated plot series and the names of the files they are written to.

use chrono::NaiveDateTime;
use std::fmt;

/// Timestamp layout of every data file line (local time, no offset suffix).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A local timestamp with `N` values, i.e. one line of a data file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint<const N: usize> {
    pub time: NaiveDateTime,
    pub values: [f64; N],
}

impl<const N: usize> SeriesPoint<N> {
    pub fn new(time: NaiveDateTime, values: [f64; N]) -> Self {
        Self { time, values }
    }

    /// Formats the point as a space separated line, value `i` printed with
    /// `precision[i]` decimals.
    pub fn to_line(&self, precision: [usize; N]) -> String {
        let mut line = self.time.format(TIMESTAMP_FORMAT).to_string();
        for (value, digits) in self.values.iter().zip(precision) {
            line.push(' ');
            line.push_str(&format!("{:.*}", digits, value));
        }
        line
    }
}

/// The four series of the 7 day plot, in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SevenDaySeries {
    /// Temperature and dew point, °C.
    pub temperature: Vec<SeriesPoint<2>>,
    /// Average and gust wind speed, mph.
    pub wind: Vec<SeriesPoint<2>>,
    /// Pressure, hPa.
    pub pressure: Vec<SeriesPoint<1>>,
    /// Rainfall per 6 hour bucket, mm, stamped at the bucket centre.
    pub rain: Vec<SeriesPoint<1>>,
}

/// Identifies one panel of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Temperature,
    Wind,
    Rain,
    Pressure,
}

impl Series {
    /// Panels in the order they are stacked, top to bottom.
    pub const ALL: [Series; 4] = [
        Series::Temperature,
        Series::Wind,
        Series::Rain,
        Series::Pressure,
    ];

    /// Name of the data file of this series inside the working directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Series::Temperature => "plot_7_temp.dat",
            Series::Wind => "plot_7_wind.dat",
            Series::Rain => "plot_7_rain.dat",
            Series::Pressure => "plot_7_pressure.dat",
        }
    }

    /// Key of the y axis range in the `plot range` config section.
    pub(crate) fn range_key(&self) -> &'static str {
        match self {
            Series::Temperature => "temp",
            Series::Wind => "wind",
            Series::Rain => "rain 6-hour",
            Series::Pressure => "pressure",
        }
    }

    pub(crate) fn default_range(&self) -> &'static str {
        match self {
            Series::Temperature => "-5, 30",
            Series::Wind => "0, 25",
            Series::Rain => "0, 16",
            Series::Pressure => "980, 1050",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Series::Temperature => "temperature",
            Series::Wind => "wind",
            Series::Rain => "rainfall",
            Series::Pressure => "pressure",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_line_uses_iso_timestamp_and_per_value_precision() {
        let point = SeriesPoint::new(noon(), [18.46, 10.584472887821228]);
        assert_eq!(point.to_line([1, 2]), "2024-03-10T12:00:00 18.5 10.58");

        let rain = SeriesPoint::new(noon(), [0.0]);
        assert_eq!(rain.to_line([1]), "2024-03-10T12:00:00 0.0");
    }

    #[test]
    fn test_series_file_names_are_distinct() {
        let mut names: Vec<_> = Series::ALL.iter().map(Series::file_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
