//! Station configuration, as stored in the data directory's `weather.ini`.

pub mod error;

use crate::config::error::ConfigError;
use crate::types::series::Series;
use ini::Ini;
use log::info;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "weather.ini";
pub const PLOT_RANGE_SECTION: &str = "plot range";

/// Read access to `[section] key = value` settings.
pub trait ConfigStore {
    fn get(&self, section: &str, key: &str) -> Option<String>;

    fn get_or(&self, section: &str, key: &str, default: &str) -> String {
        self.get(section, key)
            .unwrap_or_else(|| default.to_string())
    }
}

/// A [`ConfigStore`] backed by an INI file.
pub struct IniConfig {
    ini: Ini,
}

impl IniConfig {
    /// Loads `path`. A missing file is an empty configuration, so every
    /// lookup falls back to its default.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No configuration file at {:?}, using defaults", path);
            return Ok(Self { ini: Ini::new() });
        }
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Load(path.to_path_buf(), e))?;
        Ok(Self { ini })
    }

    pub fn from_data_dir(data_dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&data_dir.join(CONFIG_FILE_NAME))
    }
}

impl FromStr for IniConfig {
    type Err = ini::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            ini: Ini::load_from_str(s)?,
        })
    }
}

impl ConfigStore for IniConfig {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get_from(Some(section), key).map(str::to_string)
    }
}

/// The y axis range of one plot panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub lo: f64,
    pub hi: f64,
}

impl AxisRange {
    /// Reads the range of `series` from the `plot range` section, using the
    /// series default when the key is absent.
    pub fn for_series(config: &dyn ConfigStore, series: Series) -> Result<Self, ConfigError> {
        let value = config.get_or(PLOT_RANGE_SECTION, series.range_key(), series.default_range());
        Self::parse(&value).ok_or(ConfigError::InvalidRange { series, value })
    }

    /// Parses `"lo, hi"`, optionally wrapped in parentheses or brackets.
    fn parse(value: &str) -> Option<Self> {
        let inner = value
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);
        let mut parts = inner.split(',').map(str::trim);
        let lo = parts.next()?.parse::<f64>().ok()?;
        let hi = parts.next()?.parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        (lo.is_finite() && hi.is_finite() && lo < hi).then_some(Self { lo, hi })
    }

    /// gnuplot `[lo:hi]` notation, bounds truncated to integers.
    pub fn to_gnuplot(&self) -> String {
        format!("[{}:{}]", self.lo.trunc() as i64, self.hi.trunc() as i64)
    }
}
