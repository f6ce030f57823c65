//! The on-disk hourly archive.
//!
//! One header-less CSV file per UTC day, stored as
//! `<data_dir>/hourly/<YYYY>/<YYYY-MM>/<YYYY-MM-DD>.txt`. Each row holds
//! `idx,temp_out,hum_out,wind_ave,wind_gust,pressure,rain`, with `idx` formatted
//! as `YYYY-MM-DD HH:MM:SS` (UTC) and an empty field for a missing value.

use crate::store::error::StoreError;
use crate::store::SampleStore;
use crate::types::sample::Sample;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use log::{debug, info, warn};
use polars::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

const HOURLY_DIR_NAME: &str = "hourly";
const IDX_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SCHEMA_COLUMN_NAMES: [&str; 7] = [
    "idx",
    "temp_out",
    "hum_out",
    "wind_ave",
    "wind_gust",
    "pressure",
    "rain",
];

/// A [`SampleStore`] reading the day files of the hourly archive.
///
/// Parsed days are cached for the lifetime of the store, so walking the
/// 29 buckets of a plot reads each day file once.
pub struct HourlyStore {
    root: PathBuf,
    cache: RefCell<HashMap<NaiveDate, Rc<Vec<Sample>>>>,
}

impl HourlyStore {
    pub fn new(data_dir: &Path) -> HourlyStore {
        HourlyStore {
            root: data_dir.join(HOURLY_DIR_NAME),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Path of the file holding the samples of `date`.
    pub fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(date.format("%Y").to_string())
            .join(date.format("%Y-%m").to_string())
            .join(format!("{}.txt", date.format("%Y-%m-%d")))
    }

    fn day_samples(&self, date: NaiveDate) -> Result<Rc<Vec<Sample>>, StoreError> {
        if let Some(samples) = self.cache.borrow().get(&date) {
            return Ok(Rc::clone(samples));
        }
        let path = self.day_file(date);
        let samples = if path.is_file() {
            let samples = read_day_file(&path)?;
            debug!("Loaded {} samples from {:?}", samples.len(), path);
            Rc::new(samples)
        } else {
            Rc::new(Vec::new())
        };
        self.cache.borrow_mut().insert(date, Rc::clone(&samples));
        Ok(samples)
    }

    /// Dates of all day files in the archive, oldest first.
    fn available_days(&self) -> Result<Vec<NaiveDate>, StoreError> {
        if !self.root.is_dir() {
            warn!("Hourly data directory {:?} does not exist", self.root);
            return Ok(Vec::new());
        }
        let mut days = Vec::new();
        for year_dir in sub_dirs(&self.root)? {
            for month_dir in sub_dirs(&year_dir)? {
                let entries = fs::read_dir(&month_dir)
                    .map_err(|e| StoreError::DirectoryRead(month_dir.clone(), e))?;
                for entry in entries {
                    let path = entry
                        .map_err(|e| StoreError::DirectoryRead(month_dir.clone(), e))?
                        .path();
                    if let Some(date) = day_file_date(&path) {
                        days.push(date);
                    }
                }
            }
        }
        days.sort();
        info!("Found {} day files under {:?}", days.len(), self.root);
        Ok(days)
    }
}

impl SampleStore for HourlyStore {
    fn range(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<Vec<Sample>, StoreError> {
        if start >= stop {
            return Ok(Vec::new());
        }
        let last_day = (stop - Duration::nanoseconds(1)).date_naive();
        let mut samples = Vec::new();
        for day in start.date_naive().iter_days().take_while(|day| *day <= last_day) {
            samples.extend(
                self.day_samples(day)?
                    .iter()
                    .filter(|sample| sample.idx >= start && sample.idx < stop)
                    .cloned(),
            );
        }
        Ok(samples)
    }

    fn latest_before(&self, instant: DateTime<Utc>) -> Result<Option<Sample>, StoreError> {
        let last_day = instant.date_naive();
        for day in self.available_days()?.into_iter().rev() {
            if day > last_day {
                continue;
            }
            let samples = self.day_samples(day)?;
            if let Some(sample) = samples.iter().rev().find(|sample| sample.idx < instant) {
                return Ok(Some(sample.clone()));
            }
        }
        Ok(None)
    }
}

fn sub_dirs(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    let mut dirs = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| StoreError::DirectoryRead(dir.to_path_buf(), e))?;
    for entry in entries {
        let path = entry
            .map_err(|e| StoreError::DirectoryRead(dir.to_path_buf(), e))?
            .path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

fn day_file_date(path: &Path) -> Option<NaiveDate> {
    if path.extension()? != "txt" {
        return None;
    }
    NaiveDate::parse_from_str(path.file_stem()?.to_str()?, "%Y-%m-%d").ok()
}

/// Parses one day file into samples sorted by timestamp.
fn read_day_file(path: &Path) -> Result<Vec<Sample>, StoreError> {
    let metadata =
        fs::metadata(path).map_err(|e| StoreError::MetadataRead(path.to_path_buf(), e))?;
    if metadata.len() == 0 {
        warn!("Skipping empty data file {:?}", path);
        return Ok(Vec::new());
    }

    // Scan every row for dtypes; a column can start with whole numbers.
    let mut df = CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| StoreError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| StoreError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    if df.width() != SCHEMA_COLUMN_NAMES.len() {
        warn!(
            "CSV column count ({}) does not match schema length ({}) in {:?}",
            df.width(),
            SCHEMA_COLUMN_NAMES.len(),
            path
        );
        return Err(StoreError::SchemaMismatch {
            path: path.to_path_buf(),
            expected: SCHEMA_COLUMN_NAMES.len(),
            found: df.width(),
        });
    }
    df.set_column_names(SCHEMA_COLUMN_NAMES.iter().copied())
        .map_err(|e| StoreError::ColumnOperation {
            path: path.to_path_buf(),
            column: "*".to_string(),
            source: e,
        })?;

    let idx = timestamp_column(&df, path)?;
    let temp_out = float_column(&df, "temp_out", path)?;
    let hum_out = float_column(&df, "hum_out", path)?;
    let wind_ave = float_column(&df, "wind_ave", path)?;
    let wind_gust = float_column(&df, "wind_gust", path)?;
    let pressure = float_column(&df, "pressure", path)?;
    let rain = float_column(&df, "rain", path)?;

    let mut samples: Vec<Sample> = (0..df.height())
        .map(|row| Sample {
            idx: idx[row],
            temp_out: temp_out[row],
            hum_out: hum_out[row],
            wind_ave: wind_ave[row],
            wind_gust: wind_gust[row],
            pressure: pressure[row],
            rain: rain[row],
        })
        .collect();
    samples.sort_by_key(|sample| sample.idx);
    Ok(samples)
}

fn column_error(path: &Path, column: &str) -> impl FnOnce(PolarsError) -> StoreError {
    let path = path.to_path_buf();
    let column = column.to_string();
    move |source| StoreError::ColumnOperation {
        path,
        column,
        source,
    }
}

fn float_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<Option<f64>>, StoreError> {
    let column = df
        .column(name)
        .map_err(column_error(path, name))?
        .cast(&DataType::Float64)
        .map_err(column_error(path, name))?;
    let values = column
        .f64()
        .map_err(column_error(path, name))?
        .into_iter()
        .collect();
    Ok(values)
}

fn timestamp_column(df: &DataFrame, path: &Path) -> Result<Vec<DateTime<Utc>>, StoreError> {
    let column = df.column("idx").map_err(column_error(path, "idx"))?;
    let strings = column.str().map_err(column_error(path, "idx"))?;
    strings
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.ok_or_else(|| StoreError::MissingTimestamp {
                path: path.to_path_buf(),
                row,
            })?;
            NaiveDateTime::parse_from_str(value.trim(), IDX_FORMAT)
                .map(|naive| naive.and_utc())
                .map_err(|e| StoreError::InvalidTimestamp {
                    path: path.to_path_buf(),
                    value: value.to_string(),
                    source: e,
                })
        })
        .collect()
}
