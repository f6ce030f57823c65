use crate::types::series::Series;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration file '{0}'")]
    Load(PathBuf, #[source] ini::Error),

    #[error("Invalid {series} plot range '{value}': expected two increasing numbers, e.g. \"{}\"", .series.default_range())]
    InvalidRange { series: Series, value: String },
}
