use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read data directory '{0}'")]
    DirectoryRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to read metadata for data file '{0}'")]
    MetadataRead(PathBuf, #[source] std::io::Error),

    #[error("Parsing error reading CSV data file '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("CSV column count ({found}) does not match schema length ({expected}) in '{path}'")]
    SchemaMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Failed column operation '{column}' on data file '{path}'")]
    ColumnOperation {
        path: PathBuf,
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Row {row} of '{path}' has no timestamp")]
    MissingTimestamp { path: PathBuf, row: usize },

    #[error("Invalid timestamp '{value}' in '{path}'")]
    InvalidTimestamp {
        path: PathBuf,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
