use crate::config::error::ConfigError;
use crate::output::error::OutputError;
use crate::store::error::StoreError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SevenDayPlotError {
    #[error("No hourly summary data available, nothing to plot")]
    NoData,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Plotter(#[from] PlotterError),
}

#[derive(Debug, Error)]
pub enum PlotterError {
    #[error("Failed to start plotting program '{0}'")]
    Spawn(PathBuf, #[source] std::io::Error),

    #[error("Plotting program '{program}' failed ({status}) on script '{script}'")]
    Failed {
        program: PathBuf,
        script: PathBuf,
        status: ExitStatus,
    },
}
