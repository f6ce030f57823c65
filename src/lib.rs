mod aggregate;
mod config;
mod dew_point;
mod error;
mod output;
mod plot_invoker;
mod seven_day_plot;
mod store;
mod types;
mod window;
mod zone;

pub use error::{PlotterError, SevenDayPlotError};
pub use seven_day_plot::*;

pub use types::sample::Sample;
pub use types::series::{Series, SeriesPoint, SevenDaySeries, TIMESTAMP_FORMAT};
pub use types::window::GraphWindow;

pub use store::hourly_store::HourlyStore;
pub use store::memory_store::MemoryStore;
pub use store::SampleStore;

pub use config::{AxisRange, ConfigStore, IniConfig, CONFIG_FILE_NAME, PLOT_RANGE_SECTION};

pub use aggregate::{aggregate, buckets, mps_to_mph, Bucket, BUCKET_COUNT, BUCKET_HOURS};
pub use dew_point::{dew_point, DewPointFn};
pub use window::{compute_window, quarter_day_edge, QUARTER_DAY_HOURS, WINDOW_DAYS};
pub use zone::ZoneResolver;

pub use output::plot_script::{render_script, write_script, SCRIPT_FILE_NAME};
pub use output::series_writer::write_series;
pub use output::SeriesFiles;
pub use plot_invoker::{Gnuplot, PlotInvoker};

pub use config::error::ConfigError;
pub use output::error::OutputError;
pub use store::error::StoreError;
