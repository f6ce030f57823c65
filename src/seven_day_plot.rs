//! Entry point tying the archive, the window calculation, the aggregation and
//! the gnuplot files together for one run.

use crate::aggregate::aggregate;
use crate::config::ConfigStore;
use crate::dew_point::DewPointFn;
use crate::error::{PlotterError, SevenDayPlotError};
use crate::output::error::OutputError;
use crate::output::plot_script::{render_script, write_script};
use crate::output::series_writer::write_series;
use crate::output::SeriesFiles;
use crate::plot_invoker::PlotInvoker;
use crate::store::SampleStore;
use crate::types::window::GraphWindow;
use crate::window::compute_window;
use crate::zone::ZoneResolver;
use bon::bon;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutput {
    pub window: GraphWindow,
    pub files: SeriesFiles,
    pub script: PathBuf,
}

impl PlotOutput {
    /// Hands the script to the plotting program and waits for it.
    pub fn render(&self, invoker: &dyn PlotInvoker) -> Result<(), PlotterError> {
        invoker.run(&self.script)
    }
}

/// The 7 day summary plot of one weather archive.
///
/// # Examples
///
/// ```no_run
/// use seven_day_plot::{Gnuplot, HourlyStore, IniConfig, SevenDayPlot};
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data_dir = Path::new("/var/lib/weather");
/// let store = HourlyStore::new(data_dir);
/// let config = IniConfig::from_data_dir(data_dir)?;
///
/// let plot = SevenDayPlot::new(&store, &chrono::Local, &config);
/// let output = plot
///     .write()
///     .work_dir(Path::new("/tmp/weather"))
///     .output_file(Path::new("7days.png"))
///     .call()?;
/// output.render(&Gnuplot::default())?;
/// # Ok(())
/// # }
/// ```
pub struct SevenDayPlot<'a> {
    store: &'a dyn SampleStore,
    zone: &'a dyn ZoneResolver,
    config: &'a dyn ConfigStore,
}

#[bon]
impl<'a> SevenDayPlot<'a> {
    pub fn new(
        store: &'a dyn SampleStore,
        zone: &'a dyn ZoneResolver,
        config: &'a dyn ConfigStore,
    ) -> Self {
        Self {
            store,
            zone,
            config,
        }
    }

    /// The window ending on the quarter day of the newest sample.
    pub fn window(&self) -> Result<GraphWindow, SevenDayPlotError> {
        let latest = self.store.latest()?;
        compute_window(latest.as_ref(), self.zone)
    }

    /// Writes the four data files and the gnuplot script into `work_dir`.
    ///
    /// The working directory is created when missing. Nothing is written
    /// when the archive is empty or a plot range is malformed.
    ///
    /// # Arguments
    ///
    /// * `.work_dir(&Path)`: **Required.** Directory receiving the files.
    /// * `.output_file(&Path)`: **Required.** Image the script tells gnuplot to create.
    /// * `.dew_point(DewPointFn)`: Optional. Defaults to [`dew_point`].
    ///
    /// # Errors
    ///
    /// Returns [`SevenDayPlotError::NoData`] for an empty archive, and the
    /// store, config or output error of any failing step otherwise.
    #[builder]
    pub fn write(
        &self,
        work_dir: &Path,
        output_file: &Path,
        dew_point: Option<DewPointFn>,
    ) -> Result<PlotOutput, SevenDayPlotError> {
        let window = self.window()?;
        let series = aggregate(
            self.store,
            &window,
            dew_point.unwrap_or(crate::dew_point::dew_point),
        )?;

        let files = SeriesFiles::in_dir(work_dir);
        let script = render_script(&window, &files, output_file, self.config)?;

        fs::create_dir_all(work_dir)
            .map_err(|e| OutputError::WorkDirCreation(work_dir.to_path_buf(), e))?;
        write_series(&files, &series)?;
        let script = write_script(work_dir, &script)?;
        info!("Wrote gnuplot script {:?}", script);

        Ok(PlotOutput {
            window,
            files,
            script,
        })
    }
}
