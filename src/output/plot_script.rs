//! The gnuplot command file drawing the four stacked panels.

use crate::config::error::ConfigError;
use crate::config::{AxisRange, ConfigStore};
use crate::output::error::OutputError;
use crate::output::{write_atomically, SeriesFiles};
use crate::types::series::{Series, TIMESTAMP_FORMAT};
use crate::types::window::GraphWindow;
use std::path::{Path, PathBuf};

pub const SCRIPT_FILE_NAME: &str = "plot_7.cmd";

const SECONDS_PER_DAY: i64 = 24 * 3600;
// Slightly narrower than the 6 hour bucket so neighbouring bars stay apart.
const RAIN_BOX_WIDTH_SECONDS: i64 = 2800 * 6;

/// Generates the script text.
///
/// Every axis range is resolved before any text is produced, so a bad range
/// fails the run without a half-written script.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRange`] naming the first series whose range
/// cannot be parsed.
pub fn render_script(
    window: &GraphWindow,
    files: &SeriesFiles,
    output_file: &Path,
    config: &dyn ConfigStore,
) -> Result<String, ConfigError> {
    let [temperature, wind, rain, pressure] =
        Series::ALL.map(|series| AxisRange::for_series(config, series));
    let (temperature, wind, rain, pressure) = (temperature?, wind?, rain?, pressure?);

    let temp_file = files.temperature.display();
    let wind_file = files.wind.display();
    let rain_file = files.rain.display();
    let pressure_file = files.pressure.display();

    let lines = [
        "set terminal png large size 600,800".to_string(),
        format!("set output \"{}\"", output_file.display()),
        "set xdata time".to_string(),
        format!("set timefmt \"{}\"", TIMESTAMP_FORMAT),
        format!(
            "set xrange [\"{}\":\"{}\"]",
            window.x_lo.format(TIMESTAMP_FORMAT),
            window.x_hi.format(TIMESTAMP_FORMAT)
        ),
        format!("set xtics offset 4.3,0 {}", SECONDS_PER_DAY),
        "set lmargin 3".to_string(),
        "set bmargin 0.9".to_string(),
        "set multiplot layout 4,1".to_string(),
        "set format x \"%a %d\"".to_string(),
        // temperature
        format!("set yrange {}", temperature.to_gnuplot()),
        format!(
            "plot \"{}\" using 1:2 title \"Temperature (°C)\" smooth unique, \\",
            temp_file
        ),
        format!(
            "     \"{}\" using 1:3 title \"Dew point (°C)\" smooth unique lc 3",
            temp_file
        ),
        // wind
        format!("set yrange {}", wind.to_gnuplot()),
        format!(
            "plot \"{}\" using 1:3 title \"Wind speed: gust (mph)\" smooth unique lc 4, \\",
            wind_file
        ),
        format!(
            "     \"{}\" using 1:2 title \"average (mph)\" smooth unique lc 3",
            wind_file
        ),
        // rain
        format!("set yrange {}", rain.to_gnuplot()),
        "set style fill solid".to_string(),
        format!("set boxwidth {}", RAIN_BOX_WIDTH_SECONDS),
        format!(
            "plot \"{}\" using 1:2 title \"6-hourly rainfall (mm)\" lc 5 lw 0 with boxes",
            rain_file
        ),
        // only the bottom panel gets an x label
        "set xlabel \"Day\"".to_string(),
        "set bmargin".to_string(),
        format!("set yrange {}", pressure.to_gnuplot()),
        format!(
            "plot \"{}\" using 1:2 title \"Pressure (hPa)\" smooth unique lc 2",
            pressure_file
        ),
    ];
    Ok(lines.join("\n") + "\n")
}

/// Writes `script` as [`SCRIPT_FILE_NAME`] in `work_dir`.
pub fn write_script(work_dir: &Path, script: &str) -> Result<PathBuf, OutputError> {
    let path = work_dir.join(SCRIPT_FILE_NAME);
    write_atomically(&path, |w| w.write_all(script.as_bytes()))?;
    Ok(path)
}
