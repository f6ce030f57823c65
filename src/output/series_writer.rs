use crate::output::error::OutputError;
use crate::output::{write_atomically, SeriesFiles};
use crate::types::series::{Series, SeriesPoint, SevenDaySeries};
use log::info;
use std::path::Path;

const TEMPERATURE_PRECISION: [usize; 2] = [1, 2];
const WIND_PRECISION: [usize; 2] = [2, 2];
const RAIN_PRECISION: [usize; 1] = [1];
const PRESSURE_PRECISION: [usize; 1] = [1];

/// Writes each series to its data file, replacing the previous run's files.
pub fn write_series(files: &SeriesFiles, series: &SevenDaySeries) -> Result<(), OutputError> {
    write_points(
        files.path(Series::Temperature),
        &series.temperature,
        TEMPERATURE_PRECISION,
    )?;
    write_points(files.path(Series::Wind), &series.wind, WIND_PRECISION)?;
    write_points(files.path(Series::Rain), &series.rain, RAIN_PRECISION)?;
    write_points(
        files.path(Series::Pressure),
        &series.pressure,
        PRESSURE_PRECISION,
    )?;
    info!(
        "Wrote {} temperature, {} wind, {} rain and {} pressure lines",
        series.temperature.len(),
        series.wind.len(),
        series.rain.len(),
        series.pressure.len()
    );
    Ok(())
}

fn write_points<const N: usize>(
    path: &Path,
    points: &[SeriesPoint<N>],
    precision: [usize; N],
) -> Result<(), OutputError> {
    write_atomically(path, |w| {
        for point in points {
            writeln!(w, "{}", point.to_line(precision))?;
        }
        Ok(())
    })
}
