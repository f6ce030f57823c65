use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use log::info;
use seven_day_plot::{
    Gnuplot, HourlyStore, IniConfig, SevenDayPlot, SevenDayPlotError, ZoneResolver,
};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_ARGUMENT_COUNT: u8 = 2;
const EXIT_NO_DATA: u8 = 4;

/// Plot temperature, wind, rainfall and pressure for the last 7 days.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    override_usage = "plot-7days [OPTIONS] <DATA_DIR> <WORK_DIR> <OUTPUT_FILE>"
)]
struct Cli {
    /// Weather data directory, working directory and output image
    #[arg(value_name = "PATHS", value_hint = ValueHint::AnyPath)]
    paths: Vec<PathBuf>,

    /// IANA time zone the graph is drawn in (defaults to the system zone)
    #[arg(long, value_parser = parse_zone)]
    timezone: Option<Tz>,

    /// Plotting program run on the generated script
    #[arg(long, default_value = "gnuplot", value_hint = ValueHint::CommandName)]
    gnuplot: PathBuf,

    /// Write the data files and script without running gnuplot
    #[arg(long, action = ArgAction::SetTrue)]
    no_plot: bool,

    /// Verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

struct Paths {
    data_dir: PathBuf,
    work_dir: PathBuf,
    output_file: PathBuf,
}

fn parse_zone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>().map_err(|e| e.to_string())
}

impl Paths {
    /// Splits the positionals, or returns how many there were.
    fn from_args(args: Vec<PathBuf>) -> std::result::Result<Self, usize> {
        let [data_dir, work_dir, output_file] =
            <[PathBuf; 3]>::try_from(args).map_err(|args| args.len())?;
        Ok(Paths {
            data_dir,
            work_dir,
            output_file,
        })
    }
}

/// Exit code for a command line clap rejected or answered itself.
fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

fn run_exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SevenDayPlotError>() {
        Some(SevenDayPlotError::NoData) => EXIT_NO_DATA,
        _ => EXIT_FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Nothing left to report a failed write of the message to.
            err.print().ok();
            return ExitCode::from(parse_exit_code(err.kind()));
        }
    };

    let paths = match Paths::from_args(cli.paths.clone()) {
        Ok(paths) => paths,
        Err(found) => {
            eprintln!("Error: 3 arguments required, got {}\n", found);
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::from(EXIT_ARGUMENT_COUNT);
        }
    };

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match run(&cli, &paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = run_exit_code(&err);
            if code == EXIT_NO_DATA {
                eprintln!("No hourly summary data in {}", paths.data_dir.display());
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli, paths: &Paths) -> Result<()> {
    let zone: Box<dyn ZoneResolver> = match cli.timezone {
        Some(tz) => Box::new(tz),
        None => Box::new(chrono::Local),
    };
    let store = HourlyStore::new(&paths.data_dir);
    let config = IniConfig::from_data_dir(&paths.data_dir)?;

    let plot = SevenDayPlot::new(&store, zone.as_ref(), &config);
    let output = plot
        .write()
        .work_dir(&paths.work_dir)
        .output_file(&paths.output_file)
        .call()?;

    if cli.no_plot {
        info!("Skipping plot, script left at {:?}", output.script);
        return Ok(());
    }
    output
        .render(&Gnuplot::new(&cli.gnuplot))
        .with_context(|| format!("Failed to render {}", paths.output_file.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seven_day_plot::{ConfigError, Series};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("plot-7days").chain(args.iter().copied()))
    }

    #[test]
    fn test_help_exits_zero() {
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 0);
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 0);
    }

    #[test]
    fn test_unknown_flag_exits_one() {
        let err = parse(&["--bogus", "a", "b", "c"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 1);
        let err = parse(&["--timezone", "Mars/Olympus", "a", "b", "c"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 1);
    }

    #[test]
    fn test_positional_count_is_checked() {
        let cli = parse(&["data", "work"]).unwrap();
        assert_eq!(Paths::from_args(cli.paths).err(), Some(2));
        let cli = parse(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(Paths::from_args(cli.paths).err(), Some(4));

        let cli = parse(&["--no-plot", "data", "work", "7days.png"]).unwrap();
        let paths = Paths::from_args(cli.paths).unwrap();
        assert_eq!(paths.data_dir, PathBuf::from("data"));
        assert_eq!(paths.output_file, PathBuf::from("7days.png"));
        assert_eq!(EXIT_ARGUMENT_COUNT, 2);
    }

    #[test]
    fn test_run_error_exit_codes() {
        assert_eq!(run_exit_code(&SevenDayPlotError::NoData.into()), 4);
        let bad_range = SevenDayPlotError::from(ConfigError::InvalidRange {
            series: Series::Wind,
            value: "x".to_string(),
        });
        assert_eq!(run_exit_code(&bad_range.into()), 1);
        assert_eq!(run_exit_code(&anyhow::anyhow!("gnuplot exploded")), 1);
    }

    #[test]
    fn test_empty_archive_exits_four_without_files() {
        let dir = TempDir::new().unwrap();
        let work_dir = dir.path().join("work");
        let data_dir = dir.path().to_str().unwrap();
        let cli = parse(&[
            "--no-plot",
            "--timezone",
            "UTC",
            data_dir,
            work_dir.to_str().unwrap(),
            "7days.png",
        ])
        .unwrap();
        let paths = Paths::from_args(cli.paths.clone()).unwrap();

        let err = run(&cli, &paths).unwrap_err();
        assert_eq!(run_exit_code(&err), EXIT_NO_DATA);
        assert!(!work_dir.exists());
    }
}
