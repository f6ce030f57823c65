use crate::error::PlotterError;
use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the external plotting program on a script.
pub trait PlotInvoker {
    fn run(&self, script: &Path) -> Result<(), PlotterError>;
}

/// Invokes gnuplot and waits for it to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gnuplot {
    program: PathBuf,
}

impl Gnuplot {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Gnuplot {
    fn default() -> Self {
        Self::new("gnuplot")
    }
}

impl PlotInvoker for Gnuplot {
    fn run(&self, script: &Path) -> Result<(), PlotterError> {
        info!("Running {} {}", self.program.display(), script.display());
        let status = Command::new(&self.program)
            .arg(script)
            .status()
            .map_err(|e| PlotterError::Spawn(self.program.clone(), e))?;
        if !status.success() {
            return Err(PlotterError::Failed {
                program: self.program.clone(),
                script: script.to_path_buf(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_fails_to_spawn() {
        let gnuplot = Gnuplot::new("/nonexistent/bin/gnuplot");
        let err = gnuplot.run(Path::new("plot_7.cmd")).unwrap_err();
        assert!(matches!(err, PlotterError::Spawn(..)));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_checked() {
        assert!(Gnuplot::new("true").run(Path::new("plot_7.cmd")).is_ok());
        let err = Gnuplot::new("false").run(Path::new("plot_7.cmd")).unwrap_err();
        assert!(matches!(err, PlotterError::Failed { .. }));
    }
}
