//! The files handed to gnuplot: four data files and the command script.

pub mod error;
pub mod plot_script;
pub mod series_writer;

use crate::output::error::OutputError;
use crate::types::series::Series;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Locations of the four data files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFiles {
    pub temperature: PathBuf,
    pub wind: PathBuf,
    pub rain: PathBuf,
    pub pressure: PathBuf,
}

impl SeriesFiles {
    pub fn in_dir(work_dir: &Path) -> Self {
        Self {
            temperature: work_dir.join(Series::Temperature.file_name()),
            wind: work_dir.join(Series::Wind.file_name()),
            rain: work_dir.join(Series::Rain.file_name()),
            pressure: work_dir.join(Series::Pressure.file_name()),
        }
    }

    pub fn path(&self, series: Series) -> &Path {
        match series {
            Series::Temperature => &self.temperature,
            Series::Wind => &self.wind,
            Series::Rain => &self.rain,
            Series::Pressure => &self.pressure,
        }
    }
}

/// Writes `path` through a temporary file in the same directory that then
/// replaces it, so readers see either the old or the complete new content.
pub(crate) fn write_atomically<F>(path: &Path, write: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp =
        NamedTempFile::new_in(dir).map_err(|e| OutputError::TempFile(dir.to_path_buf(), e))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer).map_err(|e| OutputError::Write(path.to_path_buf(), e))?;
        writer
            .flush()
            .map_err(|e| OutputError::Write(path.to_path_buf(), e))?;
    }
    temp.persist(path)
        .map_err(|e| OutputError::Persist(path.to_path_buf(), e.error))?;
    debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomically_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.dat");
        fs::write(&path, "old content that is longer\n").unwrap();

        write_atomically(&path, |w| w.write_all(b"new\n")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        // No temporary files are left behind.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.dat");
        fs::write(&path, "previous\n").unwrap();

        let result = write_atomically(&path, |w| {
            w.write_all(b"partial")?;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        });
        assert!(matches!(result, Err(OutputError::Write(..))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_series_files_in_dir() {
        let files = SeriesFiles::in_dir(Path::new("/tmp/work"));
        assert_eq!(files.path(Series::Rain), Path::new("/tmp/work/plot_7_rain.dat"));
        assert_eq!(files.temperature, PathBuf::from("/tmp/work/plot_7_temp.dat"));
    }
}
