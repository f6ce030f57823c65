use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create working directory '{0}'")]
    WorkDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to create temporary file in '{0}'")]
    TempFile(PathBuf, #[source] std::io::Error),

    #[error("I/O error writing '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to replace '{0}' with the new version")]
    Persist(PathBuf, #[source] std::io::Error),
}
