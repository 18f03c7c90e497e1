use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a target-field list from disk.
#[derive(Debug, Error)]
pub enum TargetsError {
    /// The file could not be read.
    #[error("failed to read target fields file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was not valid JSON, or a record failed field validation.
    #[error("failed to parse target fields file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
