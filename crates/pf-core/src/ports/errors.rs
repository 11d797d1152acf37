use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum PortfolioSourceError {
    #[error("portfolio data not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read portfolio data {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed portfolio data: {0}")]
    Malformed(#[from] serde_json::Error),
}
