use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate item id in catalog: {0}")]
    DuplicateId(String),

    #[error("invalid timer duration: {0} seconds")]
    InvalidTimerDuration(f64),

    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level config: {0}")]
    Parse(#[from] serde_json::Error),
}
