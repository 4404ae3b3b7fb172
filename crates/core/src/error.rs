use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("header row has no index column")]
    MissingIndex,
    #[error("row {row}: cannot parse index value {value:?} as a date")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: column {column}: cannot parse {value:?} as a number")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error("table has no rows")]
    Empty,
    #[error("missing required column: {0}")]
    MissingColumn(String),
}

#[derive(Debug, Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize chart: {0}")]
    Chart(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
