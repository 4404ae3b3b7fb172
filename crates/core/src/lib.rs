pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod report;

pub use error::{DataLoadError, Error, WriteError};
pub use pipeline::{generate, run};
