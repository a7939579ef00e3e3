use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetricsError>;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Unable to read file {path:?}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("Unable to parse sprint snapshot {path:?}")]
    ParseSnapshot {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unable to parse translations {path:?}")]
    ParseTranslations {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unable to render report for sprint `{sprint}`: {reason}")]
    Render { sprint: String, reason: String },
    #[error("Unable to write report {path:?}")]
    WriteReport { path: PathBuf, source: io::Error },
    #[error("Background task failed")]
    Task(#[from] tokio::task::JoinError),
}
