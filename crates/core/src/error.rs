use thiserror::Error;

/// Fatal failures. Either one aborts a run before any aggregation starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
