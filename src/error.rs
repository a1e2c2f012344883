use thiserror::Error;

/// Failures surfaced by the ingestion, directory and analysis services.
///
/// Empty query results are not errors; they are modelled as explicit
/// "no data" outcomes by the analysis service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request was malformed and never reached the store.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A read or write against the store failed.
    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Storage(err)
    }
}

/// Convenience alias used by the service modules.
pub type Result<T> = std::result::Result<T, ServiceError>;
