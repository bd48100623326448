//! Error types for the ag-app service layer.

use ag_core::AgError;

/// Application error type that wraps errors from the backend crates and
/// provides one interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Airport not found: {0}")]
    AirportNotFound(String),

    #[error(transparent)]
    Graph(#[from] AgError),
}

/// Result type for ag-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ag_data::DataError> for AppError {
    fn from(err: ag_data::DataError) -> Self {
        AppError::Dataset(err.to_string())
    }
}

impl From<ag_data::ValidationError> for AppError {
    fn from(err: ag_data::ValidationError) -> Self {
        AppError::Dataset(err.to_string())
    }
}
