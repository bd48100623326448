//! ag-data: canonical dataset file format, validation, and the two
//! providers the graph core consumes (airport registry, route source).

pub mod registry;
pub mod routes;
pub mod schema;
pub mod validate;

pub use registry::AirportRegistry;
pub use routes::{Route, RouteSource};
pub use schema::*;
pub use validate::{ValidationError, validate_dataset};

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> DataResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_yaml::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

pub fn save_yaml(path: &std::path::Path, dataset: &Dataset) -> DataResult<()> {
    validate_dataset(dataset)?;
    let content = serde_yaml::to_string(dataset)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> DataResult<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = serde_json::from_str(&content)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

pub fn save_json(path: &std::path::Path, dataset: &Dataset) -> DataResult<()> {
    validate_dataset(dataset)?;
    let content = serde_json::to_string_pretty(dataset)?;
    std::fs::write(path, content)?;
    Ok(())
}
