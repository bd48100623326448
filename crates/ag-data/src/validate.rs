//! Dataset validation logic.

use crate::schema::{DATASET_VERSION, Dataset};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported dataset version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate airport id: {id}")]
    DuplicateAirportId { id: u32 },

    #[error("Duplicate airport code: {code}")]
    DuplicateAirportCode { code: String },

    #[error("Unknown airport {id} referenced by {context}")]
    UnknownAirport { id: u32, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub fn validate_dataset(dataset: &Dataset) -> Result<(), ValidationError> {
    if dataset.version > DATASET_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: dataset.version,
        });
    }

    let mut ids = HashSet::new();
    let mut codes = HashSet::new();
    for airport in &dataset.airports {
        if airport.code.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "airport.code",
                value: format!("(airport id {})", airport.id),
                reason: "code must not be empty",
            });
        }
        if !ids.insert(airport.id) {
            return Err(ValidationError::DuplicateAirportId { id: airport.id });
        }
        if !codes.insert(airport.code.to_ascii_uppercase()) {
            return Err(ValidationError::DuplicateAirportCode {
                code: airport.code.clone(),
            });
        }
    }

    for (i, flight) in dataset.flights.iter().enumerate() {
        if flight.airline.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "flight.airline",
                value: format!("(flights[{i}])"),
                reason: "airline must not be empty",
            });
        }
        if flight.count == 0 {
            return Err(ValidationError::InvalidValue {
                field: "flight.count",
                value: "0".to_string(),
                reason: "count must be positive",
            });
        }
        if !ids.contains(&flight.origin) {
            return Err(ValidationError::UnknownAirport {
                id: flight.origin,
                context: format!("flights[{i}] origin"),
            });
        }
        if !ids.contains(&flight.destination) {
            return Err(ValidationError::UnknownAirport {
                id: flight.destination,
                context: format!("flights[{i}] destination"),
            });
        }
    }

    Ok(())
}
