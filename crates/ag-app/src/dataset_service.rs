//! Dataset loading and introspection.

use std::collections::HashSet;
use std::path::Path;

use ag_data::Dataset;

use crate::error::AppResult;

/// Summary of a dataset for listing.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub name: String,
    pub airport_count: usize,
    pub flight_record_count: usize,
    pub airline_count: usize,
}

/// Load and validate a dataset file, YAML or JSON by extension.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    let dataset = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ag_data::load_json(path)?,
        _ => ag_data::load_yaml(path)?,
    };
    Ok(dataset)
}

/// Summarize a dataset's contents.
pub fn dataset_summary(dataset: &Dataset) -> DatasetSummary {
    let airlines: HashSet<&str> = dataset
        .flights
        .iter()
        .map(|f| f.airline.as_str())
        .collect();

    DatasetSummary {
        name: dataset.name.clone(),
        airport_count: dataset.airports.len(),
        flight_record_count: dataset.flights.len(),
        airline_count: airlines.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_data::{AirportDef, DATASET_VERSION, FlightDef};

    #[test]
    fn summary_counts_distinct_airlines() {
        let dataset = Dataset {
            version: DATASET_VERSION,
            name: "summary".to_string(),
            airports: vec![
                AirportDef {
                    id: 1,
                    code: "AAA".to_string(),
                    name: "Alpha Intl".to_string(),
                    city: "Alphaville".to_string(),
                    state: None,
                    country: None,
                    latitude: None,
                    longitude: None,
                },
                AirportDef {
                    id: 2,
                    code: "BBB".to_string(),
                    name: "Beta Field".to_string(),
                    city: "Betatown".to_string(),
                    state: None,
                    country: None,
                    latitude: None,
                    longitude: None,
                },
            ],
            flights: vec![
                FlightDef {
                    airline: "WN".to_string(),
                    origin: 1,
                    destination: 2,
                    count: 1,
                },
                FlightDef {
                    airline: "WN".to_string(),
                    origin: 2,
                    destination: 1,
                    count: 1,
                },
                FlightDef {
                    airline: "DL".to_string(),
                    origin: 1,
                    destination: 2,
                    count: 4,
                },
            ],
        };

        let summary = dataset_summary(&dataset);
        assert_eq!(summary.airport_count, 2);
        assert_eq!(summary.flight_record_count, 3);
        assert_eq!(summary.airline_count, 2);
    }
}
