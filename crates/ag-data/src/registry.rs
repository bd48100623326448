//! One-time-loaded airport registry.

use std::collections::HashMap;

use ag_core::{Airport, AirportId};

use crate::schema::Dataset;

/// Identifier -> Airport mapping, populated once and read-only thereafter.
///
/// Ownership is explicit: the registry is passed to whoever needs airport
/// resolution, never held as ambient global state.
#[derive(Debug, Clone)]
pub struct AirportRegistry {
    by_id: HashMap<AirportId, Airport>,
}

impl AirportRegistry {
    /// Build the registry from a dataset. Invoked once at startup.
    pub fn load_all(dataset: &Dataset) -> Self {
        let by_id = dataset
            .airports
            .iter()
            .map(|def| {
                let id = AirportId::new(def.id);
                (
                    id,
                    Airport::new(id, def.code.clone(), def.name.clone(), def.city.clone()),
                )
            })
            .collect();
        Self { by_id }
    }

    pub fn get(&self, id: AirportId) -> Option<&Airport> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: AirportId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Look up an airport by its code, case-insensitively.
    pub fn by_code(&self, code: &str) -> Option<&Airport> {
        self.by_id
            .values()
            .find(|a| a.code.eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.by_id.values()
    }
}
