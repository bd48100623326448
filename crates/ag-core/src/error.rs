use thiserror::Error;

use crate::ids::AirportId;

pub type AgResult<T> = Result<T, AgError>;

#[derive(Error, Debug)]
pub enum AgError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Route graph has not been built yet")]
    NotBuilt,

    #[error("Airport {airport} is not a vertex of the current graph")]
    UnknownAirport { airport: AirportId },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
