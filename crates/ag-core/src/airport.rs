use core::cmp::Ordering;
use core::fmt;

use crate::ids::AirportId;

/// An airport record.
///
/// Immutable once loaded into the registry. The graph layer stores value
/// copies and treats everything except `id` and the ordering as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    pub id: AirportId,
    /// IATA-style code, e.g. "ATL".
    pub code: String,
    pub name: String,
    pub city: String,
}

impl Airport {
    pub fn new(
        id: AirportId,
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            city: city.into(),
        }
    }
}

/// Natural order: name ascending, id as tiebreak.
///
/// This is the order vertex listings are reported in.
impl Ord for Airport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Airport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
