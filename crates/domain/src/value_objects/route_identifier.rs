//! Logical route identity value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::BusDirection;

/// Identity of a bus route as riders know it: line number plus direction
///
/// A logical route may correspond to several physical routes on the
/// provider side (a line number can have multiple operating variants).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteIdentifier {
    /// Bus line in the `"{number}-{suffix}"` form riders see (e.g. "8000-10")
    pub bus_line: String,
    /// Operating direction
    pub direction: BusDirection,
}

impl RouteIdentifier {
    /// Create a new identifier, rejecting empty line numbers
    pub fn new(bus_line: impl Into<String>, direction: BusDirection) -> Result<Self, DomainError> {
        let bus_line = bus_line.into();
        if bus_line.trim().is_empty() {
            return Err(DomainError::EmptyBusLine);
        }
        Ok(Self {
            bus_line,
            direction,
        })
    }
}

impl fmt::Display for RouteIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bus_line, self.direction)
    }
}
