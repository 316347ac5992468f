//! Bus travel direction value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Operating direction of a bus line
///
/// SPTrans encodes direction as 1 (terminal principal to secundário, "ida")
/// or 2 (the return leg, "volta"). GTFS uses 0/1 for the same pair; use
/// [`BusDirection::gtfs_direction_id`] when querying the schedule dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusDirection {
    /// Main direction ("ida"), provider code 1
    Inbound,
    /// Return direction ("volta"), provider code 2
    Outbound,
}

impl BusDirection {
    /// The numeric code the provider uses for this direction
    #[must_use]
    pub const fn as_number(self) -> u8 {
        match self {
            Self::Inbound => 1,
            Self::Outbound => 2,
        }
    }

    /// The `direction_id` value used by GTFS datasets (0 or 1)
    #[must_use]
    pub const fn gtfs_direction_id(self) -> i64 {
        match self {
            Self::Inbound => 0,
            Self::Outbound => 1,
        }
    }

    /// Portuguese label as used by riders
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbound => "ida",
            Self::Outbound => "volta",
        }
    }
}

impl TryFrom<i64> for BusDirection {
    type Error = DomainError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Inbound),
            2 => Ok(Self::Outbound),
            other => Err(DomainError::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for BusDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
