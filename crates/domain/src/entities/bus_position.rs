//! Live bus position

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// The provider's most recent sighting of one vehicle on a route
///
/// Transient data: positions are returned to the caller and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusPosition {
    /// Provider route code the vehicle was queried under
    pub provider_route_id: i32,
    /// Where the vehicle was last seen
    pub position: Coordinate,
    /// When the provider captured the position
    pub observed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let position = BusPosition {
            provider_route_id: 1273,
            position: Coordinate::new(-23.561684, -46.625378),
            observed_at: "2026-03-01T12:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&position).unwrap();
        let back: BusPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, position);
    }
}
