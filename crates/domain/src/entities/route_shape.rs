//! Geographic route shape from the schedule dataset

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, RouteIdentifier};

/// One vertex of a route's polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteShapePoint {
    /// Geographic position of the vertex
    pub coordinate: Coordinate,
    /// Ordering key within the shape (ascending along the route)
    pub sequence: i64,
    /// Distance travelled up to this vertex, when the dataset provides it
    pub distance_traveled: Option<f64>,
}

/// Ordered polyline describing a route's physical path
///
/// Read-only projection of the GTFS dataset. A returned shape always has at
/// least one point, sorted ascending by `sequence`; lookups that would
/// produce an empty shape report "not found" instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteShape {
    /// The logical route this shape belongs to
    pub identifier: RouteIdentifier,
    /// The dataset's internal shape identifier
    pub shape_id: String,
    /// Polyline vertices, ordered by `sequence`
    pub points: Vec<RouteShapePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::BusDirection;

    #[test]
    fn points_preserve_optional_distance() {
        let shape = RouteShape {
            identifier: RouteIdentifier::new("8000-10", BusDirection::Inbound).unwrap(),
            shape_id: "57510".to_string(),
            points: vec![
                RouteShapePoint {
                    coordinate: Coordinate::new(-23.5, -46.6),
                    sequence: 1,
                    distance_traveled: None,
                },
                RouteShapePoint {
                    coordinate: Coordinate::new(-23.6, -46.7),
                    sequence: 2,
                    distance_traveled: Some(812.5),
                },
            ],
        };
        assert_eq!(shape.points[0].distance_traveled, None);
        assert_eq!(shape.points[1].distance_traveled, Some(812.5));
    }
}
