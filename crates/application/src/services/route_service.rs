//! Route service - composes the bus provider and the GTFS shape lookup

use std::sync::Arc;

use domain::{BusPosition, ResolvedRoute, RouteIdentifier, RouteShape};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{BusProviderPort, GtfsShapePort};

/// Application service for route search, live positions, and route shapes
///
/// Holds no state beyond references to its two collaborators. Search and
/// position queries delegate to the provider; shape lookups aggregate over
/// the schedule dataset with partial-success semantics.
#[derive(Clone)]
pub struct RouteService {
    bus_provider: Arc<dyn BusProviderPort>,
    gtfs: Arc<dyn GtfsShapePort>,
}

impl std::fmt::Debug for RouteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteService").finish_non_exhaustive()
    }
}

impl RouteService {
    /// Create a new route service
    pub fn new(bus_provider: Arc<dyn BusProviderPort>, gtfs: Arc<dyn GtfsShapePort>) -> Self {
        Self {
            bus_provider,
            gtfs,
        }
    }

    /// Search for routes matching a free-text query
    pub async fn search_routes(
        &self,
        query: &str,
    ) -> Result<Vec<ResolvedRoute>, ApplicationError> {
        self.bus_provider.search_routes(query).await
    }

    /// Current positions for the given resolved routes
    pub async fn bus_positions(
        &self,
        routes: &[ResolvedRoute],
    ) -> Result<Vec<BusPosition>, ApplicationError> {
        self.bus_provider.bus_positions(routes).await
    }

    /// Shapes for the given identifiers, in input order
    ///
    /// Identifiers the dataset has no shape for are dropped from the
    /// result; one missing shape must not block the others. A repository
    /// error aborts the remaining lookups and propagates.
    #[instrument(skip(self, identifiers), fields(requested = identifiers.len()))]
    pub async fn route_shapes(
        &self,
        identifiers: &[RouteIdentifier],
    ) -> Result<Vec<RouteShape>, ApplicationError> {
        let mut shapes = Vec::with_capacity(identifiers.len());

        for identifier in identifiers {
            match self.gtfs.find_route_shape(identifier).await? {
                Some(shape) => shapes.push(shape),
                None => debug!(route = %identifier, "no shape in dataset"),
            }
        }

        debug!(found = shapes.len(), "shapes resolved");
        Ok(shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockBusProviderPort, MockGtfsShapePort};
    use domain::{BusDirection, Coordinate, RouteShapePoint};
    use mockall::Sequence;

    fn identifier(bus_line: &str, direction: BusDirection) -> RouteIdentifier {
        RouteIdentifier::new(bus_line, direction).unwrap()
    }

    fn sample_route(provider_route_id: i32) -> ResolvedRoute {
        ResolvedRoute {
            provider_route_id,
            identifier: identifier("8000-10", BusDirection::Inbound),
            is_circular: false,
            terminal_name: "Term. Lapa".to_string(),
        }
    }

    fn sample_shape(bus_line: &str) -> RouteShape {
        RouteShape {
            identifier: identifier(bus_line, BusDirection::Inbound),
            shape_id: format!("shape-{bus_line}"),
            points: vec![RouteShapePoint {
                coordinate: Coordinate::new(-23.5, -46.6),
                sequence: 1,
                distance_traveled: None,
            }],
        }
    }

    fn service(
        bus_provider: MockBusProviderPort,
        gtfs: MockGtfsShapePort,
    ) -> RouteService {
        RouteService::new(Arc::new(bus_provider), Arc::new(gtfs))
    }

    #[tokio::test]
    async fn search_routes_delegates_to_provider() {
        let mut provider = MockBusProviderPort::new();
        provider
            .expect_search_routes()
            .withf(|query| query == "8000")
            .times(1)
            .returning(|_| Ok(vec![sample_route(1273)]));

        let result = service(provider, MockGtfsShapePort::new())
            .search_routes("8000")
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].provider_route_id, 1273);
    }

    #[tokio::test]
    async fn bus_positions_delegates_to_provider() {
        let mut provider = MockBusProviderPort::new();
        provider
            .expect_bus_positions()
            .withf(|routes| routes.len() == 2)
            .times(1)
            .returning(|routes| {
                Ok(vec![BusPosition {
                    provider_route_id: routes[0].provider_route_id,
                    position: Coordinate::new(-23.5, -46.6),
                    observed_at: "2026-03-01T12:30:00Z".parse().unwrap(),
                }])
            });

        let routes = [sample_route(1273), sample_route(34091)];
        let result = service(provider, MockGtfsShapePort::new())
            .bus_positions(&routes)
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].provider_route_id, 1273);
    }

    #[tokio::test]
    async fn provider_errors_propagate_unchanged() {
        let mut provider = MockBusProviderPort::new();
        provider
            .expect_search_routes()
            .returning(|_| Err(ApplicationError::ExternalService("boom".to_string())));

        let result = service(provider, MockGtfsShapePort::new())
            .search_routes("8000")
            .await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(m)) if m == "boom"));
    }

    #[tokio::test]
    async fn route_shapes_with_empty_input_makes_no_lookups() {
        // No expectation is set on the mock: any lookup would panic.
        let result = service(MockBusProviderPort::new(), MockGtfsShapePort::new())
            .route_shapes(&[])
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn route_shapes_drops_missing_and_preserves_order() {
        let mut gtfs = MockGtfsShapePort::new();
        gtfs.expect_find_route_shape()
            .times(3)
            .returning(|identifier| {
                if identifier.bus_line == "1012-10" {
                    Ok(None)
                } else {
                    Ok(Some(sample_shape(&identifier.bus_line)))
                }
            });

        let identifiers = [
            identifier("8000-10", BusDirection::Inbound),
            identifier("1012-10", BusDirection::Inbound),
            identifier("8075-21", BusDirection::Outbound),
        ];
        let shapes = service(MockBusProviderPort::new(), gtfs)
            .route_shapes(&identifiers)
            .await
            .unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].shape_id, "shape-8000-10");
        assert_eq!(shapes[1].shape_id, "shape-8075-21");
    }

    #[tokio::test]
    async fn route_shapes_error_aborts_remaining_lookups() {
        let mut gtfs = MockGtfsShapePort::new();
        let mut seq = Sequence::new();
        gtfs.expect_find_route_shape()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|identifier| Ok(Some(sample_shape(&identifier.bus_line))));
        gtfs.expect_find_route_shape()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApplicationError::Internal("db gone".to_string())));
        // A third lookup would exceed the expectations and panic.

        let identifiers = [
            identifier("8000-10", BusDirection::Inbound),
            identifier("1012-10", BusDirection::Inbound),
            identifier("8075-21", BusDirection::Outbound),
        ];
        let result = service(MockBusProviderPort::new(), gtfs)
            .route_shapes(&identifiers)
            .await;

        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }
}
