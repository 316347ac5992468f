//! Domain entities

mod bus_position;
mod resolved_route;
mod route_shape;

pub use bus_position::BusPosition;
pub use resolved_route::ResolvedRoute;
pub use route_shape::{RouteShape, RouteShapePoint};
