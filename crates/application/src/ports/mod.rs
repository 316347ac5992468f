//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement them.

mod bus_provider_port;
mod gtfs_shape_port;

pub use bus_provider_port::BusProviderPort;
#[cfg(test)]
pub use bus_provider_port::MockBusProviderPort;
pub use gtfs_shape_port::GtfsShapePort;
#[cfg(test)]
pub use gtfs_shape_port::MockGtfsShapePort;
