//! Application layer for BusSP
//!
//! Ports and services that compose the live bus provider with the GTFS
//! schedule dataset. The route service is the single entry point the outer
//! layers use for route search, live positions, and route shapes.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::RouteService;
