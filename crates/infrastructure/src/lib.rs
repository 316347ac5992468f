//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: the SPTrans
//! bus provider adapter and the SQLite-backed GTFS shape repository.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::SpTransBusProvider;
pub use config::{AppConfig, GtfsDatabaseConfig, SpTransAppConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteGtfsShapeRepository, create_pool};
pub use telemetry::init_tracing;
