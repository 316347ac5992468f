//! Persistence module
//!
//! Read-only SQLite access to the GTFS schedule dataset.

pub mod connection;
pub mod gtfs_shape_repository;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use gtfs_shape_repository::SqliteGtfsShapeRepository;
