//! GTFS database connection management
//!
//! Provides SQLite connection pooling via r2d2. The GTFS database is a
//! prebuilt dataset; this layer never writes to it.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::GtfsDatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database not found: {0}")]
    NotFound(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Pooled connection type alias
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a new connection pool over the GTFS dataset
///
/// # Errors
///
/// Fails when the configured database file does not exist (the dataset is
/// produced by a separate import step, never created here) or the pool
/// cannot be built.
pub fn create_pool(config: &GtfsDatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Opening GTFS database");

    let manager = if config.path == ":memory:" {
        SqliteConnectionManager::memory()
    } else {
        if !Path::new(&config.path).is_file() {
            return Err(DatabaseError::NotFound(config.path.clone()));
        }
        SqliteConnectionManager::file(&config.path)
    };

    let pool = Pool::builder()
        .max_size(config.max_connections)
        .build(manager)?;

    {
        let conn = pool.get()?;
        initialize_connection(&conn)?;
    }

    debug!("GTFS connection pool created successfully");
    Ok(pool)
}

/// Apply per-connection settings
fn initialize_connection(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> GtfsDatabaseConfig {
        GtfsDatabaseConfig {
            path: ":memory:".to_string(),
            max_connections: 1,
        }
    }

    #[test]
    fn create_in_memory_pool() {
        let pool = create_pool(&memory_config());
        assert!(pool.is_ok());
    }

    #[test]
    fn pool_connection_works() {
        let pool = create_pool(&memory_config()).unwrap();
        let conn = pool.get();
        assert!(conn.is_ok());
    }

    #[test]
    fn missing_database_file_is_an_error() {
        let config = GtfsDatabaseConfig {
            path: "/nonexistent/gtfs.db".to_string(),
            max_connections: 1,
        };
        let result = create_pool(&config);
        assert!(matches!(result, Err(DatabaseError::NotFound(_))));
    }

    #[test]
    fn database_error_display() {
        let err = DatabaseError::NotFound("gtfs.db".to_string());
        assert_eq!(err.to_string(), "Database not found: gtfs.db");
    }
}
