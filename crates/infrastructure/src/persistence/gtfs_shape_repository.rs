//! SQLite-backed GTFS shape lookups

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GtfsShapePort;
use async_trait::async_trait;
use domain::{Coordinate, RouteIdentifier, RouteShape, RouteShapePoint};
use rusqlite::{Connection, OptionalExtension, params};
use tokio::task;
use tracing::instrument;

use super::connection::ConnectionPool;

/// Read-only repository over the GTFS SQLite dataset
///
/// Every call re-queries the dataset; there is no caching layer.
#[derive(Debug, Clone)]
pub struct SqliteGtfsShapeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGtfsShapeRepository {
    /// Create a new GTFS shape repository
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn query_shape(
        conn: &Connection,
        identifier: &RouteIdentifier,
    ) -> Result<Option<RouteShape>, rusqlite::Error> {
        // GTFS encodes direction as 0/1 while the domain uses 1/2.
        let shape_id: Option<String> = conn
            .query_row(
                "SELECT DISTINCT shape_id
                 FROM trips
                 WHERE route_id = ?1 AND direction_id = ?2
                 LIMIT 1",
                params![
                    identifier.bus_line,
                    identifier.direction.gtfs_direction_id()
                ],
                |row| row.get(0),
            )
            .optional()?;

        let Some(shape_id) = shape_id else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "SELECT shape_pt_lat, shape_pt_lon, shape_pt_sequence, shape_dist_traveled
             FROM shapes
             WHERE shape_id = ?1
             ORDER BY shape_pt_sequence ASC",
        )?;

        let points = stmt
            .query_map([&shape_id], |row| {
                Ok(RouteShapePoint {
                    coordinate: Coordinate::new(row.get(0)?, row.get(1)?),
                    sequence: row.get(2)?,
                    distance_traveled: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        // A shape id that maps to zero points means a malformed dataset;
        // treat it the same as no shape at all.
        if points.is_empty() {
            return Ok(None);
        }

        Ok(Some(RouteShape {
            identifier: identifier.clone(),
            shape_id,
            points,
        }))
    }
}

#[async_trait]
impl GtfsShapePort for SqliteGtfsShapeRepository {
    #[instrument(skip(self), fields(route = %identifier))]
    async fn find_route_shape(
        &self,
        identifier: &RouteIdentifier,
    ) -> Result<Option<RouteShape>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let identifier = identifier.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Self::query_shape(&conn, &identifier)
                .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
