//! GTFS shape port
//!
//! Defines read-only access to the static schedule dataset. The adapter in
//! the infrastructure layer implements this port over the GTFS SQLite
//! database.

use async_trait::async_trait;
use domain::{RouteIdentifier, RouteShape};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Trait for schedule-dataset shape lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GtfsShapePort: Send + Sync {
    /// Look up the geographic shape for one logical route
    ///
    /// `Ok(None)` means the dataset has no shape for this line and
    /// direction; that is a normal outcome, not an error. A returned shape
    /// always carries at least one point, ordered by sequence.
    async fn find_route_shape(
        &self,
        identifier: &RouteIdentifier,
    ) -> Result<Option<RouteShape>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GtfsShapePort) {}
}
