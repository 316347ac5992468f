//! Bus provider port
//!
//! Defines the interface to the live bus-tracking provider. The adapter in
//! the infrastructure layer implements this port over the SPTrans client;
//! session handling is the implementation's concern and is invisible here.

use async_trait::async_trait;
use domain::{BusPosition, ResolvedRoute};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Trait for live bus-tracking providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BusProviderPort: Send + Sync {
    /// Search for routes matching a free-text query (line number or
    /// destination name)
    ///
    /// A query with no matches resolves to an empty list, not an error.
    async fn search_routes(&self, query: &str) -> Result<Vec<ResolvedRoute>, ApplicationError>;

    /// Current positions for every given resolved route, flattened into one
    /// list following the input order
    async fn bus_positions(
        &self,
        routes: &[ResolvedRoute],
    ) -> Result<Vec<BusPosition>, ApplicationError>;
}
