//! SPTrans adapter - Implements BusProviderPort using integration_sptrans

use application::error::ApplicationError;
use application::ports::BusProviderPort;
use async_trait::async_trait;
use domain::{BusPosition, ResolvedRoute};
use integration_sptrans::{OlhoVivoClient, SpTransClient, SpTransConfig, SpTransError};
use tracing::instrument;

/// Adapter for live bus data using the SPTrans Olho Vivo API
#[derive(Debug)]
pub struct SpTransBusProvider {
    client: OlhoVivoClient,
}

impl SpTransBusProvider {
    /// Create a new SPTrans bus provider
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to initialize.
    pub fn new(config: &SpTransConfig) -> Result<Self, ApplicationError> {
        let client = OlhoVivoClient::new(config).map_err(provider_error)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl BusProviderPort for SpTransBusProvider {
    #[instrument(skip(self))]
    async fn search_routes(&self, query: &str) -> Result<Vec<ResolvedRoute>, ApplicationError> {
        self.client.search_routes(query).await.map_err(provider_error)
    }

    #[instrument(skip(self, routes), fields(routes = routes.len()))]
    async fn bus_positions(
        &self,
        routes: &[ResolvedRoute],
    ) -> Result<Vec<BusPosition>, ApplicationError> {
        self.client.bus_positions(routes).await.map_err(provider_error)
    }
}

/// Lift a provider error into the application taxonomy
///
/// An outright token rejection surfaces as `NotAuthorized`; every other
/// provider failure is an external-service error.
fn provider_error(error: SpTransError) -> ApplicationError {
    if error.is_authentication() {
        ApplicationError::NotAuthorized(error.to_string())
    } else {
        ApplicationError::ExternalService(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_rejection_maps_to_not_authorized() {
        let err = provider_error(SpTransError::AuthenticationFailed("refused".to_string()));
        assert!(matches!(err, ApplicationError::NotAuthorized(_)));
    }

    #[test]
    fn session_and_transport_failures_map_to_external_service() {
        let err = provider_error(SpTransError::SessionRejected);
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = provider_error(SpTransError::Timeout { timeout_secs: 30 });
        assert!(matches!(err, ApplicationError::ExternalService(_)));

        let err = provider_error(SpTransError::ParseError("bad json".to_string()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn messages_survive_the_mapping() {
        let err = provider_error(SpTransError::RequestFailed("HTTP 500".to_string()));
        assert!(err.to_string().contains("HTTP 500"));
    }
}
