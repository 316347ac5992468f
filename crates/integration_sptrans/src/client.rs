//! Olho Vivo client with transparent session handling
//!
//! The Olho Vivo API is session-based: a login call exchanges the API token
//! for a session cookie, and the provider expires sessions without notice.
//! The client authenticates lazily on the first request and recovers from
//! an expired session by re-authenticating and retrying the failed request
//! exactly once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use domain::{BusPosition, ResolvedRoute};

use crate::config::SpTransConfig;
use crate::error::SpTransError;
use crate::models::{self, LinePositions};

/// Marker the provider puts in the body of a 401 that means the session
/// cookie is no longer accepted, as opposed to any other unauthorized reply.
const SESSION_DENIED_MARKER: &str = "Authorization has been denied";

/// Trait for live bus-tracking clients
#[async_trait]
pub trait SpTransClient: Send + Sync {
    /// Search for routes by line number or destination name
    ///
    /// Returns an empty list when the provider has no match for the query.
    async fn search_routes(&self, query: &str) -> Result<Vec<ResolvedRoute>, SpTransError>;

    /// Current vehicle positions for every given resolved route
    ///
    /// One position query is issued per route; all vehicles are flattened
    /// into a single list following the input order. Routes without active
    /// vehicles contribute nothing. The first hard failure aborts the whole
    /// call.
    async fn bus_positions(
        &self,
        routes: &[ResolvedRoute],
    ) -> Result<Vec<BusPosition>, SpTransError>;
}

/// Session lifecycle of the Olho Vivo API
///
/// Expiry is discovered reactively: the provider gives no expiry time, so
/// the client stays `Authenticated` until a request comes back with the
/// session denial signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Session {
    Unauthenticated,
    Authenticated,
}

/// Production client for the Olho Vivo API
#[derive(Debug)]
pub struct OlhoVivoClient {
    client: Client,
    config: SpTransConfig,
    session: Mutex<Session>,
}

impl OlhoVivoClient {
    /// Create a new Olho Vivo client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &SpTransConfig) -> Result<Self, SpTransError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .user_agent("BusSP/0.2")
            .build()
            .map_err(|e| SpTransError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            session: Mutex::new(Session::Unauthenticated),
        })
    }

    fn transport_error(&self, error: &reqwest::Error) -> SpTransError {
        if error.is_timeout() {
            SpTransError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            SpTransError::ConnectionFailed(error.to_string())
        }
    }

    /// Exchange the configured token for a session cookie
    ///
    /// The provider answers a bare `true` or `false`; anything but a
    /// successful `true` means the token itself was rejected.
    #[instrument(skip(self))]
    async fn login(&self) -> Result<(), SpTransError> {
        let url = format!("{}/Login/Autenticar", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("token", self.config.api_token.as_str())])
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() && body.trim() == "true" {
            debug!("authenticated against the provider");
            Ok(())
        } else {
            Err(SpTransError::AuthenticationFailed(format!(
                "login answered HTTP {status} with body {body:?}"
            )))
        }
    }

    /// Authenticate if the session is not currently established
    async fn ensure_session(&self) -> Result<(), SpTransError> {
        let mut session = self.session.lock().await;
        if *session == Session::Authenticated {
            return Ok(());
        }
        self.login().await?;
        *session = Session::Authenticated;
        Ok(())
    }

    /// Issue an authorized GET, recovering from session expiry once
    ///
    /// The retry bound lives here and nowhere else: a request that comes
    /// back with the provider's session denial signal invalidates the
    /// session and is re-sent a single time after re-authenticating. A
    /// second denial is fatal.
    async fn send_authorized(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<String, SpTransError> {
        let url = format!("{}{path}", self.config.base_url);
        let mut retried = false;

        loop {
            self.ensure_session().await?;

            let response = self
                .client
                .get(&url)
                .query(query)
                .send()
                .await
                .map_err(|e| self.transport_error(&e))?;

            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                let body = response.text().await.unwrap_or_default();
                if body.contains(SESSION_DENIED_MARKER) {
                    *self.session.lock().await = Session::Unauthenticated;
                    if retried {
                        return Err(SpTransError::SessionRejected);
                    }
                    warn!(path, "provider rejected the session, re-authenticating");
                    retried = true;
                    continue;
                }
                return Err(SpTransError::RequestFailed(format!("HTTP {status}")));
            }

            if !status.is_success() {
                return Err(SpTransError::RequestFailed(format!("HTTP {status}")));
            }

            return response
                .text()
                .await
                .map_err(|e| SpTransError::ParseError(e.to_string()));
        }
    }
}

#[async_trait]
impl SpTransClient for OlhoVivoClient {
    #[instrument(skip(self))]
    async fn search_routes(&self, query: &str) -> Result<Vec<ResolvedRoute>, SpTransError> {
        let body = self
            .send_authorized("/Linha/Buscar", &[("termosBusca", query.to_string())])
            .await?;

        let routes = models::parse_line_search(&body)?;
        debug!(count = routes.len(), "routes resolved");
        Ok(routes)
    }

    #[instrument(skip(self, routes), fields(routes = routes.len()))]
    async fn bus_positions(
        &self,
        routes: &[ResolvedRoute],
    ) -> Result<Vec<BusPosition>, SpTransError> {
        let mut positions = Vec::new();

        for route in routes {
            let body = self
                .send_authorized(
                    "/Posicao/Linha",
                    &[("codigoLinha", route.provider_route_id.to_string())],
                )
                .await?;

            let parsed: LinePositions =
                serde_json::from_str(&body).map_err(|e| SpTransError::ParseError(e.to_string()))?;

            positions.extend(models::positions_from_response(
                parsed,
                route.provider_route_id,
            ));
        }

        debug!(count = positions.len(), "positions aggregated");
        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_unauthenticated() {
        let client = OlhoVivoClient::new(&SpTransConfig::default()).unwrap();
        assert_eq!(*client.session.blocking_lock(), Session::Unauthenticated);
    }

    #[test]
    fn denial_marker_matches_provider_message() {
        let body = r#"{"Message":"Authorization has been denied for this request."}"#;
        assert!(body.contains(SESSION_DENIED_MARKER));
    }
}
