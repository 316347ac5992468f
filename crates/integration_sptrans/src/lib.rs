//! SPTrans Olho Vivo integration for BusSP
//!
//! Talks to the [Olho Vivo](https://www.sptrans.com.br/desenvolvedores/) API,
//! the real-time feed for São Paulo's bus network: free-text line search and
//! per-line vehicle positions.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`SpTransClient`] defines the
//! interface for line search and position queries, implemented by
//! [`OlhoVivoClient`]. The Olho Vivo API is session-based: the client logs in
//! with the configured token on first use and re-authenticates transparently
//! when the provider rejects an expired session (at most one retry per
//! request).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_sptrans::{OlhoVivoClient, SpTransClient, SpTransConfig};
//!
//! let config = SpTransConfig {
//!     api_token: "your-token".to_string(),
//!     ..SpTransConfig::default()
//! };
//! let client = OlhoVivoClient::new(&config)?;
//!
//! let routes = client.search_routes("8000").await?;
//! let positions = client.bus_positions(&routes).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OlhoVivoClient, SpTransClient};
pub use config::SpTransConfig;
pub use error::SpTransError;
