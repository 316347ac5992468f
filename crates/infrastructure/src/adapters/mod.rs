//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod sptrans_bus_provider;

pub use sptrans_bus_provider::SpTransBusProvider;
