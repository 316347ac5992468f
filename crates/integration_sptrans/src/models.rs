//! Wire schema of the Olho Vivo API and mappings into domain models
//!
//! The provider uses terse two-letter field names; the DTOs here document
//! them once and the mapping functions translate into the domain
//! vocabulary. Unknown fields in provider responses are ignored for forward
//! compatibility; a mapping fails only when a required field is absent or
//! has the wrong primitive type.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use domain::{BusDirection, BusPosition, Coordinate, ResolvedRoute, RouteIdentifier};

use crate::error::SpTransError;

/// One entry of a `/Linha/Buscar` response
#[derive(Debug, Deserialize)]
pub(crate) struct LineSearchEntry {
    /// Provider-internal route code
    pub cl: i32,
    /// Circular line flag
    pub lc: bool,
    /// Line number as displayed to riders (e.g. "8000")
    pub lt: String,
    /// Line number suffix / service type (e.g. 10)
    pub tl: i32,
    /// Operating direction: 1 main terminal outward, 2 return leg
    pub sl: i64,
    /// Main terminal name
    pub tp: String,
    /// Secondary terminal name
    pub ts: String,
}

/// Envelope of a `/Posicao/Linha` response
#[derive(Debug, Deserialize)]
pub(crate) struct LinePositions {
    /// Vehicles currently reporting on the line
    pub vs: Vec<VehicleEntry>,
}

/// One vehicle inside a positions response
#[derive(Debug, Deserialize)]
pub(crate) struct VehicleEntry {
    /// When the position was captured
    pub ta: DateTime<Utc>,
    /// Latitude in decimal degrees
    pub py: f64,
    /// Longitude in decimal degrees
    pub px: f64,
}

/// Parse a line search response body into resolved routes
///
/// Entries that do not carry the required fields, or whose direction code
/// is not 1 or 2, are skipped; well-formed siblings still resolve.
pub(crate) fn parse_line_search(body: &str) -> Result<Vec<ResolvedRoute>, SpTransError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| SpTransError::ParseError(e.to_string()))?;

    let mut routes = Vec::with_capacity(entries.len());
    for value in entries {
        match serde_json::from_value::<LineSearchEntry>(value) {
            Ok(entry) => match resolved_route_from_entry(entry) {
                Some(route) => routes.push(route),
                None => warn!("skipping line entry with unusable direction or line number"),
            },
            Err(e) => warn!(error = %e, "skipping malformed line entry"),
        }
    }
    Ok(routes)
}

/// Map one line search entry into a resolved route
///
/// The terminal name depends on the operating direction: the provider
/// reports both terminals on every entry and the travel destination is `tp`
/// for direction 1 and `ts` for direction 2.
pub(crate) fn resolved_route_from_entry(entry: LineSearchEntry) -> Option<ResolvedRoute> {
    let direction = BusDirection::try_from(entry.sl).ok()?;
    let terminal_name = match direction {
        BusDirection::Inbound => entry.tp,
        BusDirection::Outbound => entry.ts,
    };
    let bus_line = format!("{}-{}", entry.lt, entry.tl);
    let identifier = RouteIdentifier::new(bus_line, direction).ok()?;

    Some(ResolvedRoute {
        provider_route_id: entry.cl,
        identifier,
        is_circular: entry.lc,
        terminal_name,
    })
}

/// Map a positions response onto the route it was queried for
///
/// The per-line endpoint does not echo the route code, so every vehicle is
/// attributed to the `provider_route_id` the query was made with.
pub(crate) fn positions_from_response(
    response: LinePositions,
    provider_route_id: i32,
) -> Vec<BusPosition> {
    response
        .vs
        .into_iter()
        .map(|vehicle| bus_position_from_vehicle(&vehicle, provider_route_id))
        .collect()
}

/// Map one vehicle entry into a bus position
pub(crate) fn bus_position_from_vehicle(
    vehicle: &VehicleEntry,
    provider_route_id: i32,
) -> BusPosition {
    BusPosition {
        provider_route_id,
        position: Coordinate::new(vehicle.py, vehicle.px),
        observed_at: vehicle.ta,
    }
}
