//! Application services - Use case implementations

mod route_service;

pub use route_service::RouteService;
