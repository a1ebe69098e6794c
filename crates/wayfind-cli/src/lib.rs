//! Library half of the `wayfind` binary: configuration, GeoJSON loading, projection and the
//! command implementations.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod geojson;
pub mod projection;
pub mod report;
pub mod venue;

pub use config::{OutputFormat, ProjectionKind, WayfindConfig};
pub use projection::Projection;
pub use venue::Venue;
