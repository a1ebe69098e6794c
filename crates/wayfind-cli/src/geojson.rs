//! GeoJSON `FeatureCollection` decoding into [`FeatureRecord`]s.
//!
//! Recognised properties are `name`, `object_type` (the polygon classification), `booth_type`
//! (category) and `location`. Holes and altitude are ignored. Coordinates stay in source units;
//! projecting them is [`Projection`](crate::projection::Projection)'s job.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use wayfind_floor::{FeatureGeometry, FeatureRecord};
use wayfind_geom::Point;

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    name: Option<String>,
    object_type: Option<String>,
    booth_type: Option<String>,
    location: Option<String>,
}

type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

/// Decode a `FeatureCollection` document.
///
/// Features without geometry, with unsupported geometry types, or with malformed positions are
/// skipped with a warning.
pub fn parse_feature_collection(text: &str) -> Result<Vec<FeatureRecord>> {
    let collection: RawCollection =
        serde_json::from_str(text).context("Failed to parse GeoJSON")?;
    if collection.kind != "FeatureCollection" {
        bail!("expected a FeatureCollection, found {}", collection.kind);
    }

    let mut records = Vec::new();
    for (index, feature) in collection.features.into_iter().enumerate() {
        let props = feature.properties.unwrap_or_default();
        let Some(geometry) = feature.geometry else {
            tracing::warn!(index, name = ?props.name, "skipping feature without geometry");
            continue;
        };

        let geometries = match convert_geometry(geometry) {
            Some(geometries) => geometries,
            None => {
                tracing::warn!(index, name = ?props.name, "skipping feature with unsupported geometry");
                continue;
            }
        };

        for geometry in geometries {
            let default_kind = match geometry {
                FeatureGeometry::Point(_) => "point",
                FeatureGeometry::Polygon(_) => "unknown",
                FeatureGeometry::LineString(_) => "line",
            };
            records.push(FeatureRecord {
                kind: props
                    .object_type
                    .clone()
                    .unwrap_or_else(|| default_kind.to_string()),
                name: props.name.clone(),
                category: props.booth_type.clone(),
                location: props.location.clone(),
                geometry,
            });
        }
    }

    tracing::debug!(records = records.len(), "decoded GeoJSON features");
    Ok(records)
}

fn convert_geometry(geometry: RawGeometry) -> Option<Vec<FeatureGeometry>> {
    match geometry {
        RawGeometry::Point { coordinates } => {
            Some(vec![FeatureGeometry::Point(to_point(&coordinates)?)])
        }
        RawGeometry::LineString { coordinates } => {
            Some(vec![FeatureGeometry::LineString(to_points(&coordinates)?)])
        }
        RawGeometry::Polygon { coordinates } => {
            let exterior = coordinates.first()?;
            Some(vec![FeatureGeometry::Polygon(to_points(exterior)?)])
        }
        RawGeometry::MultiPolygon { coordinates } => coordinates
            .iter()
            .map(|polygon| {
                let exterior = polygon.first()?;
                Some(FeatureGeometry::Polygon(to_points(exterior)?))
            })
            .collect(),
        RawGeometry::Unsupported => None,
    }
}

fn to_point(position: &[f64]) -> Option<Point> {
    match position {
        [x, y, ..] => Some(Point::new(*x, *y)),
        _ => None,
    }
}

fn to_points(positions: &[Position]) -> Option<Vec<Point>> {
    positions.iter().map(|p| to_point(p)).collect()
}
