use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EditorError;
use crate::model::LatLng;

/// Wire geometry exchanged with persistence. Coordinates are
/// longitude-first per GeoJSON; the outer ring is implicitly closed and
/// serialized without a repeated closing point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}

pub fn ring_to_geometry(ring: &[LatLng]) -> Geometry {
    Geometry::Polygon {
        coordinates: vec![ring.iter().map(|p| [p.lng, p.lat]).collect()],
    }
}

/// Extracts the outer ring. Holes and additional polygons are dropped; an
/// absent or empty coordinate ring is rejected rather than silently
/// producing an empty polygon.
pub fn geometry_to_ring(geom: &Geometry) -> Result<Vec<LatLng>, EditorError> {
    let ring = match geom {
        Geometry::Polygon { coordinates } => coordinates.first(),
        Geometry::MultiPolygon { coordinates } => {
            coordinates.first().and_then(|poly| poly.first())
        }
    };
    let ring = ring.ok_or(EditorError::MalformedGeometry("no coordinate ring"))?;
    if ring.is_empty() {
        return Err(EditorError::MalformedGeometry("empty outer ring"));
    }
    let mut points: Vec<LatLng> = ring.iter().map(|c| LatLng::new(c[1], c[0])).collect();
    if points.iter().any(|p| !p.is_finite()) {
        return Err(EditorError::MalformedGeometry("non-finite coordinate"));
    }
    // Some producers (Leaflet among them) repeat the first point to close
    // the ring; drop it as long as a valid triangle remains.
    if points.len() >= 4 && points.first() == points.last() {
        points.pop();
    }
    Ok(points)
}

pub fn geometry_from_value(v: Value) -> Result<Geometry, EditorError> {
    serde_json::from_value(v).map_err(|_| EditorError::MalformedGeometry("unrecognized geometry"))
}
