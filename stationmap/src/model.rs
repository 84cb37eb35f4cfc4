use serde::{Deserialize, Serialize};

use crate::geojson::Geometry;

/// Geographic coordinate in double-precision degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Station record as persisted. Field names match the stored JSON format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub code: String,
    pub lat: f64,
    pub lng: f64,
    pub zoom: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geojson: Option<Geometry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    #[serde(rename = "stationId")]
    pub station_id: String,
    pub name: String,
    pub geojson: Geometry,
}
