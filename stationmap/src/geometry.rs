use crate::model::LatLng;

/// Seed triangle radius in degrees, roughly 200 m at mid latitudes.
pub const SEED_RADIUS_DEG: f64 = 0.002;

/// Minimum vertices a ring may hold. Enforced on deletion only; degenerate
/// loaded shapes are accepted as-is.
pub const MIN_RING_LEN: usize = 3;

pub fn midpoint(a: LatLng, b: LatLng) -> LatLng {
    LatLng::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

/// Default polygon for a fresh drawing session: one vertex above the
/// center, two below it to the left and right.
pub fn seed_triangle(center: LatLng) -> [LatLng; 3] {
    let r = SEED_RADIUS_DEG;
    [
        LatLng::new(center.lat + r, center.lng),
        LatLng::new(center.lat - r / 2.0, center.lng - r),
        LatLng::new(center.lat - r / 2.0, center.lng + r),
    ]
}

/// Center of the ring's bounding box, used as the stored station position.
pub fn bounds_center(ring: &[LatLng]) -> Option<LatLng> {
    let first = ring.first()?;
    let mut min_lat = first.lat;
    let mut max_lat = first.lat;
    let mut min_lng = first.lng;
    let mut max_lng = first.lng;
    for p in &ring[1..] {
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
        min_lng = min_lng.min(p.lng);
        max_lng = max_lng.max(p.lng);
    }
    Some(LatLng::new(
        (min_lat + max_lat) / 2.0,
        (min_lng + max_lng) / 2.0,
    ))
}
