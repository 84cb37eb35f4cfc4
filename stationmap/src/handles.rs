use crate::geometry::midpoint;
use crate::model::LatLng;

/// Positions of the visual markers mirroring the ring: one draggable
/// handle per vertex and one click-to-insert handle per edge midpoint,
/// with midpoint[i] between vertex[i] and vertex[(i + 1) % n].
///
/// `rebuild` replaces the whole set; that full replacement is the
/// synchronization mechanism after structural changes. Only the midpoints
/// (and the dragged vertex itself) move during a continuous drag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandleSet {
    pub vertices: Vec<LatLng>,
    pub midpoints: Vec<LatLng>,
}

impl HandleSet {
    pub fn rebuild(&mut self, ring: &[LatLng]) {
        self.vertices.clear();
        self.midpoints.clear();
        self.vertices.extend_from_slice(ring);
        let n = ring.len();
        for i in 0..n {
            self.midpoints.push(midpoint(ring[i], ring[(i + 1) % n]));
        }
    }

    /// Lightweight recompute while a vertex is being dragged.
    pub fn update_midpoints(&mut self, ring: &[LatLng]) {
        let n = ring.len();
        for (i, m) in self.midpoints.iter_mut().enumerate() {
            *m = midpoint(ring[i], ring[(i + 1) % n]);
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.midpoints.clear();
    }
}
