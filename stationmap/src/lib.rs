pub mod error;
pub mod geojson;
pub mod geometry;
pub mod handles;
pub mod model;
pub mod store;

pub use error::EditorError;
pub use geojson::Geometry;
pub use handles::HandleSet;
pub use model::{LatLng, Platform, Station};

use geometry::MIN_RING_LEN;

/// Read access to the hosting map, consumed when persisting a station
/// record (stored zoom, fallback center).
pub trait MapView {
    fn center(&self) -> LatLng;
    fn zoom(&self) -> u32;
}

/// Pointer events delivered by the map collaborator. The editor implements
/// this so its mutation logic stays independent of any UI toolkit; a
/// rejected interaction is logged and otherwise ignored.
pub trait MapEvents {
    fn on_vertex_dragged(&mut self, index: usize, pos: LatLng);
    fn on_drag_ended(&mut self);
    fn on_midpoint_clicked(&mut self, edge: usize);
    fn on_vertex_double_clicked(&mut self, index: usize);
}

/// One editing session: the active ring, its handle set and the transient
/// selection. Constructed per page, discarded on navigation. The session
/// exclusively owns the ring; all mutations run synchronously and leave
/// the handle set consistent before returning.
#[derive(Clone, Debug)]
pub struct Editor {
    ring: Option<Vec<LatLng>>,
    handles: HandleSet,
    selected: Option<usize>,
    geom_ver: u64,
}

impl Default for Editor {
    fn default() -> Editor {
        Editor::new()
    }
}

impl Editor {
    pub fn new() -> Editor {
        Editor {
            ring: None,
            handles: HandleSet::default(),
            selected: None,
            geom_ver: 1,
        }
    }

    /// Bumped on every geometry mutation; unchanged when an operation is
    /// rejected.
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    pub fn has_polygon(&self) -> bool {
        self.ring.is_some()
    }

    pub fn ring(&self) -> Option<&[LatLng]> {
        self.ring.as_deref()
    }

    pub fn vertex_count(&self) -> usize {
        self.ring.as_ref().map_or(0, Vec::len)
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn selected_vertex(&self) -> Option<usize> {
        self.selected
    }

    /// Seeds a triangle around `center`. Keeps an existing polygon unless
    /// `force` is set. Returns whether a new polygon was created.
    pub fn start_drawing(&mut self, center: LatLng, force: bool) -> bool {
        if self.ring.is_some() && !force {
            return false;
        }
        self.ring = Some(geometry::seed_triangle(center).to_vec());
        self.selected = None;
        self.rebuild_handles();
        self.bump();
        true
    }

    /// Continuous-drag update: writes the vertex and recomputes the
    /// midpoint handles only. `end_drag` restores the full-rebuild
    /// guarantee once the gesture completes.
    pub fn drag_vertex(&mut self, index: usize, pos: LatLng) -> Result<(), EditorError> {
        if !pos.is_finite() {
            return Err(EditorError::NonFinite);
        }
        let ring = self.ring.as_mut().ok_or(EditorError::MissingGeometry)?;
        let len = ring.len();
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        ring[index] = pos;
        if let Some(v) = self.handles.vertices.get_mut(index) {
            *v = pos;
        }
        self.handles
            .update_midpoints(self.ring.as_deref().unwrap_or(&[]));
        self.bump();
        Ok(())
    }

    /// Full handle rebuild after a drag gesture completes.
    pub fn end_drag(&mut self) {
        self.rebuild_handles();
    }

    /// Splits edge `(edge, edge + 1 mod n)` at its midpoint and inserts
    /// the new vertex after `edge`. Returns the index of the inserted
    /// vertex. There is no upper bound on the vertex count.
    pub fn insert_vertex(&mut self, edge: usize) -> Result<usize, EditorError> {
        let ring = self.ring.as_mut().ok_or(EditorError::MissingGeometry)?;
        let n = ring.len();
        if edge >= n {
            return Err(EditorError::IndexOutOfRange { index: edge, len: n });
        }
        let p = geometry::midpoint(ring[edge], ring[(edge + 1) % n]);
        ring.insert(edge + 1, p);
        // Indices shift on insert; a carried-over selection would point at
        // the wrong vertex.
        self.selected = None;
        self.rebuild_handles();
        self.bump();
        Ok(edge + 1)
    }

    pub fn select_vertex(&mut self, index: usize) -> Result<(), EditorError> {
        let len = self.vertex_count();
        if self.ring.is_none() {
            return Err(EditorError::MissingGeometry);
        }
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn deselect_vertex(&mut self) {
        self.selected = None;
    }

    /// Removes the selected vertex. Rejected when nothing is selected or
    /// when the ring is at the 3-vertex minimum; the ring is untouched on
    /// error.
    pub fn delete_selected_vertex(&mut self) -> Result<usize, EditorError> {
        let index = self.selected.ok_or(EditorError::NoSelection)?;
        let ring = self.ring.as_mut().ok_or(EditorError::MissingGeometry)?;
        let len = ring.len();
        if len <= MIN_RING_LEN {
            return Err(EditorError::MinVertices);
        }
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        ring.remove(index);
        self.selected = None;
        self.rebuild_handles();
        self.bump();
        Ok(index)
    }

    /// Discards the polygon, handles and selection.
    pub fn clear(&mut self) {
        self.ring = None;
        self.selected = None;
        self.handles.clear();
        self.bump();
    }

    /// None when no polygon exists; callers must treat that as a distinct
    /// state before saving.
    pub fn to_geometry(&self) -> Option<Geometry> {
        self.ring.as_deref().map(geojson::ring_to_geometry)
    }

    pub fn to_geojson_value(&self) -> Option<serde_json::Value> {
        self.to_geometry().and_then(|g| serde_json::to_value(g).ok())
    }

    /// Installs the outer ring of `geom` as the active polygon. Holes and
    /// additional polygons are dropped; an empty coordinate ring is
    /// rejected and leaves the session unchanged.
    pub fn load_geometry(&mut self, geom: &Geometry) -> Result<(), EditorError> {
        let ring = geojson::geometry_to_ring(geom)?;
        self.ring = Some(ring);
        self.selected = None;
        self.rebuild_handles();
        self.bump();
        Ok(())
    }

    pub fn load_geojson_value(&mut self, v: serde_json::Value) -> Result<(), EditorError> {
        let geom = geojson::geometry_from_value(v)?;
        self.load_geometry(&geom)
    }

    fn rebuild_handles(&mut self) {
        match self.ring.as_deref() {
            Some(ring) => self.handles.rebuild(ring),
            None => self.handles.clear(),
        }
    }

    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }
}

impl MapEvents for Editor {
    fn on_vertex_dragged(&mut self, index: usize, pos: LatLng) {
        if let Err(e) = self.drag_vertex(index, pos) {
            log::warn!("vertex drag ignored: {e}");
        }
    }

    fn on_drag_ended(&mut self) {
        self.end_drag();
    }

    fn on_midpoint_clicked(&mut self, edge: usize) {
        if let Err(e) = self.insert_vertex(edge) {
            log::warn!("vertex insert ignored: {e}");
        }
    }

    fn on_vertex_double_clicked(&mut self, index: usize) {
        if let Err(e) = self.select_vertex(index) {
            log::warn!("vertex select ignored: {e}");
        }
    }
}
