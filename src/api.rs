use crate::error;
use crate::{Catalog, Editor};
use js_sys::Float64Array;
use serde::Serialize;
use stationmap::store::{finalize_station, update_station_shape};
use stationmap::{EditorError, LatLng, MapView, Platform, Station};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Map state snapshot handed over by the JS map collaborator at save time.
struct ViewSnapshot {
    center: LatLng,
    zoom: u32,
}

impl MapView for ViewSnapshot {
    fn center(&self) -> LatLng {
        self.center
    }
    fn zoom(&self) -> u32 {
        self.zoom
    }
}

// Plain-object serialization; the default would emit ES Maps for the
// internally tagged geometry enum.
fn to_js<T: Serialize>(v: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn flat_coords(points: &[LatLng]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.lat);
        out.push(p.lng);
    }
    out
}

fn warn(e: &EditorError) {
    web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new()
    }
    pub fn geom_version(&self) -> u64 {
        self.rs_geom_version()
    }

    // Session lifecycle
    pub fn start_drawing(&mut self, lat: f64, lng: f64, force: bool) -> bool {
        self.inner.start_drawing(LatLng::new(lat, lng), force)
    }
    pub fn start_drawing_res(&mut self, lat: f64, lng: f64, force: bool) -> JsValue {
        if !lat.is_finite() {
            return error::non_finite("lat");
        }
        if !lng.is_finite() {
            return error::non_finite("lng");
        }
        let created = self.inner.start_drawing(LatLng::new(lat, lng), force);
        error::ok(JsValue::from_bool(created))
    }
    pub fn has_polygon(&self) -> bool {
        self.inner.has_polygon()
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    // Handle positions as flat [lat0, lng0, lat1, lng1, ...] arrays.
    pub fn get_vertex_data(&self) -> Float64Array {
        crate::interop::arr_f64(&flat_coords(&self.inner.handles().vertices))
    }
    pub fn get_midpoint_data(&self) -> Float64Array {
        crate::interop::arr_f64(&flat_coords(&self.inner.handles().midpoints))
    }

    // Vertex manipulation
    pub fn drag_vertex(&mut self, index: u32, lat: f64, lng: f64) -> bool {
        self.inner
            .drag_vertex(index as usize, LatLng::new(lat, lng))
            .is_ok()
    }
    pub fn drag_vertex_res(&mut self, index: u32, lat: f64, lng: f64) -> JsValue {
        match self.inner.drag_vertex(index as usize, LatLng::new(lat, lng)) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_editor(&e),
        }
    }
    pub fn end_drag(&mut self) {
        self.inner.end_drag();
    }
    pub fn insert_vertex(&mut self, edge: u32) -> i32 {
        match self.inner.insert_vertex(edge as usize) {
            Ok(i) => i as i32,
            Err(_) => -1,
        }
    }
    pub fn insert_vertex_res(&mut self, edge: u32) -> JsValue {
        match self.inner.insert_vertex(edge as usize) {
            Ok(i) => error::ok(JsValue::from_f64(i as f64)),
            Err(e) => error::from_editor(&e),
        }
    }

    // Selection
    pub fn select_vertex(&mut self, index: u32) -> bool {
        self.inner.select_vertex(index as usize).is_ok()
    }
    pub fn select_vertex_res(&mut self, index: u32) -> JsValue {
        match self.inner.select_vertex(index as usize) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_editor(&e),
        }
    }
    pub fn deselect_vertex(&mut self) {
        self.inner.deselect_vertex();
    }
    /// -1 when nothing is selected.
    pub fn selected_vertex(&self) -> i32 {
        match self.inner.selected_vertex() {
            Some(i) => i as i32,
            None => -1,
        }
    }
    pub fn delete_selected_vertex(&mut self) -> bool {
        self.inner.delete_selected_vertex().is_ok()
    }
    pub fn delete_selected_vertex_res(&mut self) -> JsValue {
        match self.inner.delete_selected_vertex() {
            Ok(i) => error::ok(JsValue::from_f64(i as f64)),
            Err(e) => error::from_editor(&e),
        }
    }

    // Geometry exchange with persistence
    pub fn to_geojson(&self) -> JsValue {
        match self.inner.to_geometry() {
            Some(g) => to_js(&g).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }
    pub fn to_geojson_res(&self) -> JsValue {
        let g = match self.inner.to_geometry() {
            Some(g) => g,
            None => return error::from_editor(&EditorError::MissingGeometry),
        };
        match to_js(&g) {
            Ok(v) => error::ok(v),
            Err(e) => error::err("bad_geometry", e.to_string(), None),
        }
    }
    pub fn load_geojson(&mut self, v: JsValue) -> bool {
        let geom: stationmap::Geometry = match serde_wasm_bindgen::from_value(v) {
            Ok(g) => g,
            Err(_) => return false,
        };
        self.inner.load_geometry(&geom).is_ok()
    }
    pub fn load_geojson_res(&mut self, v: JsValue) -> JsValue {
        let geom: stationmap::Geometry = match serde_wasm_bindgen::from_value(v) {
            Ok(g) => g,
            Err(_) => {
                return error::from_editor(&EditorError::MalformedGeometry(
                    "unrecognized geometry",
                ))
            }
        };
        match self.inner.load_geometry(&geom) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::from_editor(&e),
        }
    }

    // Pointer hooks wired to the map's marker events. Rejections go to the
    // console; use the *_res methods when the caller needs the error code.
    pub fn on_vertex_dragged(&mut self, index: u32, lat: f64, lng: f64) {
        if let Err(e) = self.inner.drag_vertex(index as usize, LatLng::new(lat, lng)) {
            warn(&e);
        }
    }
    pub fn on_drag_ended(&mut self) {
        self.inner.end_drag();
    }
    pub fn on_midpoint_clicked(&mut self, edge: u32) {
        if let Err(e) = self.inner.insert_vertex(edge as usize) {
            warn(&e);
        }
    }
    pub fn on_vertex_double_clicked(&mut self, index: u32) {
        if let Err(e) = self.inner.select_vertex(index as usize) {
            warn(&e);
        }
    }
}

#[wasm_bindgen]
impl Catalog {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Catalog, JsValue> {
        let store = crate::storage::LocalStore::new()?;
        Ok(Catalog {
            inner: stationmap::store::Catalog::new(store),
        })
    }

    pub fn stations(&self) -> JsValue {
        match self.inner.stations() {
            Ok(list) => to_js(&list).unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn stations_res(&self) -> JsValue {
        match self.inner.stations() {
            Ok(list) => match to_js(&list) {
                Ok(v) => error::ok(v),
                Err(e) => error::err("bad_record", e.to_string(), None),
            },
            Err(e) => error::err("storage_corrupt", e.to_string(), None),
        }
    }
    pub fn station_by_id(&self, id: &str) -> JsValue {
        match self.inner.station_by_id(id) {
            Ok(Some(s)) => to_js(&s).unwrap_or(JsValue::NULL),
            _ => JsValue::NULL,
        }
    }
    pub fn add_station_res(&mut self, station: JsValue) -> JsValue {
        let station: Station = match serde_wasm_bindgen::from_value(station) {
            Ok(s) => s,
            Err(e) => return error::err("bad_record", e.to_string(), None),
        };
        match self.inner.add_station(station) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::err("storage_corrupt", e.to_string(), None),
        }
    }
    pub fn update_station_res(&mut self, station: JsValue) -> JsValue {
        let station: Station = match serde_wasm_bindgen::from_value(station) {
            Ok(s) => s,
            Err(e) => return error::err("bad_record", e.to_string(), None),
        };
        match self.inner.update_station(&station) {
            Ok(found) => error::ok(JsValue::from_bool(found)),
            Err(e) => error::err("storage_corrupt", e.to_string(), None),
        }
    }
    pub fn delete_station(&mut self, id: &str) -> bool {
        self.inner.delete_station(id).is_ok()
    }

    pub fn platforms_by_station(&self, station_id: &str) -> JsValue {
        match self.inner.platforms_by_station(station_id) {
            Ok(list) => to_js(&list).unwrap_or(JsValue::NULL),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn add_platform_res(&mut self, platform: JsValue) -> JsValue {
        let platform: Platform = match serde_wasm_bindgen::from_value(platform) {
            Ok(p) => p,
            Err(e) => return error::err("bad_record", e.to_string(), None),
        };
        match self.inner.add_platform(platform) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::err("storage_corrupt", e.to_string(), None),
        }
    }

    pub fn clear_all(&mut self) {
        self.inner.clear_all();
    }

    /// Persists a new station built from the editor's polygon. The stored
    /// position is the polygon's bounds center; `lat`/`lng`/`zoom` are the
    /// current map view. Surfaces `no_polygon` when nothing is drawn.
    pub fn finalize_station_res(
        &mut self,
        editor: &Editor,
        id: &str,
        name: &str,
        code: &str,
        lat: f64,
        lng: f64,
        zoom: u32,
    ) -> JsValue {
        let view = ViewSnapshot {
            center: LatLng::new(lat, lng),
            zoom,
        };
        match finalize_station(&mut self.inner, &editor.inner, &view, id, name, code) {
            Ok(st) => match to_js(&st) {
                Ok(v) => error::ok(v),
                Err(e) => error::err("bad_record", e.to_string(), None),
            },
            Err(e) => error::from_save(&e),
        }
    }

    /// Re-saves an existing station's shape and zoom.
    pub fn update_station_shape_res(
        &mut self,
        editor: &Editor,
        id: &str,
        lat: f64,
        lng: f64,
        zoom: u32,
    ) -> JsValue {
        let view = ViewSnapshot {
            center: LatLng::new(lat, lng),
            zoom,
        };
        match update_station_shape(&mut self.inner, &editor.inner, &view, id) {
            Ok(st) => match to_js(&st) {
                Ok(v) => error::ok(v),
                Err(e) => error::err("bad_record", e.to_string(), None),
            },
            Err(e) => error::from_save(&e),
        }
    }
}
