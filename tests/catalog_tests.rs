use js_sys::{Array, Reflect};
use stationmap_wasm::{Catalog, Editor};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
        if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
            return c.as_string().map_or(false, |s| s == code);
        }
    }
    false
}

fn is_ok(v: &JsValue) -> bool {
    Reflect::get(v, &JsValue::from_str("ok"))
        .ok()
        .and_then(|x| x.as_bool())
        .unwrap_or(false)
}

fn fresh_catalog() -> Catalog {
    let mut c = Catalog::new().expect("localStorage available in browser tests");
    c.clear_all();
    c
}

#[wasm_bindgen_test]
fn finalize_without_polygon_is_rejected() {
    let mut catalog = fresh_catalog();
    let editor = Editor::new();
    let r = catalog.finalize_station_res(&editor, "1", "Euston", "EUS", 51.5, -0.1, 13);
    assert!(is_err(&r, "no_polygon"));
    let stations = Array::from(&catalog.stations());
    assert_eq!(stations.length(), 0, "partial write on error");
}

#[wasm_bindgen_test]
fn finalize_persists_station_with_shape() {
    let mut catalog = fresh_catalog();
    let mut editor = Editor::new();
    editor.start_drawing(20.0, 78.0, false);
    let r = catalog.finalize_station_res(&editor, "1", "Nagpur Jn", "NGP", 0.0, 0.0, 15);
    assert!(is_ok(&r));

    let station = catalog.station_by_id("1");
    assert!(!station.is_null());
    let geo = Reflect::get(&station, &JsValue::from_str("geojson")).unwrap();
    let ty = Reflect::get(&geo, &JsValue::from_str("type")).unwrap();
    assert_eq!(ty.as_string().as_deref(), Some("Polygon"));

    // The saved shape loads back into a fresh session.
    let mut other = Editor::new();
    assert!(other.load_geojson(geo));
    assert_eq!(other.vertex_count(), 3);
}

#[wasm_bindgen_test]
fn update_station_shape_requires_known_id() {
    let mut catalog = fresh_catalog();
    let mut editor = Editor::new();
    editor.start_drawing(20.0, 78.0, false);
    let r = catalog.update_station_shape_res(&editor, "missing", 20.0, 78.0, 14);
    assert!(is_err(&r, "unknown_station"));
}
