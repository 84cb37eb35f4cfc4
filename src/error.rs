use js_sys::{Object, Reflect};
use stationmap::store::SaveError;
use stationmap::EditorError;
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_index(index: usize, len: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    set_kv(&d, "len", &JsValue::from_f64(len as f64));
    err("invalid_index", "vertex index out of range", Some(d.into()))
}

pub fn from_editor(e: &EditorError) -> JsValue {
    match e {
        EditorError::MinVertices => err("min_vertices", e.to_string(), None),
        EditorError::NoSelection => err("no_selection", e.to_string(), None),
        EditorError::IndexOutOfRange { index, len } => invalid_index(*index, *len),
        EditorError::MissingGeometry => err("no_polygon", e.to_string(), None),
        EditorError::MalformedGeometry(_) => err("bad_geometry", e.to_string(), None),
        EditorError::NonFinite => err("non_finite", e.to_string(), None),
    }
}

pub fn from_save(e: &SaveError) -> JsValue {
    match e {
        SaveError::Editor(inner) => from_editor(inner),
        SaveError::Store(inner) => err("storage_corrupt", inner.to_string(), None),
        SaveError::UnknownStation(id) => {
            let d = new_obj(); set_kv(&d, "id", &JsValue::from_str(id));
            err("unknown_station", e.to_string(), Some(d.into()))
        }
    }
}
