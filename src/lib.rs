use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod storage;

#[wasm_bindgen]
pub struct Editor {
    pub(crate) inner: stationmap::Editor,
}

impl Editor {
    pub fn rs_new() -> Editor {
        Editor {
            inner: stationmap::Editor::new(),
        }
    }
    pub fn rs_geom_version(&self) -> u64 {
        self.inner.geom_version()
    }
}

#[wasm_bindgen]
pub struct Catalog {
    pub(crate) inner: stationmap::store::Catalog<storage::LocalStore>,
}
