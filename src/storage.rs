use stationmap::store::RecordStore;
use wasm_bindgen::JsValue;

use crate::error;

/// `RecordStore` over the browser's localStorage.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn new() -> Result<LocalStore, JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| error::err("storage_unavailable", "no window object", None))?;
        let storage = window
            .local_storage()
            .map_err(|_| error::err("storage_unavailable", "localStorage blocked", None))?
            .ok_or_else(|| error::err("storage_unavailable", "localStorage unavailable", None))?;
        Ok(LocalStore { storage })
    }
}

impl RecordStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }
    fn set(&mut self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }
    fn remove(&mut self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}
