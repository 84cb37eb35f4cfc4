use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::error::EditorError;
use crate::geometry::bounds_center;
use crate::model::{Platform, Station};
use crate::{Editor, MapView};

const STATIONS_KEY: &str = "stations";
const PLATFORMS_KEY: &str = "platforms";

/// Key-value persistence collaborator: browser localStorage in the wasm
/// build, in-memory for tests and native use.
pub trait RecordStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored record list is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Editor(#[from] EditorError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no station with id {0}")]
    UnknownStation(String),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Station and platform record lists, each persisted as one JSON array
/// under its own key. An absent key reads as an empty list.
pub struct Catalog<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Catalog<S> {
    pub fn new(store: S) -> Catalog<S> {
        Catalog { store }
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.get(key) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, list: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list)?;
        self.store.set(key, &raw);
        Ok(())
    }

    pub fn stations(&self) -> Result<Vec<Station>, StoreError> {
        self.read_list(STATIONS_KEY)
    }

    pub fn station_by_id(&self, id: &str) -> Result<Option<Station>, StoreError> {
        Ok(self.stations()?.into_iter().find(|s| s.id == id))
    }

    pub fn add_station(&mut self, station: Station) -> Result<(), StoreError> {
        let mut stations = self.stations()?;
        stations.push(station);
        self.write_list(STATIONS_KEY, &stations)
    }

    /// Replaces the station with a matching id. Returns false (and writes
    /// nothing) when the id is unknown.
    pub fn update_station(&mut self, updated: &Station) -> Result<bool, StoreError> {
        let mut stations = self.stations()?;
        match stations.iter_mut().find(|s| s.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            None => return Ok(false),
        }
        self.write_list(STATIONS_KEY, &stations)?;
        Ok(true)
    }

    /// Deleting a station leaves its platforms behind, matching the
    /// original storage behavior.
    pub fn delete_station(&mut self, id: &str) -> Result<(), StoreError> {
        let stations: Vec<Station> = self
            .stations()?
            .into_iter()
            .filter(|s| s.id != id)
            .collect();
        self.write_list(STATIONS_KEY, &stations)
    }

    pub fn platforms(&self) -> Result<Vec<Platform>, StoreError> {
        self.read_list(PLATFORMS_KEY)
    }

    pub fn add_platform(&mut self, platform: Platform) -> Result<(), StoreError> {
        let mut platforms = self.platforms()?;
        platforms.push(platform);
        self.write_list(PLATFORMS_KEY, &platforms)
    }

    pub fn platforms_by_station(&self, station_id: &str) -> Result<Vec<Platform>, StoreError> {
        Ok(self
            .platforms()?
            .into_iter()
            .filter(|p| p.station_id == station_id)
            .collect())
    }

    pub fn clear_all(&mut self) {
        self.store.remove(STATIONS_KEY);
        self.store.remove(PLATFORMS_KEY);
    }
}

/// Builds and persists a station record from the drawn polygon. The stored
/// position is the polygon's bounding-box center; zoom comes from the map
/// view. Rejected with `MissingGeometry` when nothing is drawn, in which
/// case no partial write happens.
pub fn finalize_station<S: RecordStore>(
    catalog: &mut Catalog<S>,
    editor: &Editor,
    view: &impl MapView,
    id: &str,
    name: &str,
    code: &str,
) -> Result<Station, SaveError> {
    let geometry = editor.to_geometry().ok_or(EditorError::MissingGeometry)?;
    let center = editor
        .ring()
        .and_then(bounds_center)
        .unwrap_or_else(|| view.center());
    let station = Station {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        lat: center.lat,
        lng: center.lng,
        zoom: view.zoom(),
        geojson: Some(geometry),
    };
    catalog.add_station(station.clone())?;
    Ok(station)
}

/// Re-saves an existing station's shape and zoom.
pub fn update_station_shape<S: RecordStore>(
    catalog: &mut Catalog<S>,
    editor: &Editor,
    view: &impl MapView,
    id: &str,
) -> Result<Station, SaveError> {
    let geometry = editor.to_geometry().ok_or(EditorError::MissingGeometry)?;
    let mut station = catalog
        .station_by_id(id)?
        .ok_or_else(|| SaveError::UnknownStation(id.to_string()))?;
    station.zoom = view.zoom();
    station.geojson = Some(geometry);
    catalog.update_station(&station)?;
    Ok(station)
}
