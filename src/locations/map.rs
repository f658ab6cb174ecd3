//! Map capability consumed by the finder
//!
//! The finder never talks to a concrete mapping SDK. It receives a
//! [`MapProvider`] exposing the handful of primitives it needs and a
//! [`ScriptLoader`] that makes the SDK available.

use std::fmt::Debug;
use std::future::Future;

use thiserror::Error;

use super::Coordinates;

/// Base URL of the maps JavaScript SDK.
pub const SCRIPT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";

/// URL loading the SDK for `api_key`, with the places library.
#[must_use]
pub fn script_url(api_key: &str) -> String {
    format!("{SCRIPT_BASE_URL}?key={api_key}&libraries=places")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("No maps API key configured")]
    MissingApiKey,

    #[error("Failed to load map script: {0}")]
    ScriptLoad(String),

    #[error("Map provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InfoWindowHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: Coordinates,
    pub zoom: u8,
    /// Map type, street view, zoom and fullscreen controls
    pub controls: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: Coordinates,
    pub title: String,
    /// Drop-in animation when the marker appears
    pub drop_animation: bool,
}

/// Primitives of an interactive map.
pub trait MapProvider: Debug + Send {
    /// Create a map.
    ///
    /// # Errors
    /// Returns an error if the provider cannot create a map.
    fn create_map(&mut self, options: &MapOptions) -> Result<MapHandle, MapError>;

    fn create_marker(&mut self, map: MapHandle, options: &MarkerOptions) -> MarkerHandle;

    /// Detach a marker from its map.
    fn remove_marker(&mut self, marker: MarkerHandle);

    fn create_info_window(&mut self, content: &str) -> InfoWindowHandle;

    fn open_info_window(&mut self, window: InfoWindowHandle, anchor: MarkerHandle, map: MapHandle);

    fn close_info_window(&mut self, window: InfoWindowHandle);

    fn pan_to(&mut self, map: MapHandle, position: Coordinates);
}

/// Makes the map SDK available.
pub trait ScriptLoader: Send + Sync {
    /// Load the script at `url`.
    ///
    /// # Errors
    /// Returns [`MapError::ScriptLoad`] if the script could not be loaded.
    fn load(&self, url: &str) -> impl Future<Output = Result<(), MapError>> + Send;
}
