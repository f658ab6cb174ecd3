//! In-process map provider and script loader
//!
//! [`RecordingMap`] keeps a log of every command it receives and tracks
//! which markers are attached and which popups are open. The CLI prints the
//! log; tests assert on it.

use std::collections::BTreeSet;
use std::fmt;

use super::{
    Coordinates,
    InfoWindowHandle,
    MapError,
    MapHandle,
    MapOptions,
    MapProvider,
    MarkerHandle,
    MarkerOptions,
    ScriptLoader,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    CreateMap { map: MapHandle, center: Coordinates, zoom: u8 },
    CreateMarker { marker: MarkerHandle, map: MapHandle, position: Coordinates, title: String },
    RemoveMarker { marker: MarkerHandle },
    CreateInfoWindow { window: InfoWindowHandle, content: String },
    OpenInfoWindow { window: InfoWindowHandle, anchor: MarkerHandle },
    CloseInfoWindow { window: InfoWindowHandle },
    PanTo { map: MapHandle, position: Coordinates },
}

impl fmt::Display for MapCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateMap { map, center, zoom } => {
                write!(f, "create map #{} at ({center}) zoom {zoom}", map.0)
            }
            Self::CreateMarker { marker, map, position, title } => {
                write!(f, "add marker #{} on map #{} at ({position}) \"{title}\"", marker.0, map.0)
            }
            Self::RemoveMarker { marker } => write!(f, "remove marker #{}", marker.0),
            Self::CreateInfoWindow { window, .. } => write!(f, "create popup #{}", window.0),
            Self::OpenInfoWindow { window, anchor } => {
                write!(f, "open popup #{} on marker #{}", window.0, anchor.0)
            }
            Self::CloseInfoWindow { window } => write!(f, "close popup #{}", window.0),
            Self::PanTo { map, position } => write!(f, "pan map #{} to ({position})", map.0),
        }
    }
}

/// Map provider that records instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingMap {
    next_id: u64,
    commands: Vec<MapCommand>,
    attached: BTreeSet<MarkerHandle>,
    open: BTreeSet<InfoWindowHandle>,
    refuse_maps: bool,
}

impl RecordingMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose `create_map` always fails.
    #[must_use]
    pub fn refusing() -> Self {
        Self { refuse_maps: true, ..Self::default() }
    }

    const fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    #[must_use]
    pub fn commands(&self) -> &[MapCommand] {
        &self.commands
    }

    /// Forget the log so far, keeping the map state.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Markers currently attached to a map.
    #[must_use]
    pub fn attached_markers(&self) -> Vec<MarkerHandle> {
        self.attached.iter().copied().collect()
    }

    /// Popups currently open.
    #[must_use]
    pub fn open_info_windows(&self) -> Vec<InfoWindowHandle> {
        self.open.iter().copied().collect()
    }

    /// Last position the map was panned to.
    #[must_use]
    pub fn last_pan(&self) -> Option<Coordinates> {
        self.commands.iter().rev().find_map(|command| match command {
            MapCommand::PanTo { position, .. } => Some(*position),
            _ => None,
        })
    }
}

impl MapProvider for RecordingMap {
    fn create_map(&mut self, options: &MapOptions) -> Result<MapHandle, MapError> {
        if self.refuse_maps {
            return Err(MapError::Provider("map creation refused".to_string()));
        }
        let map = MapHandle(self.allocate());
        self.commands.push(MapCommand::CreateMap { map, center: options.center, zoom: options.zoom });
        Ok(map)
    }

    fn create_marker(&mut self, map: MapHandle, options: &MarkerOptions) -> MarkerHandle {
        let marker = MarkerHandle(self.allocate());
        self.attached.insert(marker);
        self.commands.push(MapCommand::CreateMarker {
            marker,
            map,
            position: options.position,
            title: options.title.clone(),
        });
        marker
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        self.attached.remove(&marker);
        self.commands.push(MapCommand::RemoveMarker { marker });
    }

    fn create_info_window(&mut self, content: &str) -> InfoWindowHandle {
        let window = InfoWindowHandle(self.allocate());
        self.commands.push(MapCommand::CreateInfoWindow { window, content: content.to_string() });
        window
    }

    fn open_info_window(&mut self, window: InfoWindowHandle, anchor: MarkerHandle, _map: MapHandle) {
        self.open.insert(window);
        self.commands.push(MapCommand::OpenInfoWindow { window, anchor });
    }

    fn close_info_window(&mut self, window: InfoWindowHandle) {
        self.open.remove(&window);
        self.commands.push(MapCommand::CloseInfoWindow { window });
    }

    fn pan_to(&mut self, map: MapHandle, position: Coordinates) {
        self.commands.push(MapCommand::PanTo { map, position });
    }
}

/// Script loader for environments without a browser.
///
/// Succeeds immediately, or fails with a fixed message when built with
/// [`OfflineScriptLoader::failing`].
#[derive(Debug, Clone, Default)]
pub struct OfflineScriptLoader {
    failure: Option<String>,
}

impl OfflineScriptLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()) }
    }
}

impl ScriptLoader for OfflineScriptLoader {
    async fn load(&self, url: &str) -> Result<(), MapError> {
        tracing::debug!(url, "Loading map script");
        match &self.failure {
            Some(message) => Err(MapError::ScriptLoad(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn tracks_attached_markers_and_open_popups() {
        let mut provider = RecordingMap::new();
        let map = provider
            .create_map(&MapOptions { center: Coordinates::new(1.0, 2.0), zoom: 12, controls: true })
            .unwrap();
        let options =
            MarkerOptions { position: Coordinates::new(1.0, 2.0), title: "A".to_string(), drop_animation: true };
        let marker = provider.create_marker(map, &options);
        let window = provider.create_info_window("<p>A</p>");

        provider.open_info_window(window, marker, map);
        expect_that!(provider.open_info_windows(), elements_are![eq(&window)]);

        provider.close_info_window(window);
        provider.remove_marker(marker);
        expect_that!(provider.open_info_windows(), is_empty());
        expect_that!(provider.attached_markers(), is_empty());
        expect_that!(provider.commands().len(), eq(6));
    }

    #[googletest::test]
    fn refusing_provider_fails_map_creation() {
        let mut provider = RecordingMap::refusing();

        let result =
            provider.create_map(&MapOptions { center: Coordinates::new(0.0, 0.0), zoom: 1, controls: false });

        expect_that!(result, err(eq(&MapError::Provider("map creation refused".to_string()))));
    }

    #[googletest::test]
    fn commands_render_readably() {
        let command = MapCommand::PanTo { map: MapHandle(1), position: Coordinates::new(10.5, -66.25) };

        expect_that!(command.to_string(), eq("pan map #1 to (10.500000, -66.250000)"));
    }

    #[tokio::test]
    async fn offline_loader_outcomes() {
        assert_eq!(OfflineScriptLoader::new().load("https://example.test").await, Ok(()));
        assert_eq!(
            OfflineScriptLoader::failing("offline").load("https://example.test").await,
            Err(MapError::ScriptLoad("offline".to_string()))
        );
    }
}
