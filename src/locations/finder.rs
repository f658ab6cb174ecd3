//! Location finder: list, selection and map synchronization
//!
//! The finder owns the search term, the visible subset and the selection.
//! Whenever the visible subset changes, every marker is removed from the map
//! before the new set is placed, and at most one popup is open at a time.

use super::filter::matching_indices;
use super::{
    Coordinates,
    InfoWindowHandle,
    Location,
    MapError,
    MapHandle,
    MapOptions,
    MapProvider,
    MarkerHandle,
    MarkerOptions,
    ScriptLoader,
    script_url,
};
use crate::config::MapsConfig;
use crate::i18n::{
    Language,
    LanguageContext,
};

/// Lifecycle of the embedded map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapStatus {
    /// Not mounted, or unmounted
    Unmounted,
    /// Waiting for the map script
    Loading,
    Ready,
    /// The script or the map could not be loaded; [`LocationFinder::retry`]
    /// tries again
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinderOptions {
    pub api_key: Option<String>,
    pub zoom: u8,
    /// Center used when there are no locations
    pub fallback_center: Coordinates,
}

impl FinderOptions {
    #[must_use]
    pub fn from_config(config: &MapsConfig) -> Self {
        Self {
            api_key: config.resolve_api_key(),
            zoom: config.default_zoom,
            fallback_center: config.fallback_center,
        }
    }
}

/// Row of the location list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListEntry<'a> {
    pub location: &'a Location,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlacedMarker {
    location: usize,
    marker: MarkerHandle,
    window: InfoWindowHandle,
}

#[derive(Debug)]
pub struct LocationFinder<P> {
    context: LanguageContext,
    locations: Vec<Location>,
    options: FinderOptions,
    provider: P,
    term: String,
    /// Indexes into `locations`
    visible: Vec<usize>,
    selected: Option<usize>,
    status: MapStatus,
    map: Option<MapHandle>,
    markers: Vec<PlacedMarker>,
    /// Language the popups of `markers` were written in
    markers_language: Option<Language>,
    open_window: Option<InfoWindowHandle>,
}

impl<P: MapProvider> LocationFinder<P> {
    #[must_use]
    pub fn new(
        context: LanguageContext,
        locations: Vec<Location>,
        provider: P,
        options: FinderOptions,
    ) -> Self {
        let visible = (0..locations.len()).collect();
        Self {
            context,
            locations,
            options,
            provider,
            term: String::new(),
            visible,
            selected: None,
            status: MapStatus::Unmounted,
            map: None,
            markers: Vec::new(),
            markers_language: None,
            open_window: None,
        }
    }

    /// Load the map script and create the map.
    ///
    /// A failure is also recorded in [`Self::status`]; the list, search and
    /// selection keep working without a map.
    ///
    /// # Errors
    /// - No API key is configured
    /// - The script loader fails
    /// - The provider cannot create the map
    pub async fn mount<L: ScriptLoader>(&mut self, loader: &L) -> Result<(), MapError> {
        if self.status == MapStatus::Ready {
            return Ok(());
        }

        let result = self.load_map(loader).await;
        if let Err(e) = &result {
            tracing::warn!("Map unavailable: {}", e);
            self.status = MapStatus::Failed { message: e.to_string() };
        }
        result
    }

    /// Mount again after a failure. Does nothing in any other state.
    ///
    /// # Errors
    /// Same as [`Self::mount`].
    pub async fn retry<L: ScriptLoader>(&mut self, loader: &L) -> Result<(), MapError> {
        if !matches!(self.status, MapStatus::Failed { .. }) {
            return Ok(());
        }
        tracing::info!("Retrying map load");
        self.mount(loader).await
    }

    async fn load_map<L: ScriptLoader>(&mut self, loader: &L) -> Result<(), MapError> {
        let key = self.options.api_key.clone().ok_or(MapError::MissingApiKey)?;

        self.status = MapStatus::Loading;
        loader.load(&script_url(&key)).await?;

        let center =
            self.locations.first().map_or(self.options.fallback_center, |first| first.coordinates);
        let map = self.provider.create_map(&MapOptions {
            center,
            zoom: self.options.zoom,
            controls: true,
        })?;
        self.map = Some(map);
        self.status = MapStatus::Ready;
        tracing::info!(zoom = self.options.zoom, "Map ready");

        self.rebuild_markers();
        Ok(())
    }

    /// Tear the map down, releasing every marker and popup.
    pub fn unmount(&mut self) {
        self.release_markers();
        self.map = None;
        self.status = MapStatus::Unmounted;
        tracing::debug!("Location finder unmounted");
    }

    #[must_use]
    pub const fn status(&self) -> &MapStatus {
        &self.status
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Update the search term, refilter and replace the markers.
    ///
    /// A selection that is no longer visible is dropped.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.visible = matching_indices(&self.locations, &self.term);

        if let Some(selected) = self.selected
            && !self.visible.contains(&selected)
        {
            tracing::debug!("Selection filtered out");
            self.selected = None;
        }
        self.rebuild_markers();
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Location> {
        self.visible.iter().filter_map(|index| self.locations.get(*index)).collect()
    }

    #[must_use]
    pub fn list(&self) -> Vec<ListEntry<'_>> {
        self.visible
            .iter()
            .filter_map(|index| {
                let location = self.locations.get(*index)?;
                Some(ListEntry { location, selected: self.selected == Some(*index) })
            })
            .collect()
    }

    /// Select a visible location by id (a click in the list).
    ///
    /// Returns `false` when no visible location has that id.
    pub fn select(&mut self, id: &str) -> bool {
        let found = self
            .visible
            .iter()
            .copied()
            .find(|index| self.locations.get(*index).is_some_and(|location| location.id == id));
        match found {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => false,
        }
    }

    /// Select the location behind a marker (a click on the map).
    pub fn click_marker(&mut self, marker: MarkerHandle) -> Option<&Location> {
        let index = self.markers.iter().find(|placed| placed.marker == marker)?.location;
        self.select_index(index);
        self.locations.get(index)
    }

    /// Close the popup and forget the selection.
    pub fn clear_selection(&mut self) {
        if let Some(window) = self.open_window.take() {
            self.provider.close_info_window(window);
        }
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Location> {
        self.locations.get(self.selected?)
    }

    /// Location shown in the details panel: the selection, else the first
    /// visible location, else the first location.
    #[must_use]
    pub fn details(&self) -> Option<&Location> {
        self.selected()
            .or_else(|| self.visible.first().and_then(|index| self.locations.get(*index)))
            .or_else(|| self.locations.first())
    }

    #[must_use]
    pub fn details_title(&self) -> String {
        self.details()
            .map_or_else(|| self.context.translate("locations.fallbackTitle"), |l| l.name.clone())
    }

    /// Marker currently standing for location `id`.
    #[must_use]
    pub fn marker_for(&self, id: &str) -> Option<MarkerHandle> {
        self.markers
            .iter()
            .find(|placed| self.locations.get(placed.location).is_some_and(|l| l.id == id))
            .map(|placed| placed.marker)
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Popup markup for `location`.
    #[must_use]
    pub fn info_content(&self, location: &Location) -> String {
        info_content(&self.context, location)
    }

    fn select_index(&mut self, index: usize) {
        self.selected = Some(index);
        if let Some(location) = self.locations.get(index) {
            tracing::debug!(id = %location.id, name = %location.name, "Location selected");
        }
        if self.markers_stale() {
            self.rebuild_markers();
        } else {
            self.focus_selected();
        }
    }

    /// Whether the popups were written before the last language switch.
    fn markers_stale(&self) -> bool {
        self.map.is_some() && self.markers_language != Some(self.context.current_language())
    }

    /// Open the selected location's popup and pan to it, if it has a marker.
    fn focus_selected(&mut self) {
        let (Some(map), Some(selected)) = (self.map, self.selected) else {
            return;
        };
        let Some(placed) = self.markers.iter().find(|placed| placed.location == selected).copied()
        else {
            return;
        };

        if let Some(open) = self.open_window
            && open != placed.window
        {
            self.provider.close_info_window(open);
        }
        self.provider.open_info_window(placed.window, placed.marker, map);
        self.open_window = Some(placed.window);

        if let Some(location) = self.locations.get(selected) {
            self.provider.pan_to(map, location.coordinates);
        }
    }

    fn release_markers(&mut self) {
        if let Some(window) = self.open_window.take() {
            self.provider.close_info_window(window);
        }
        for placed in self.markers.drain(..) {
            self.provider.remove_marker(placed.marker);
        }
        self.markers_language = None;
    }

    fn rebuild_markers(&mut self) {
        let Some(map) = self.map else {
            return;
        };
        self.release_markers();

        let mut placed = Vec::with_capacity(self.visible.len());
        for &index in &self.visible {
            let Some(location) = self.locations.get(index) else {
                continue;
            };
            let marker = self.provider.create_marker(
                map,
                &MarkerOptions {
                    position: location.coordinates,
                    title: location.name.clone(),
                    drop_animation: true,
                },
            );
            let window = self.provider.create_info_window(&info_content(&self.context, location));
            placed.push(PlacedMarker { location: index, marker, window });
        }
        self.markers = placed;
        self.markers_language = Some(self.context.current_language());
        tracing::debug!(markers = self.markers.len(), "Markers rebuilt");

        self.focus_selected();
    }
}

fn info_content(context: &LanguageContext, location: &Location) -> String {
    let mut html = format!(
        "<div class=\"map-info-window\"><h3>{}</h3><p>{}</p>",
        escape_html(&location.name),
        escape_html(&location.address)
    );
    if let Some(phone) = &location.phone {
        html.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>",
            context.translate("locations.phone"),
            escape_html(phone)
        ));
    }
    if let Some(email) = &location.email {
        html.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>",
            context.translate("locations.email"),
            escape_html(email)
        ));
    }
    html.push_str("</div>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
