//! Overlay layers drawn on top of the base map.
//!
//! Each category owns the handles of the primitives it created, so clearing a
//! category never touches primitives of another one.

use std::rc::Rc;
use bitflags::bitflags;
use crate::constants::{
    JUNCTION_LINE_COLOR, JUNCTION_POINT_COLOR, JUNCTION_POINT_FILL_OPACITY, JUNCTION_POINT_RADIUS_M,
};
use crate::filter::{filter_junctions, filter_stations, stations_on_junction};
use crate::logging::log;
use crate::map::{CircleStyle, LineStyle, MapSurface};
use crate::models::{Junction, LatLng, NetworkData, Station};

bitflags! {
    /// Which overlay categories are switched on
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Overlays: u8 {
        const MARKERS = 0b001;
        const LINES = 0b010;
        const STATIONS = 0b100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayCategory {
    /// Circle at the first node of each junction
    JunctionPoints,
    /// Clickable line between the two nodes of each junction
    JunctionLines,
    /// Marker per station, either from the station toggle or a line click
    StationMarkers,
}

impl OverlayCategory {
    pub const ALL: [Self; 3] = [Self::JunctionPoints, Self::JunctionLines, Self::StationMarkers];

    #[must_use]
    pub fn flag(self) -> Overlays {
        match self {
            Self::JunctionPoints => Overlays::MARKERS,
            Self::JunctionLines => Overlays::LINES,
            Self::StationMarkers => Overlays::STATIONS,
        }
    }

    /// Button label for the given toggle state
    #[must_use]
    pub fn toggle_label(self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (Self::JunctionPoints, false) => "Show Markers",
            (Self::JunctionPoints, true) => "Hide Markers",
            (Self::JunctionLines, false) => "Show Lines",
            (Self::JunctionLines, true) => "Hide Lines",
            (Self::StationMarkers, false) => "Show Stations",
            (Self::StationMarkers, true) => "Hide Stations",
        }
    }
}

/// Called with the junction whose line was clicked
pub type LineClickHandler = Rc<dyn Fn(&Junction)>;

/// Owns the map surface and every overlay primitive placed on it
pub struct OverlayRegistry<S: MapSurface> {
    surface: S,
    junction_points: Vec<S::Handle>,
    junction_lines: Vec<S::Handle>,
    station_markers: Vec<S::Handle>,
    point_style: CircleStyle,
    line_style: LineStyle,
    on_line_click: Option<LineClickHandler>,
}

impl<S: MapSurface> OverlayRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            junction_points: Vec::new(),
            junction_lines: Vec::new(),
            station_markers: Vec::new(),
            point_style: CircleStyle {
                color: JUNCTION_POINT_COLOR.to_string(),
                fill_color: JUNCTION_POINT_COLOR.to_string(),
                fill_opacity: JUNCTION_POINT_FILL_OPACITY,
                radius_m: JUNCTION_POINT_RADIUS_M,
            },
            line_style: LineStyle {
                color: JUNCTION_LINE_COLOR.to_string(),
            },
            on_line_click: None,
        }
    }

    /// Set the handler attached to lines drawn from now on
    pub fn set_line_click_handler(&mut self, handler: LineClickHandler) {
        self.on_line_click = Some(handler);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Give the surface back, removing every overlay primitive first
    pub fn into_surface(mut self) -> S {
        for category in OverlayCategory::ALL {
            self.clear(category);
        }
        self.surface
    }

    #[cfg(test)]
    fn count(&self, category: OverlayCategory) -> usize {
        match category {
            OverlayCategory::JunctionPoints => self.junction_points.len(),
            OverlayCategory::JunctionLines => self.junction_lines.len(),
            OverlayCategory::StationMarkers => self.station_markers.len(),
        }
    }

    fn handles_mut(&mut self, category: OverlayCategory) -> &mut Vec<S::Handle> {
        match category {
            OverlayCategory::JunctionPoints => &mut self.junction_points,
            OverlayCategory::JunctionLines => &mut self.junction_lines,
            OverlayCategory::StationMarkers => &mut self.station_markers,
        }
    }

    /// Remove every primitive of a category from the map. Returns how many
    /// were removed.
    pub fn clear(&mut self, category: OverlayCategory) -> usize {
        let handles = std::mem::take(self.handles_mut(category));
        let removed = handles.len();
        for handle in handles {
            self.surface.remove(handle);
        }
        removed
    }

    /// Bring a category in line with its toggle.
    ///
    /// Off removes the category's primitives. On removes them too and then
    /// draws one primitive per record passing the filter, so repeated passes
    /// never stack duplicates. Returns the number of primitives drawn.
    pub fn reconcile(
        &mut self,
        category: OverlayCategory,
        enabled: bool,
        data: &NetworkData,
        filter_value: &str,
    ) -> usize {
        self.clear(category);
        if !enabled {
            return 0;
        }

        let drawn = match category {
            OverlayCategory::JunctionPoints => self.draw_junction_points(&data.junctions, filter_value),
            OverlayCategory::JunctionLines => self.draw_junction_lines(&data.junctions, filter_value),
            OverlayCategory::StationMarkers => self.draw_stations(filter_stations(&data.stations, filter_value)),
        };
        log!("Drew {} primitives for {:?}", drawn, category);
        drawn
    }

    /// Replace the shown station markers with the stations lying on
    /// `junction`. Applies regardless of the station toggle.
    pub fn highlight_stations_on(&mut self, junction: &Junction, stations: &[Station]) -> usize {
        self.clear(OverlayCategory::StationMarkers);

        let matching = stations_on_junction(stations, junction);
        log!(
            "Matching stations for junction {:?}: {:?}",
            junction.junction_id,
            matching.iter().map(|s| s.station_id.as_deref()).collect::<Vec<_>>()
        );
        self.draw_stations(matching)
    }

    fn draw_junction_points(&mut self, junctions: &[Junction], filter_value: &str) -> usize {
        let mut handles = Vec::new();
        for junction in filter_junctions(junctions, filter_value) {
            let Some(node1) = junction.node1() else { continue };
            match self.place_circle(node1, &junction.popup_text()) {
                Ok(handle) => handles.push(handle),
                Err(e) => leptos::logging::error!("Failed to add junction point: {}", e),
            }
        }
        let drawn = handles.len();
        self.junction_points.extend(handles);
        drawn
    }

    fn draw_junction_lines(&mut self, junctions: &[Junction], filter_value: &str) -> usize {
        let mut handles = Vec::new();
        for junction in filter_junctions(junctions, filter_value) {
            let Some((node1, node2)) = junction.endpoints() else { continue };
            match self.place_line(junction, [node1, node2]) {
                Ok(handle) => handles.push(handle),
                Err(e) => leptos::logging::error!("Failed to add junction line: {}", e),
            }
        }
        let drawn = handles.len();
        self.junction_lines.extend(handles);
        drawn
    }

    fn draw_stations(&mut self, stations: Vec<&Station>) -> usize {
        let mut handles = Vec::new();
        for station in stations {
            let Some(position) = station.position() else { continue };
            match self.place_marker(position, &station.popup_text()) {
                Ok(handle) => handles.push(handle),
                Err(e) => leptos::logging::error!("Failed to add station marker: {}", e),
            }
        }
        let drawn = handles.len();
        self.station_markers.extend(handles);
        drawn
    }

    fn place_circle(&mut self, at: LatLng, popup: &str) -> Result<S::Handle, String> {
        let mut handle = self.surface.add_circle(at, &self.point_style)?;
        let setup = self.surface.bind_popup(&mut handle, popup);
        self.keep_if_ok(setup, handle)
    }

    fn place_marker(&mut self, at: LatLng, popup: &str) -> Result<S::Handle, String> {
        let mut handle = self.surface.add_marker(at)?;
        let setup = self.surface.bind_popup(&mut handle, popup);
        self.keep_if_ok(setup, handle)
    }

    fn place_line(&mut self, junction: &Junction, points: [LatLng; 2]) -> Result<S::Handle, String> {
        let mut handle = self.surface.add_polyline(&points, &self.line_style)?;
        let mut setup = self.surface.bind_popup(&mut handle, &junction.popup_text());

        if let (true, Some(handler)) = (setup.is_ok(), self.on_line_click.clone()) {
            let clicked = junction.clone();
            setup = self.surface.on_click(&mut handle, Box::new(move || handler(&clicked)));
        }
        self.keep_if_ok(setup, handle)
    }

    /// Keep a freshly added primitive only if its setup succeeded
    fn keep_if_ok(&mut self, setup: Result<(), String>, handle: S::Handle) -> Result<S::Handle, String> {
        match setup {
            Ok(()) => Ok(handle),
            Err(e) => {
                self.surface.remove(handle);
                Err(e)
            }
        }
    }
}
