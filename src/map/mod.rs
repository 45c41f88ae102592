//! Drawable map surface the overlays are rendered onto.

mod leaflet;
#[cfg(test)]
pub(crate) mod recording;

pub use leaflet::{LeafletLayer, LeafletMap};

use crate::models::LatLng;

/// Circle sized in meters on the ground
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub radius_m: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
}

/// Operations the overlay registry needs from a map.
///
/// Every `add_*` call puts one primitive on the map and hands back the only
/// handle to it; passing that handle to [`MapSurface::remove`] takes the
/// primitive off again.
pub trait MapSurface {
    type Handle;

    /// # Errors
    /// Returns an error if the primitive could not be created or added.
    fn add_circle(&mut self, at: LatLng, style: &CircleStyle) -> Result<Self::Handle, String>;

    /// # Errors
    /// Returns an error if the primitive could not be created or added.
    fn add_polyline(&mut self, points: &[LatLng], style: &LineStyle) -> Result<Self::Handle, String>;

    /// # Errors
    /// Returns an error if the primitive could not be created or added.
    fn add_marker(&mut self, at: LatLng) -> Result<Self::Handle, String>;

    /// # Errors
    /// Returns an error if the popup could not be bound.
    fn bind_popup(&mut self, handle: &mut Self::Handle, text: &str) -> Result<(), String>;

    /// Register a click callback, kept alive for as long as the handle is
    ///
    /// # Errors
    /// Returns an error if the listener could not be registered.
    fn on_click(&mut self, handle: &mut Self::Handle, callback: Box<dyn Fn()>) -> Result<(), String>;

    fn remove(&mut self, handle: Self::Handle);

    /// Number of layers currently on the map, base layers included
    fn layer_count(&self) -> usize;
}
