use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_FILTER, INITIAL_CENTER, INITIAL_ZOOM, JUNCTION_ENDPOINT,
    STATION_ENDPOINT, WMS_ATTRIBUTION, WMS_FORMAT, WMS_LAYERS, WMS_URL,
};
use crate::models::LatLng;

/// WMS base layer shown beneath the overlays
#[derive(Debug, Clone, PartialEq)]
pub struct WmsLayer {
    pub url: String,
    pub layers: String,
    pub format: String,
    pub transparent: bool,
    pub attribution: String,
}

impl Default for WmsLayer {
    fn default() -> Self {
        Self {
            url: WMS_URL.to_string(),
            layers: WMS_LAYERS.to_string(),
            format: WMS_FORMAT.to_string(),
            transparent: true,
            attribution: WMS_ATTRIBUTION.to_string(),
        }
    }
}

/// Runtime settings for the junction map
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub api_base: String,
    pub junction_endpoint: String,
    pub station_endpoint: String,
    pub center: LatLng,
    pub zoom: f64,
    pub base_layer: WmsLayer,
    pub default_filter: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            junction_endpoint: JUNCTION_ENDPOINT.to_string(),
            station_endpoint: STATION_ENDPOINT.to_string(),
            center: LatLng::new(INITIAL_CENTER.0, INITIAL_CENTER.1),
            zoom: INITIAL_ZOOM,
            base_layer: WmsLayer::default(),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl MapConfig {
    #[must_use]
    pub fn junctions_url(&self) -> String {
        join_url(&self.api_base, &self.junction_endpoint)
    }

    #[must_use]
    pub fn stations_url(&self) -> String {
        join_url(&self.api_base, &self.station_endpoint)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = MapConfig::default();
        assert_eq!(config.junctions_url(), "http://localhost:8082/junctionLink");
        assert_eq!(config.stations_url(), "http://localhost:8082/internalNode");
        assert_eq!(config.default_filter, "KR");
    }

    #[test]
    fn test_api_base_slashes_are_normalised() {
        let config = MapConfig {
            api_base: "https://rail.example/api/".to_string(),
            ..MapConfig::default()
        };
        assert_eq!(config.junctions_url(), "https://rail.example/api/junctionLink");
    }
}
