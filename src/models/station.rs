use serde::Deserialize;
use super::{lenient, LatLng};
use crate::constants::STATION_POPUP_PREFIX;

/// A station lying on the link between `node1_code` and `node2_code`, as
/// served by `/internalNode`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Station {
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub station_id: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub dvsn_code: Option<String>,
    #[serde(deserialize_with = "lenient::coordinate")]
    pub sttn_latitude: Option<f64>,
    #[serde(deserialize_with = "lenient::coordinate")]
    pub sttn_longitude: Option<f64>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub node1_code: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub node2_code: Option<String>,
}

impl Station {
    #[must_use]
    pub fn division_code(&self) -> Option<&str> {
        self.dvsn_code.as_deref().filter(|code| !code.is_empty())
    }

    #[must_use]
    pub fn position(&self) -> Option<LatLng> {
        LatLng::checked(self.sttn_latitude, self.sttn_longitude)
    }

    /// Whether this station sits on the link between the given node codes.
    /// Comparison is exact and ordered: (A, B) does not match (B, A).
    #[must_use]
    pub fn lies_between(&self, node1_code: Option<&str>, node2_code: Option<&str>) -> bool {
        self.node1_code.as_deref() == node1_code && self.node2_code.as_deref() == node2_code
    }

    #[must_use]
    pub fn popup_text(&self) -> String {
        format!("{STATION_POPUP_PREFIX}{}", self.station_id.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_station() {
        let json = r#"{
            "stationId": 9001,
            "dvsnCode": "KR-1",
            "sttnLatitude": 15.3,
            "sttnLongitude": 74.1,
            "node1Code": "A",
            "node2Code": "B"
        }"#;
        let station: Station = serde_json::from_str(json).expect("valid station");

        assert_eq!(station.station_id.as_deref(), Some("9001"));
        assert_eq!(station.division_code(), Some("KR-1"));
        assert_eq!(station.position(), Some(LatLng::new(15.3, 74.1)));
        assert_eq!(station.popup_text(), "Station ID: 9001");
    }

    #[test]
    fn test_lies_between_is_ordered() {
        let station = Station {
            node1_code: Some("A".to_string()),
            node2_code: Some("B".to_string()),
            ..Station::default()
        };
        assert!(station.lies_between(Some("A"), Some("B")));
        assert!(!station.lies_between(Some("B"), Some("A")));
        assert!(!station.lies_between(Some("A"), None));
    }

    #[test]
    fn test_missing_codes_match_missing_codes() {
        let station = Station::default();
        assert!(station.lies_between(None, None));
    }
}
