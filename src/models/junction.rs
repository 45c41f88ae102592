use serde::Deserialize;
use super::{lenient, LatLng};
use crate::constants::JUNCTION_POPUP_PREFIX;

/// A link between two network nodes as served by `/junctionLink`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Junction {
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub junction_id: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub node1_code: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub node2_code: Option<String>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub node1_dvsn_code: Option<String>,
    #[serde(deserialize_with = "lenient::coordinate")]
    pub node1_latitude: Option<f64>,
    #[serde(deserialize_with = "lenient::coordinate")]
    pub node1_longitude: Option<f64>,
    #[serde(deserialize_with = "lenient::coordinate")]
    pub node2_latitude: Option<f64>,
    #[serde(deserialize_with = "lenient::coordinate")]
    pub node2_longitude: Option<f64>,
}

impl Junction {
    /// Division code of the first node, ignoring empty strings
    #[must_use]
    pub fn division_code(&self) -> Option<&str> {
        self.node1_dvsn_code.as_deref().filter(|code| !code.is_empty())
    }

    #[must_use]
    pub fn node1(&self) -> Option<LatLng> {
        LatLng::checked(self.node1_latitude, self.node1_longitude)
    }

    #[must_use]
    pub fn node2(&self) -> Option<LatLng> {
        LatLng::checked(self.node2_latitude, self.node2_longitude)
    }

    /// Both endpoints, if both are displayable
    #[must_use]
    pub fn endpoints(&self) -> Option<(LatLng, LatLng)> {
        Some((self.node1()?, self.node2()?))
    }

    #[must_use]
    pub fn popup_text(&self) -> String {
        format!("{JUNCTION_POPUP_PREFIX}{}", self.junction_id.as_deref().unwrap_or_default())
    }
}
