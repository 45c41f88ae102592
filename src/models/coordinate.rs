/// Check whether a latitude/longitude pair is usable for display.
///
/// Both values must be present and neither may be exactly zero. Zero is the
/// backend's placeholder for an unsurveyed node, so a point on the equator or
/// prime meridian is rejected along with genuinely missing data.
#[must_use]
pub fn is_valid_lat_lng(latitude: Option<f64>, longitude: Option<f64>) -> bool {
    matches!((latitude, longitude), (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate from raw record fields, or `None` if they fail
    /// [`is_valid_lat_lng`]
    #[must_use]
    pub fn checked(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        if !is_valid_lat_lng(latitude, longitude) {
            return None;
        }
        Some(Self::new(latitude?, longitude?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(is_valid_lat_lng(Some(20.59), Some(78.96)));
        assert!(is_valid_lat_lng(Some(-33.9), Some(-70.6)));
    }

    #[test]
    fn test_missing_coordinates_are_invalid() {
        assert!(!is_valid_lat_lng(None, Some(78.96)));
        assert!(!is_valid_lat_lng(Some(20.59), None));
        assert!(!is_valid_lat_lng(None, None));
    }

    #[test]
    fn test_zero_is_treated_as_missing() {
        assert!(!is_valid_lat_lng(Some(0.0), Some(78.96)));
        assert!(!is_valid_lat_lng(Some(20.59), Some(0.0)));
        assert!(!is_valid_lat_lng(Some(-0.0), Some(78.96)));
    }

    #[test]
    fn test_checked_only_builds_valid_points() {
        assert_eq!(LatLng::checked(Some(1.5), Some(2.5)), Some(LatLng::new(1.5, 2.5)));
        assert_eq!(LatLng::checked(Some(0.0), Some(2.5)), None);
        assert_eq!(LatLng::checked(Some(1.5), None), None);
    }
}
