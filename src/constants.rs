/// Base URL of the service that serves the junction and station collections
pub const DEFAULT_API_BASE: &str = "http://localhost:8082";

pub const JUNCTION_ENDPOINT: &str = "/junctionLink";
pub const STATION_ENDPOINT: &str = "/internalNode";

/// Initial map center (lat, lng) and zoom level
pub const INITIAL_CENTER: (f64, f64) = (20.5937, 78.9629);
pub const INITIAL_ZOOM: f64 = 5.0;

/// Bhuvan WMS base layer
pub const WMS_URL: &str = "https://bhuvan-vec1.nrsc.gov.in/bhuvan/gwc/service/wms/";
pub const WMS_LAYERS: &str = "india3";
pub const WMS_FORMAT: &str = "image/png";
pub const WMS_ATTRIBUTION: &str =
    "&copy; Bhuvan Map - <a href=\"https://bhuvan.nrsc.gov.in/\">Bhuvan</a>";

/// Division code filter applied before the user types anything
pub const DEFAULT_FILTER: &str = "KR";

pub const JUNCTION_POPUP_PREFIX: &str = "Junction ID: ";
pub const STATION_POPUP_PREFIX: &str = "Station ID: ";

/// Junction point circles are sized in meters, not pixels
pub const JUNCTION_POINT_RADIUS_M: f64 = 100.0;
pub const JUNCTION_POINT_COLOR: &str = "red";
pub const JUNCTION_POINT_FILL_OPACITY: f64 = 0.5;
pub const JUNCTION_LINE_COLOR: &str = "blue";
