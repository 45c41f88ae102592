//! Selection of the junctions and stations to draw.
//!
//! All functions here are pure and keep the input order.

use crate::models::{Junction, Station};

pub use crate::models::is_valid_lat_lng;

/// Case-insensitive substring match of `filter_value` within `division_code`
fn matches_division(division_code: &str, filter_value: &str) -> bool {
    division_code
        .to_lowercase()
        .contains(&filter_value.to_lowercase())
}

/// Whether a junction should be drawn for the given filter value.
///
/// A junction passes when it has a division code, both endpoints are valid
/// coordinates and the division code contains the filter value.
#[must_use]
pub fn junction_matches(junction: &Junction, filter_value: &str) -> bool {
    let Some(code) = junction.division_code() else { return false };
    is_valid_lat_lng(junction.node1_latitude, junction.node1_longitude)
        && is_valid_lat_lng(junction.node2_latitude, junction.node2_longitude)
        && matches_division(code, filter_value)
}

#[must_use]
pub fn station_matches(station: &Station, filter_value: &str) -> bool {
    let Some(code) = station.division_code() else { return false };
    is_valid_lat_lng(station.sttn_latitude, station.sttn_longitude)
        && matches_division(code, filter_value)
}

#[must_use]
pub fn filter_junctions<'a>(all: &'a [Junction], filter_value: &str) -> Vec<&'a Junction> {
    all.iter()
        .filter(|junction| junction_matches(junction, filter_value))
        .collect()
}

#[must_use]
pub fn filter_stations<'a>(all: &'a [Station], filter_value: &str) -> Vec<&'a Station> {
    all.iter()
        .filter(|station| station_matches(station, filter_value))
        .collect()
}

/// Stations lying on the given junction, i.e. whose node pair equals the
/// junction's node pair exactly. The division filter is not applied here, but
/// stations without a valid position are skipped.
#[must_use]
pub fn stations_on_junction<'a>(stations: &'a [Station], junction: &Junction) -> Vec<&'a Station> {
    let node1 = junction.node1_code.as_deref();
    let node2 = junction.node2_code.as_deref();
    stations
        .iter()
        .filter(|station| station.lies_between(node1, node2) && station.position().is_some())
        .collect()
}
