use serde::de::DeserializeOwned;
use super::{Junction, Station};
use crate::logging::log;

/// Both collections served by the backend. Replaced as a unit on every load
/// so junctions and stations always come from the same fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkData {
    pub junctions: Vec<Junction>,
    pub stations: Vec<Station>,
}

impl NetworkData {
    #[must_use]
    pub fn new(junctions: Vec<Junction>, stations: Vec<Station>) -> Self {
        Self { junctions, stations }
    }
}

/// Decode a JSON array of records.
///
/// Entries that are `null` or do not decode as a record (wrong type, or a
/// field of an unusable type) are skipped; the rest of the batch is kept.
///
/// # Errors
///
/// Returns an error only if the body is not a JSON array.
pub fn decode_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, serde_json::Error> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = entries.len();

    let records: Vec<T> = entries
        .into_iter()
        .filter(|entry| !entry.is_null())
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    if records.len() < total {
        log!("Skipped {} malformed records out of {}", total - records.len(), total);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_records_drops_nulls() {
        let body = r#"[{"junctionId": 1}, null, {"junctionId": 2}]"#;
        let junctions: Vec<Junction> = decode_records(body).expect("valid array");

        let ids: Vec<_> = junctions.iter().map(|j| j.junction_id.as_deref()).collect();
        assert_eq!(ids, vec![Some("1"), Some("2")]);
    }

    #[test]
    fn test_decode_records_skips_malformed_entries() {
        let body = r#"[
            {"junctionId": 1, "node1DvsnCode": "KR-1", "node1Latitude": 15.0},
            5,
            {"junctionId": 2, "node1DvsnCode": false},
            "J3",
            {"junctionId": 4, "node1Latitude": {"deg": 15}},
            {"junctionId": 5, "node1DvsnCode": "KR-2"}
        ]"#;
        let junctions: Vec<Junction> = decode_records(body).expect("valid array");

        let ids: Vec<_> = junctions.iter().map(|j| j.junction_id.as_deref()).collect();
        assert_eq!(ids, vec![Some("1"), Some("5")]);
        assert_eq!(junctions[0].division_code(), Some("KR-1"));
    }

    #[test]
    fn test_decode_records_rejects_non_array() {
        assert!(decode_records::<Station>(r#"{"stationId": 1}"#).is_err());
        assert!(decode_records::<Station>("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_decode_empty_array() {
        let stations: Vec<Station> = decode_records("[]").expect("valid array");
        assert!(stations.is_empty());
    }
}
