use serde::de::DeserializeOwned;
use crate::config::MapConfig;
use crate::logging::log;
use crate::models::{decode_records, Junction, NetworkData, Station};

/// Fetch one collection from the backend
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body is not a JSON array of records
pub async fn fetch_collection<T: DeserializeOwned>(url: &str) -> Result<Vec<T>, String> {
    let body = reqwest::get(url)
        .await
        .map_err(|e| format!("Request to {url} failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Request to {url} failed: {e}"))?
        .text()
        .await
        .map_err(|e| format!("Failed to read response from {url}: {e}"))?;

    decode_records(&body).map_err(|e| format!("Failed to deserialize response from {url}: {e}"))
}

/// Load junctions, then stations.
///
/// The station request is only issued once the junction request has
/// succeeded, and nothing is returned unless both succeed.
///
/// # Errors
///
/// Returns the first error encountered by [`fetch_collection`].
pub async fn fetch_network(config: &MapConfig) -> Result<NetworkData, String> {
    let junctions: Vec<Junction> = fetch_collection(&config.junctions_url()).await?;
    log!("Fetched {} junctions", junctions.len());

    let stations: Vec<Station> = fetch_collection(&config.stations_url()).await?;
    log!("Fetched {} stations", stations.len());

    Ok(NetworkData::new(junctions, stations))
}
