mod coordinate;
mod junction;
mod lenient;
mod network;
mod station;

pub use coordinate::{is_valid_lat_lng, LatLng};
pub use junction::Junction;
pub use network::{decode_records, NetworkData};
pub use station::Station;
