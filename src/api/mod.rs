mod network;

pub use network::{fetch_collection, fetch_network};
