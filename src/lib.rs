pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod filter;
pub mod logging;
pub mod map;
pub mod models;
pub mod overlay;

pub use components::app::App;
