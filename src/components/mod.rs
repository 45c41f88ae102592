pub mod app;
pub mod junction_map;
pub mod overlay_controls;
