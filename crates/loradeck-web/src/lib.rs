pub mod api;
pub mod app;
pub mod components;
pub mod plugin;

pub use plugin::{init_plugin, PLUGIN};
