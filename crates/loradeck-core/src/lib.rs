// Domain modules
pub mod catalog;
pub mod model;
pub mod paths;
pub mod payload;
pub mod plugin;

pub use catalog::Catalog;
pub use model::ModelRecord;
pub use payload::{DragPayload, DEFAULT_STRENGTH, DRAG_PAYLOAD_TYPE};
pub use plugin::PluginDescriptor;
