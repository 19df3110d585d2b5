use serde::{Deserialize, Serialize};

/// Discriminator the host's drop handler matches on.
pub const DRAG_PAYLOAD_TYPE: &str = "LORA_MODEL";

/// Strength carried by every payload. The widget never varies it; any
/// adjustment happens host-side after the drop.
pub const DEFAULT_STRENGTH: f32 = 1.0;

/// The payload a dragged card serializes into the drag operation's
/// plain-text data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub strength: f32,
}

impl DragPayload {
    pub fn new(internal_name: &str) -> Self {
        Self {
            kind: DRAG_PAYLOAD_TYPE.to_string(),
            name: internal_name.to_string(),
            strength: DEFAULT_STRENGTH,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
