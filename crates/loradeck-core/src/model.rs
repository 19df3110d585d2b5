use serde::{Deserialize, Serialize};

/// One catalog entry as served by the list endpoint.
///
/// `internal_name` is the stable identifier: it keys the card in the DOM,
/// templates the thumbnail path, and is the value carried in the drag
/// payload. `display_name` is only ever shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub internal_name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ModelRecord {
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
