//! HTTP paths shared by the server's routes and the widget's URL
//! construction. Keeping both sides on these constants is what makes the
//! fetch and thumbnail contracts hold.

/// The model-list endpoint. Returns a bare JSON array of records.
pub const MODEL_LIST: &str = "/lora_manager/list";

/// Single-model lookup, `{internal_name}` appended.
pub const MODEL_LOOKUP_PREFIX: &str = "/lora_manager/models";

/// Served when a thumbnail is missing, and substituted client-side when a
/// thumbnail fails to load.
pub const DEFAULT_THUMBNAIL: &str = "/default_thumbnail.jpg";

/// Thumbnail location for a model, templated from its internal name.
pub fn thumbnail(internal_name: &str) -> String {
    format!("/thumbnails/{internal_name}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_path_templates_internal_name() {
        assert_eq!(thumbnail("a1"), "/thumbnails/a1.jpg");
    }
}
