use std::env;
use std::path::PathBuf;

use loradeck_services::ModelRegistry;

pub struct AppState {
    pub registry: ModelRegistry,
    pub thumbnail_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_env() -> Self {
        let model_dir =
            env::var("LORADECK_MODEL_DIR").unwrap_or_else(|_| "./lora_models".to_string());
        let thumbnail_dir =
            env::var("LORADECK_THUMBNAIL_DIR").unwrap_or_else(|_| "./thumbnails".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".to_string());

        Self {
            registry: ModelRegistry::new(model_dir),
            thumbnail_dir: thumbnail_dir.into(),
            static_dir: static_dir.into(),
        }
    }
}
