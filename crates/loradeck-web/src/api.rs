use gloo_net::http::Request;

use loradeck_core::{paths, ModelRecord};

pub async fn fetch_models() -> Result<Vec<ModelRecord>, String> {
    Request::get(paths::MODEL_LIST)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}
