use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub model_dir: String,
    pub model_count: usize,
}
