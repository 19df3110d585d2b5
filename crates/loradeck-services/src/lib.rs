pub mod metadata;
pub mod registry;

pub use registry::{ModelRegistry, RegistryError};

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    /// Write a minimal but well-formed safetensors file: 8-byte little-endian
    /// header length, then the JSON header. Tensor data is irrelevant to the
    /// metadata reader and is omitted.
    pub fn write_safetensors(path: &Path, ssmd: Option<&str>) {
        let header = match ssmd {
            Some(ssmd) => serde_json::json!({
                "__metadata__": { "ssmd": ssmd },
                "weight": { "dtype": "F32", "shape": [1], "data_offsets": [0, 4] },
            }),
            None => serde_json::json!({
                "weight": { "dtype": "F32", "shape": [1], "data_offsets": [0, 4] },
            }),
        };
        let header_bytes = serde_json::to_vec(&header).unwrap();

        let mut bytes = Vec::with_capacity(8 + header_bytes.len() + 4);
        bytes.extend_from_slice(&(header_bytes.len() as u64).to_le_bytes());
        bytes.extend_from_slice(&header_bytes);
        bytes.extend_from_slice(&[0u8; 4]);
        std::fs::write(path, bytes).unwrap();
    }
}
