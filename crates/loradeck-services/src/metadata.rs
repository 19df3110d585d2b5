//! Metadata extraction for LoRA weight files.
//!
//! safetensors files carry a JSON header whose `__metadata__` map may hold
//! an `ssmd` key: a nested JSON document with curated display name, tags,
//! and description. `.pt` files have no readable metadata and always yield
//! the empty default.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

// A header longer than this is a corrupt or hostile file, not metadata.
const MAX_HEADER_LEN: u64 = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("header length {0} exceeds limit")]
    HeaderTooLong(u64),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelMetadata {
    pub display_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Read curated metadata out of a weight file. Any read or parse failure is
/// logged and yields the empty default; a scan never stops on one bad file.
pub fn extract(path: &Path) -> ModelMetadata {
    if path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_none_or(|ext| !ext.eq_ignore_ascii_case("safetensors"))
    {
        return ModelMetadata::default();
    }

    match read_ssmd(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("metadata unreadable for {}: {}", path.display(), e);
            ModelMetadata::default()
        }
    }
}

fn read_ssmd(path: &Path) -> Result<ModelMetadata, MetadataError> {
    let mut file = File::open(path)?;

    let mut len_bytes = [0u8; 8];
    file.read_exact(&mut len_bytes)?;
    let header_len = u64::from_le_bytes(len_bytes);
    if header_len > MAX_HEADER_LEN {
        return Err(MetadataError::HeaderTooLong(header_len));
    }

    let mut header_bytes = vec![0u8; header_len as usize];
    file.read_exact(&mut header_bytes)?;

    let header: serde_json::Value = serde_json::from_slice(&header_bytes)?;
    let Some(ssmd) = header
        .get("__metadata__")
        .and_then(|m| m.get("ssmd"))
        .and_then(|s| s.as_str())
    else {
        return Ok(ModelMetadata::default());
    };

    Ok(serde_json::from_str(ssmd)?)
}

// Filename tokens with a nicer label than the raw text.
const TOKEN_LABELS: &[(&str, &str)] = &[
    ("v1", "Version 1"),
    ("v2", "Version 2"),
    ("portrait", "Portrait"),
    ("landscape", "Landscape"),
];

/// Derive a display name from a file stem when the metadata supplies none:
/// underscore-separated tokens, known ones mapped through the label table.
pub fn humanize_name(stem: &str) -> String {
    stem.split('_')
        .map(|token| {
            TOKEN_LABELS
                .iter()
                .find(|(raw, _)| *raw == token)
                .map_or(token, |(_, label)| *label)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
