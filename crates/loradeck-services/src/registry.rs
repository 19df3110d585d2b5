//! The model registry: scans the model directory for LoRA weight files and
//! keeps a fingerprint cache so unchanged files are never re-read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use loradeck_core::ModelRecord;

use crate::metadata;

/// Cache file kept inside the model directory.
pub const CACHE_FILE: &str = ".model_cache.json";

const MODEL_EXTENSIONS: &[&str] = &["safetensors", "pt"];

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Model '{0}' not found: check that the weight file exists in the model \
         directory and uses a .safetensors or .pt extension"
    )]
    ModelNotFound(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Per-file cache record, keyed by weight-file path in the cache map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub fingerprint: String,
    #[serde(flatten)]
    pub record: ModelRecord,
    pub add_time: DateTime<Utc>,
}

pub struct ModelRegistry {
    model_dir: PathBuf,
    cache_file: PathBuf,
    cache: Mutex<HashMap<PathBuf, CacheEntry>>,
}

impl ModelRegistry {
    /// Open a registry over `model_dir`. A cache file from a previous run is
    /// picked up if readable; a corrupt one just means a cold first scan.
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        let model_dir = model_dir.into();
        let cache_file = model_dir.join(CACHE_FILE);
        let cache = Mutex::new(load_cache(&cache_file));
        Self {
            model_dir,
            cache_file,
            cache,
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    /// Walk the model directory and return the catalog, newest-first.
    ///
    /// Files whose size+mtime fingerprint matches the cache are reused
    /// without re-reading; everything else gets its metadata extracted and a
    /// fresh `add_time`. The cache file is rewritten only when something
    /// changed.
    pub fn scan(&self, force: bool) -> Result<Vec<ModelRecord>> {
        std::fs::create_dir_all(&self.model_dir)?;

        let mut cache = self.cache.lock().unwrap();
        let mut current: HashMap<PathBuf, CacheEntry> = HashMap::new();
        let mut updated = false;

        for entry in WalkDir::new(&self.model_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !is_model_file(path) {
                continue;
            }

            let fingerprint = match fingerprint(path) {
                Ok(fp) => fp,
                Err(e) => {
                    warn!("cannot stat {}: {}", path.display(), e);
                    continue;
                }
            };

            if !force {
                if let Some(cached) = cache.get(path) {
                    if cached.fingerprint == fingerprint {
                        current.insert(path.to_path_buf(), cached.clone());
                        continue;
                    }
                }
            }

            debug!("indexing {}", path.display());
            let meta = metadata::extract(path);
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            let display_name = meta
                .display_name
                .unwrap_or_else(|| metadata::humanize_name(&stem));

            current.insert(
                path.to_path_buf(),
                CacheEntry {
                    fingerprint,
                    record: ModelRecord {
                        internal_name: stem,
                        display_name,
                        description: meta.description,
                        tags: meta.tags,
                    },
                    add_time: Utc::now(),
                },
            );
            updated = true;
        }

        // Removals count as a change too, so stale entries don't survive in
        // the cache file.
        if updated || current.len() != cache.len() {
            *cache = current;
            save_cache(&self.cache_file, &cache)?;
        }

        let mut entries: Vec<&CacheEntry> = cache.values().collect();
        entries.sort_by(|a, b| {
            b.add_time
                .cmp(&a.add_time)
                .then_with(|| a.record.internal_name.cmp(&b.record.internal_name))
        });
        Ok(entries.into_iter().map(|e| e.record.clone()).collect())
    }

    /// Look a model up by its internal name, rescanning first so the answer
    /// reflects the directory as it is now.
    pub fn find(&self, internal_name: &str) -> Result<ModelRecord> {
        self.scan(false)?
            .into_iter()
            .find(|record| record.internal_name == internal_name)
            .ok_or_else(|| RegistryError::ModelNotFound(internal_name.to_string()))
    }
}

fn is_model_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MODEL_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn fingerprint(path: &Path) -> std::io::Result<String> {
    let meta = std::fs::metadata(path)?;
    let mtime = meta
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    Ok(format!("{}-{}", meta.len(), mtime))
}

fn load_cache(cache_file: &Path) -> HashMap<PathBuf, CacheEntry> {
    if !cache_file.exists() {
        return HashMap::new();
    }
    let result = std::fs::read_to_string(cache_file)
        .map_err(RegistryError::from)
        .and_then(|text| serde_json::from_str(&text).map_err(RegistryError::from));
    match result {
        Ok(cache) => cache,
        Err(e) => {
            warn!("model cache unreadable, starting cold: {}", e);
            HashMap::new()
        }
    }
}

fn save_cache(cache_file: &Path, cache: &HashMap<PathBuf, CacheEntry>) -> Result<()> {
    let text = serde_json::to_string_pretty(cache)?;
    std::fs::write(cache_file, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_safetensors;

    #[test]
    fn test_scan_of_empty_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ModelRegistry::new(dir.path());
        assert!(registry.scan(false).unwrap().is_empty());
    }

    #[test]
    fn test_scan_picks_up_weight_files_and_ignores_others() {
        let dir = tempfile::tempdir().unwrap();
        write_safetensors(&dir.path().join("anime_v1.safetensors"), None);
        std::fs::write(dir.path().join("legacy.pt"), b"pickled").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"notes").unwrap();

        let registry = ModelRegistry::new(dir.path());
        let records = registry.scan(false).unwrap();
        let mut names: Vec<_> = records.iter().map(|r| r.internal_name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["anime_v1", "legacy"]);
    }

    #[test]
    fn test_metadata_display_name_wins_over_humanized_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_safetensors(
            &dir.path().join("anime_v1.safetensors"),
            Some(r#"{"display_name":"Anime Style","tags":["anime"]}"#),
        );
        write_safetensors(&dir.path().join("city_v2.safetensors"), None);

        let registry = ModelRegistry::new(dir.path());
        let records = registry.scan(false).unwrap();
        let by_name = |n: &str| {
            records
                .iter()
                .find(|r| r.internal_name == n)
                .unwrap()
                .clone()
        };
        assert_eq!(by_name("anime_v1").display_name, "Anime Style");
        assert_eq!(by_name("city_v2").display_name, "city Version 2");
    }

    #[test]
    fn test_unchanged_fingerprint_reuses_the_cache_entry() {
        let dir = tempfile::tempdir().unwrap();
        let weight = dir.path().join("anime_v1.safetensors");
        write_safetensors(&weight, Some(r#"{"display_name":"Anime Style"}"#));

        ModelRegistry::new(dir.path()).scan(false).unwrap();

        // Doctor the persisted entry; an unchanged file must be served from
        // the cache, so the doctored name is what comes back.
        let cache_file = dir.path().join(CACHE_FILE);
        let doctored = std::fs::read_to_string(&cache_file)
            .unwrap()
            .replace("Anime Style", "Cached Name");
        std::fs::write(&cache_file, doctored).unwrap();

        let registry = ModelRegistry::new(dir.path());
        let records = registry.scan(false).unwrap();
        assert_eq!(records[0].display_name, "Cached Name");

        // A forced scan re-reads the file and restores the real name.
        let records = registry.scan(true).unwrap();
        assert_eq!(records[0].display_name, "Anime Style");
    }

    #[test]
    fn test_rewritten_file_is_reindexed() {
        let dir = tempfile::tempdir().unwrap();
        let weight = dir.path().join("anime_v1.safetensors");
        write_safetensors(&weight, Some(r#"{"display_name":"First"}"#));

        let registry = ModelRegistry::new(dir.path());
        assert_eq!(registry.scan(false).unwrap()[0].display_name, "First");

        write_safetensors(&weight, Some(r#"{"display_name":"Second edition"}"#));
        assert_eq!(
            registry.scan(false).unwrap()[0].display_name,
            "Second edition"
        );
    }

    #[test]
    fn test_deleted_file_drops_out_of_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let weight = dir.path().join("anime_v1.safetensors");
        write_safetensors(&weight, None);

        let registry = ModelRegistry::new(dir.path());
        assert_eq!(registry.scan(false).unwrap().len(), 1);

        std::fs::remove_file(&weight).unwrap();
        assert!(registry.scan(false).unwrap().is_empty());
    }

    #[test]
    fn test_catalog_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        write_safetensors(&dir.path().join("older.safetensors"), None);

        let registry = ModelRegistry::new(dir.path());
        registry.scan(false).unwrap();

        write_safetensors(&dir.path().join("newer.safetensors"), None);
        let records = registry.scan(false).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.internal_name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[test]
    fn test_nested_directories_are_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("styles");
        std::fs::create_dir_all(&nested).unwrap();
        write_safetensors(&nested.join("sketch.safetensors"), None);

        let registry = ModelRegistry::new(dir.path());
        assert_eq!(registry.scan(false).unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_cache_file_starts_cold() {
        let dir = tempfile::tempdir().unwrap();
        write_safetensors(&dir.path().join("anime_v1.safetensors"), None);
        std::fs::write(dir.path().join(CACHE_FILE), b"{ not json").unwrap();

        let registry = ModelRegistry::new(dir.path());
        assert_eq!(registry.scan(false).unwrap().len(), 1);
    }

    #[test]
    fn test_find_hit_and_miss() {
        let dir = tempfile::tempdir().unwrap();
        write_safetensors(&dir.path().join("anime_v1.safetensors"), None);

        let registry = ModelRegistry::new(dir.path());
        assert_eq!(
            registry.find("anime_v1").unwrap().internal_name,
            "anime_v1"
        );
        let err = registry.find("missing").unwrap_err();
        assert!(matches!(err, RegistryError::ModelNotFound(_)));
        assert!(err.to_string().contains("missing"));
    }
}
