use crate::types::DEFAULT_CHUNK_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Scrambles an image by placing source strip `order[p]` at slot `p`.
#[derive(Debug, Deserialize)]
pub struct ShredToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    pub order: Vec<usize>,
    pub output: PathBuf,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

pub fn load_config(path: &Path) -> Result<ShredToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_defaults_when_omitted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shred.json");
        fs::write(
            &path,
            r#"{ "input": "photo.png", "order": [2, 0, 1], "output": "shredded.png" }"#,
        )
        .unwrap();
        let cfg = load_config(&path).expect("config parses");
        assert_eq!(cfg.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(cfg.order, vec![2, 0, 1]);
        assert_eq!(cfg.output, PathBuf::from("shredded.png"));
    }

    #[test]
    fn order_is_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shred.json");
        fs::write(&path, r#"{ "input": "photo.png", "chunk_size": 16, "output": "o.png" }"#)
            .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Failed to parse config"), "{err}");
    }
}
