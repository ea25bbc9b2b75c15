use crate::params::UnshredParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct UnshredToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: UnshredParams,
    pub output: UnshredOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct UnshredOutputConfig {
    #[serde(rename = "image")]
    pub image: PathBuf,
    /// Optional JSON report with the order, tables and timings.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<UnshredToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
