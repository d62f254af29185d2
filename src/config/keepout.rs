use crate::detector::KeepoutParams;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct KeepoutToolConfig {
    /// Occupancy map image to process.
    pub input: PathBuf,
    #[serde(default)]
    pub params: KeepoutParams,
    #[serde(default)]
    pub output: KeepoutOutputConfig,
}

/// Artifacts written after a run. Each path is optional; missing entries are
/// skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KeepoutOutputConfig {
    pub flood_fill_image: Option<PathBuf>,
    pub smoothed_image: Option<PathBuf>,
    pub edges_image: Option<PathBuf>,
    pub clusters_image: Option<PathBuf>,
    pub hull_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<KeepoutToolConfig> {
    let data = fs::read_to_string(path)?;
    parse_config(&data)
}

pub fn parse_config(data: &str) -> Result<KeepoutToolConfig> {
    Ok(serde_json::from_str(data)?)
}
