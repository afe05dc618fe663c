// config.rs - Explicit pipeline configuration

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Pipeline settings, loaded once in `main` and passed down explicitly.
/// Keys and defaults match the existing config.json files.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name the sheet snapshot is expected to carry.
    pub sheet_name: String,
    /// Adjacency graph output file.
    pub file_graph: String,
    /// Start/end marker output file.
    pub file_breaks: String,
    /// Solved path file.
    pub file_path: String,
    /// Seconds to sleep between sheet writes when drawing a path.
    pub sleep_time: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: "maze".to_string(),
            file_graph: "graph.json".to_string(),
            file_breaks: "breaks.json".to_string(),
            file_path: "path.txt".to_string(),
            sleep_time: 1.0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("malformed config {}", path.display()))?;
        Ok(config)
    }

    /// Absent config file falls back to defaults; a present but broken
    /// one is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
