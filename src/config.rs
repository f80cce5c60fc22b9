use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level tool configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Grid writer defaults.
    #[serde(default)]
    pub grid: GridToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default = "default_grid_format")]
    pub format: String,
    #[serde(default = "default_geometry")]
    pub geometry: String,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            format: default_grid_format(),
            geometry: default_geometry(),
        }
    }
}

fn default_grid_format() -> String {
    "current".to_string()
}
fn default_geometry() -> String {
    "cartesian".to_string()
}

/// Loads the tool configuration, or the defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<ToolsConfig> {
    let Some(path) = path else {
        return Ok(ToolsConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
