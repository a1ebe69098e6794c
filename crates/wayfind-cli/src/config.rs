//! Binary configuration, loaded from `.wayfind/config.yaml`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wayfind_graph::GraphConfig;

/// Relative location of the config file under a working directory.
pub const CONFIG_PATH: &str = ".wayfind/config.yaml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfindConfig {
    /// Graph construction settings (buffer radius in metres, strategy)
    pub graph: GraphConfig,

    /// How source coordinates are turned into planar metres
    pub projection: ProjectionKind,

    /// Default output format for commands
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Longitude/latitude projected onto a local tangent plane around the venue.
    #[default]
    LocalMeters,
    /// Coordinates are already planar metres.
    Identity,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl WayfindConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .graph
            .validate()
            .with_context(|| format!("Invalid graph settings in {}", path.display()))?;
        Ok(config)
    }

    /// Load from a working directory (looks for .wayfind/config.yaml)
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_PATH);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// An explicit path wins over the working-directory lookup.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_from_dir(root),
        }
    }
}
