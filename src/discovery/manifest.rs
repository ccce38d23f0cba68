//! Project manifest (odyc.yaml) parsing.
//!
//! The manifest holds defaults for the `sprites` command so a project can
//! regenerate its config without repeating flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OdycError, Result};

/// Project manifest loaded from odyc.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory containing the sprite PNGs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<PathBuf>,

    /// File the game config is written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    pub force: bool,
}

impl Manifest {
    /// Load manifest from an odyc.yaml file.
    ///
    /// Relative paths in the manifest are resolved against the manifest's
    /// own directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| OdycError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let manifest = Self::parse(&content)?;
        let base = path.parent().unwrap_or(Path::new(""));
        Ok(manifest.relative_to(base))
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| OdycError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check odyc.yaml syntax".to_string()),
        })
    }

    /// Serialize the manifest to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| OdycError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        Self {
            assets: self.assets.map(resolve),
            output: self.output.map(resolve),
            force: self.force,
        }
    }
}
