use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional TOML settings file. Every field is optional; anything missing
/// falls back to the CLI flag or the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub recipes_dir: Option<String>,
    pub output_path: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ShopError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&contents).map_err(|e| ShopError::ConfigError {
            message: format!("cannot parse {}: {}", path.display(), e),
        })
    }
}
