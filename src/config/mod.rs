pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use file::FileConfig;
use std::path::PathBuf;

pub const DEFAULT_RECIPES_DIR: &str = "recipes";
pub const DEFAULT_OUTPUT_PATH: &str = "list.txt";

#[derive(Debug, Clone, Parser)]
#[command(name = "shoplist")]
#[command(about = "Interactive shopping-list builder driven by recipe files")]
pub struct CliConfig {
    /// Directory containing *.dish recipe files
    #[arg(long)]
    pub recipes_dir: Option<String>,

    /// File the shopping list is saved to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved settings: CLI flags win over the settings file, the file
/// wins over built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub recipes_dir: String,
    pub output_path: String,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self {
            recipes_dir: cli
                .recipes_dir
                .clone()
                .or(file.recipes_dir)
                .unwrap_or_else(|| DEFAULT_RECIPES_DIR.to_string()),
            output_path: cli
                .output_path
                .clone()
                .or(file.output_path)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            verbose: cli.verbose,
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("recipes_dir", &self.recipes_dir)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
