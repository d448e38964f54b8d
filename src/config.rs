//! Run configuration.
//!
//! Every run is driven by an [`OptimizeConfig`]. With no config file present
//! the stock defaults apply, so the tool runs with no arguments at all. A
//! `photo-prep.toml` (or the file passed with `--config`) may override any
//! subset of keys:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "photos"                   # Flat directory scanned for images
//! hero_file = "hero.jpg"                  # Extra single file flagged as hero
//! hero_name = "hero_success.jpg"          # Output name used for the hero
//! output_dir = "public/memories"          # Converted images land here
//! manifest_path = "src/data/memories.json"
//! public_prefix = "/memories"             # URL prefix for manifest `src`
//! max_size = [1200, 1200]                 # Bounding box, width x height
//! quality = 85                            # Lossy WebP quality (1-100)
//! date = "2024-2025"                      # Placeholder date on every entry
//! captions = ["...", "..."]               # Caption pool
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Captions handed out at random, one per manifest entry.
pub const DEFAULT_CAPTIONS: [&str; 25] = [
    "Every moment with you is magic ✨",
    "Just happy to be yours ❤️",
    "My favorite hello and hardest goodbye 💑",
    "You make my heart smile 😊",
    "Better together, always 🌟",
    "Lost in your eyes 👀",
    "Collecting beautiful moments with you 📸",
    "You are my sunshine on a rainy day ☀️",
    "Love you to the moon and back 🌙",
    "My partner in crime and in life 🕵️‍♀️",
    "Simply us 💕",
    "Cherishing every second ⏳",
    "You complete me 🧩",
    "Life is better with you by my side 🌈",
    "My forever valentine 💘",
    "Smiling because of you 😄",
    "Our love story is my favorite 📖",
    "Hugs, kisses, and Valentine wishes",
    "You + Me = Perfect ❤️",
    "Creating memories one day at a time 🗓️",
    "Your laugh is my favorite sound 🎶",
    "Happiest when I'm with you 🥰",
    "My rock, my love, my everything 🪨",
    "Adventures with you are the best 🌍",
    "Forever grateful for you 🙏",
];

/// Configuration for a single batch run.
///
/// All fields have defaults. Config files need only specify the values they
/// want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizeConfig {
    /// Flat directory scanned for source images (not recursive).
    pub source_dir: PathBuf,
    /// Designated extra file, processed last and flagged as hero.
    pub hero_file: PathBuf,
    /// File name the hero is converted under (extension gets replaced).
    pub hero_name: String,
    /// Destination directory for converted images.
    pub output_dir: PathBuf,
    /// Where the JSON manifest is written.
    pub manifest_path: PathBuf,
    /// Public URL prefix joined with the output file name for `src`.
    pub public_prefix: String,
    /// Bounding box as `[width, height]`. Larger images are scaled down to fit.
    pub max_size: [u32; 2],
    /// Lossy WebP quality.
    pub quality: u32,
    /// Placeholder date written on every entry.
    pub date: String,
    pub captions: Vec<String>,
}

impl Default for OptimizeConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("photos"),
            hero_file: PathBuf::from("hero.jpg"),
            hero_name: "hero_success.jpg".to_string(),
            output_dir: PathBuf::from("public/memories"),
            manifest_path: PathBuf::from("src/data/memories.json"),
            public_prefix: "/memories".to_string(),
            max_size: [1200, 1200],
            quality: 85,
            date: "2024-2025".to_string(),
            captions: DEFAULT_CAPTIONS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl OptimizeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        if self.max_size[0] == 0 || self.max_size[1] == 0 {
            return Err(ConfigError::Validation(
                "max_size values must be non-zero".into(),
            ));
        }
        if self.captions.is_empty() {
            return Err(ConfigError::Validation("captions must not be empty".into()));
        }
        if self.hero_name.trim().is_empty() {
            return Err(ConfigError::Validation("hero_name must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from the given TOML file.
///
/// A missing file yields the stock defaults. Keys present in the file
/// override defaults; unknown keys are an error. The result is validated.
pub fn load_config(path: &Path) -> Result<OptimizeConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        OptimizeConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a commented stock config document with every key at its default.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> String {
    let header = "\
# photo-prep configuration
# ========================
# All settings are optional. Remove any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

";
    let body = toml::to_string_pretty(&OptimizeConfig::default())
        .unwrap_or_else(|e| format!("# failed to render defaults: {e}\n"));
    format!("{header}{body}")
}
