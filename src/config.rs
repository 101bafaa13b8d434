//! Application configuration.
//!
//! Defaults can be overridden by a JSON file named in `CHESSBOARD_CONFIG`,
//! and the starting position by `CHESSBOARD_FEN`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::Deserialize;

pub const CONFIG_ENV: &str = "CHESSBOARD_CONFIG";
pub const FEN_ENV: &str = "CHESSBOARD_FEN";

#[derive(Clone, Debug, PartialEq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Board edge length in logical pixels
    pub board_size: f32,
    /// Custom starting position; standard start when absent
    pub starting_fen: Option<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: 320.0,
            starting_fen: None,
            window_width: 480.0,
            window_height: 640.0,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_fen_override(std::env::var(FEN_ENV).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn apply_fen_override(&mut self, fen: Option<String>) {
        if let Some(fen) = fen.filter(|f| !f.trim().is_empty()) {
            self.starting_fen = Some(fen);
        }
    }
}
