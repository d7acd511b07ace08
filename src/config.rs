use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable carrying the completion-service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const BIND_ENV: &str = "SKETCHMATE_BIND";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub bind_address: String,
    pub relay_url: String,
    pub max_body_bytes: usize,
    pub canvas: CanvasConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// RGBA fill painted at mount and on clear
    pub background: [u8; 4],
    pub ink: [u8; 4],
    pub pen_width: f32,
    pub eraser_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: [0xda, 0xda, 0xda, 0xff],
            ink: [0x00, 0x00, 0x00, 0xff],
            pen_width: 2.0,
            eraser_width: 20.0,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            relay_url: "http://localhost:3000".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default location: `<config dir>/sketchmate`.
    pub fn default_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sketchmate"))
            .ok_or_else(|| Error::Config("no configuration directory on this platform".to_string()))
    }

    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join("config.json");
        let mut config = if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    log::error!("Ignoring malformed {}: {}", config_path.display(), e);
                    Self::default()
                }),
                Err(_) => Self::default(),
            }
        } else {
            let c = Self::default();
            if let Err(e) = c.save(dir) {
                log::debug!("Could not write default config: {}", e);
            }
            c
        };

        config.apply_env();
        config
    }

    /// Environment wins over the file so the credential never has to be written to disk.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.gemini_api_key = key;
            }
        }
        if let Ok(bind) = std::env::var(BIND_ENV) {
            if !bind.is_empty() {
                self.bind_address = bind;
            }
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::Config(format!("Failed to create {}: {}", dir.display(), e)))?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(dir.join("config.json"), content)
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;
        Ok(())
    }
}
