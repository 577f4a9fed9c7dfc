use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AppError;
use crate::gradient::Canvas;

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 300.0,
            canvas_height: 150.0,
            output: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn canvas(&self) -> Result<Canvas, AppError> {
        Canvas::new(self.canvas_width, self.canvas_height).ok_or(AppError::InvalidCanvas {
            width: self.canvas_width,
            height: self.canvas_height,
        })
    }
}

/// Base directory: ~/.config/hue-picker/
pub fn base_dir() -> Result<PathBuf, AppError> {
    dirs::config_dir()
        .map(|dir| dir.join("hue-picker"))
        .ok_or(AppError::NoConfigDir)
}

pub fn config_path() -> Result<PathBuf, AppError> {
    Ok(base_dir()?.join("config.json"))
}

/// Load the config, falling back to defaults when there is no file or it
/// cannot be read.
pub fn load_config() -> AppConfig {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{}; using defaults", e);
            return AppConfig::default();
        }
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match read_config(&path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            AppConfig::default()
        }
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    let data = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

pub fn save_config(config: &AppConfig) -> Result<PathBuf, AppError> {
    let path = config_path()?;
    write_config(&path, config)?;
    Ok(path)
}

pub fn write_config(path: &Path, config: &AppConfig) -> Result<(), AppError> {
    config.canvas()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AppError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "saved config");
    Ok(())
}
