//! Display and driver settings
//!
//! Loaded from a JSON file at startup. Only presentation is configurable;
//! the rules of the game are fixed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH};

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "PONG_SETTINGS";
/// Settings file looked up in the working directory by default
pub const DEFAULT_SETTINGS_FILE: &str = "pong.json";
/// Largest accepted `window_scale` (5120x3840)
pub const MAX_WINDOW_SCALE: u32 = 16;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size as a multiple of the 320x240 board, 1..=16
    pub window_scale: u32,
    /// Open borderless fullscreen
    pub start_fullscreen: bool,
    /// Wait for vblank when presenting
    pub vsync: bool,
    /// Fixed RNG seed; a random one is picked (and logged) when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_scale: 2,
            start_fullscreen: false,
            vsync: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Initial window size in logical pixels
    pub fn window_size(&self) -> (u32, u32) {
        let scale = self.window_scale.clamp(1, MAX_WINDOW_SCALE);
        (BOARD_WIDTH as u32 * scale, BOARD_HEIGHT as u32 * scale)
    }

    /// Parse settings from JSON text. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `$PONG_SETTINGS`, falling back to `pong.json`
    pub fn load() -> Result<Self, SettingsError> {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        Self::load_from(&path)
    }
}
