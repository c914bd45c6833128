//! Local persistence for user preferences. Playback state itself (queue,
//! cursor, position) is deliberately not stored: a fresh page load starts a
//! fresh session.

use crate::player::LoopMode;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "soundhaven.app_settings";

/// Player preferences that survive page loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub volume: f64,
    #[serde(default)]
    pub shuffle_enabled: bool,
    #[serde(default)]
    pub loop_mode: LoopMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            volume: 0.8,
            shuffle_enabled: false,
            loop_mode: LoopMode::Off,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, String> {
    Ok(LocalStorage::get(SETTINGS_KEY).unwrap_or_default())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), String> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| e.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, String> {
    Ok(AppSettings::default())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(_settings: AppSettings) -> Result<(), String> {
    Ok(())
}
