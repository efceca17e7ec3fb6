//! Panel settings — inference endpoint address and model name.
//!
//! Owned by the host shell, consumed read-only by the pipeline. Persisted as
//! pretty JSON under the user config dir so the panel keeps its endpoint
//! between launches.

use crate::session::PanelState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default address where the inference API runs. Check `$ ollama serve`.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:11434";
/// Default vision-capable model.
pub const DEFAULT_MODEL: &str = "llama3.2-vision:latest";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelSettings {
    pub address: String,
    pub model: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dash-lens")
        .join("settings.json")
}

/// Load settings, falling back to defaults when the file is missing or invalid.
pub fn load_settings() -> PanelSettings {
    let path = settings_path();
    match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!(
                "[CONFIG] Invalid settings file {} — using defaults: {}",
                path.display(),
                e
            );
            PanelSettings::default()
        }),
        Err(_) => PanelSettings::default(),
    }
}

/// Persist settings. Creates the config directory if it doesn't exist.
pub fn persist_settings(settings: &PanelSettings) -> Result<(), String> {
    let path = settings_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| format!("Failed to create config dir: {}", e))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;
    std::fs::write(&path, json).map_err(|e| format!("Failed to write settings: {}", e))?;
    log::info!("[CONFIG] Saved settings to {}", path.display());
    Ok(())
}

/// Tauri command: current settings for the settings form.
#[tauri::command]
pub fn get_panel_settings(state: tauri::State<'_, PanelState>) -> Result<PanelSettings, String> {
    Ok(state.settings.lock().map_err(|e| e.to_string())?.clone())
}

/// Tauri command: update and persist the settings.
#[tauri::command]
pub fn save_panel_settings(
    state: tauri::State<'_, PanelState>,
    settings: PanelSettings,
) -> Result<(), String> {
    persist_settings(&settings)?;
    *state.settings.lock().map_err(|e| e.to_string())? = settings;
    log::info!("[SETTINGS] Panel settings updated");
    Ok(())
}
