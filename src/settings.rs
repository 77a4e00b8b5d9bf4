//! Game settings
//!
//! Read from a JSON file on native builds and from LocalStorage in the
//! browser. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::sim::Rules;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed generator seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
    pub starting_lives: u8,
    pub countdown_secs: u32,
    /// Chance (0.0 - 1.0) that a destroyed brick drops an item
    pub item_drop_chance: f32,
    /// Bind keys 1/2/3 to the pad-size and power-ball toggles
    pub debug_keys: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            seed: None,
            starting_lives: rules.starting_lives,
            countdown_secs: rules.countdown_secs,
            item_drop_chance: rules.item_drop_chance,
            debug_keys: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "breakout_settings";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Gameplay rules, with out-of-range values pulled back into range
    pub fn rules(&self) -> Rules {
        Rules {
            starting_lives: self.starting_lives.max(1),
            countdown_secs: self.countdown_secs,
            item_drop_chance: self.item_drop_chance.clamp(0.0, 1.0),
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored settings: {}", err),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(err) => log::warn!("Failed to save settings: {:?}", err),
                },
                Err(err) => log::warn!("Failed to encode settings: {}", err),
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {}; using defaults", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read {}: {}; using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Write settings as JSON to `path`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
