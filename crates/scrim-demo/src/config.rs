//! Demo configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/scrim-demo/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Overlay behavior (reset delay, automatic first trigger)
    pub overlay: OverlayConfig,
    /// Window settings
    pub window: WindowConfig,
}

/// Overlay configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// How long the overlay stays up after a trigger, in milliseconds
    pub reset_delay_ms: u64,
    /// Run the loading cycle automatically when the screen first appears
    pub auto_trigger: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 2000, // Reference behavior: 2-second cycle
            auto_trigger: true,
        }
    }
}

/// Window configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels
    pub width: f32,
    /// Initial window height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
        }
    }
}

impl DemoConfig {
    /// The configured reset delay as a [`Duration`]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.overlay.reset_delay_ms)
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/scrim-demo/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("scrim-demo")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> DemoConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return DemoConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<DemoConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - reset delay: {} ms, auto trigger: {}",
                    config.overlay.reset_delay_ms,
                    config.overlay.auto_trigger
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                DemoConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            DemoConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &DemoConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.overlay.reset_delay_ms, 2000);
        assert!(config.overlay.auto_trigger);
        assert_eq!(config.reset_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DemoConfig {
            overlay: OverlayConfig {
                reset_delay_ms: 500,
                auto_trigger: false,
            },
            window: WindowConfig {
                width: 640.0,
                height: 480.0,
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: DemoConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.overlay.reset_delay_ms, 500);
        assert!(!parsed.overlay.auto_trigger);
        assert_eq!(parsed.window.width, 640.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = DemoConfig::default();
        config.overlay.reset_delay_ms = 1234;

        save_config(&config, &path).unwrap();
        let loaded = load_config(&path);

        assert_eq!(loaded.overlay.reset_delay_ms, 1234);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join("absent.yaml"));
        assert_eq!(loaded.overlay.reset_delay_ms, 2000);
    }
}
