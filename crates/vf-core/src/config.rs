// ABOUTME: Engine configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Viewport used for the initial layout pass, before the first resize event
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Skip a pass when a resize reports the same viewport as the last one
    pub coalesce_resizes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: 1200,
            viewport_height: 800,
            coalesce_resizes: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// The configured startup viewport
    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width as f32, self.viewport_height as f32)
    }

    /// Get the default config file path (~/.config/viewfit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("viewfit").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            viewport_width: 1920,
            viewport_height: 1080,
            coalesce_resizes: false,
        };

        let temp_dir = std::env::temp_dir();
        let temp_path = temp_dir.join("test_viewfit_config.toml");

        config.save(&temp_path).unwrap();
        let loaded = Config::load(&temp_path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.initial_viewport(), Viewport::new(1920.0, 1080.0));

        // Cleanup
        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.viewport_width, 1200);
        assert_eq!(config.viewport_height, 800);
        assert!(config.coalesce_resizes);
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("viewfit/config.toml"));
        }
    }
}
