//! Configuration for the power quadrant demo.
//!
//! Stored in `~/.pq/config.toml`; partial configs are fine, with
//! unspecified values falling back to defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pq_core::SignConvention;

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PqConfig {
    /// Settings that affect the model and readouts.
    pub core: CoreConfig,

    /// Window/appearance settings for a desktop frontend.
    pub gui: GuiConfig,
}

/// Model-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Sign convention selected at startup.
    pub sign_convention: SignConvention,

    /// Decimal places for readout values.
    pub decimal_places: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            sign_convention: SignConvention::Eei,
            decimal_places: 2,
        }
    }
}

/// Frontend window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Window width on startup.
    pub window_width: u32,

    /// Window height on startup.
    pub window_height: u32,

    /// Theme (light/dark/system).
    pub theme: GuiTheme,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 900,
            theme: GuiTheme::System,
        }
    }
}

/// GUI theme options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GuiTheme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Follow system preference.
    #[default]
    System,
}

impl PqConfig {
    /// Get the default config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".pq"))
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PqConfig::default();
        assert_eq!(config.core.sign_convention, SignConvention::Eei);
        assert_eq!(config.core.decimal_places, 2);
        assert_eq!(config.gui.window_width, 1280);
        assert_eq!(config.gui.theme, GuiTheme::System);
    }

    #[test]
    fn test_partial_config_parsing() {
        let toml = r#"
            [core]
            sign_convention = "IEC"

            [gui]
            theme = "dark"
        "#;

        let config: PqConfig = toml::from_str(toml).unwrap();

        // Explicitly set values
        assert_eq!(config.core.sign_convention, SignConvention::Iec);
        assert_eq!(config.gui.theme, GuiTheme::Dark);

        // Defaults for unset values
        assert_eq!(config.core.decimal_places, 2);
        assert_eq!(config.gui.window_width, 1280);
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut config = PqConfig::default();
        config.core.sign_convention = SignConvention::Iec;
        config.gui.window_height = 720;
        config.save_to(&path).unwrap();

        let loaded = PqConfig::load_from(&path).unwrap();
        assert_eq!(loaded.core.sign_convention, SignConvention::Iec);
        assert_eq!(loaded.gui.window_height, 720);
    }
}
