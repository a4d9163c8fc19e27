//! Global configuration at ~/.config/holiplan/config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use holiplan_core::catalog::DEFAULT_SELECTED_LOCATIONS;
use holiplan_core::color::Theme;
use holiplan_provider_nager::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

static DEFAULT_DATA_DIR: &str = "~/.local/share/holiplan";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_locations() -> Vec<String> {
    DEFAULT_SELECTED_LOCATIONS.iter().map(|s| s.to_string()).collect()
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HoliplanConfig {
    /// Where vacation plans and custom calendars are stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub theme: Theme,

    /// Location ids shown when a command gets no `-l` flags
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for HoliplanConfig {
    fn default() -> Self {
        HoliplanConfig {
            data_dir: default_data_dir(),
            theme: Theme::default(),
            locations: default_locations(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl HoliplanConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("holiplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, creating a commented default on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: HoliplanConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .with_context(|| format!("Could not read {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned())
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Could not render config")
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# holiplan configuration

# Where vacation plans and custom calendars are stored:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# Color theme for calendar colors (\"light\" or \"dark\"):
# theme = \"light\"

# Locations shown by default:
# locations = [{}]

# Public holiday API:
# api_base_url = \"{DEFAULT_BASE_URL}\"
",
            DEFAULT_SELECTED_LOCATIONS
                .iter()
                .map(|id| format!("\"{id}\""))
                .collect::<Vec<_>>()
                .join(", ")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;
        tracing::info!(path = %path.display(), "created default config");

        Ok(())
    }
}
