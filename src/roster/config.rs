use crate::error::{Result, RosterError};
use crate::normalize::CaseMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Casing rules used when normalizing names and majors
    #[serde(default)]
    pub casing: CaseMode,

    /// Normalize every record as it is loaded from a roster file
    #[serde(default)]
    pub normalize_on_load: bool,
}

impl RosterConfig {
    pub const KEYS: [&'static str; 2] = ["casing", "normalize-on-load"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "casing" => Some(self.casing.to_string()),
            "normalize-on-load" => Some(self.normalize_on_load.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "casing" => {
                self.casing = value.parse()?;
                Ok(())
            }
            "normalize-on-load" => {
                self.normalize_on_load = parse_bool(value)?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

fn parse_bool(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got {}", other)),
    }
}

/// `$ROSTER_CONFIG_DIR` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine config dir".to_string()))
}
