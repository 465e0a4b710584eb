use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "prodfilter.json";
const DEFAULT_BULLET: &str = " * ";
const HOME_ENV: &str = "PRODFILTER_HOME";

/// Display settings, stored in prodfilter.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Prefix printed before each matching product
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Whether headers are colored
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_bullet() -> String {
    DEFAULT_BULLET.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bullet: default_bullet(),
            color: default_color(),
        }
    }
}

impl DisplayConfig {
    /// `$PRODFILTER_HOME` when set, otherwise the current directory.
    pub fn config_dir() -> PathBuf {
        match std::env::var_os(HOME_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DisplayConfig = serde_json::from_str(&content)?;
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
}
