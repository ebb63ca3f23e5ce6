use crate::error::{OppError, Result};
use crate::model::OpportunityType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE: &str = "opportunities.db";

/// Configuration for oppdb, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OppConfig {
    /// Database file; relative paths resolve against the data directory
    #[serde(default = "default_database")]
    pub database: String,

    /// Type preselected for new entries
    #[serde(default)]
    pub default_type: OpportunityType,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Default for OppConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_type: OpportunityType::default(),
        }
    }
}

impl OppConfig {
    pub const KEYS: [&'static str; 2] = ["database", "default-type"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: OppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        let db = PathBuf::from(&self.database);
        if db.is_absolute() {
            db
        } else {
            data_dir.join(db)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database" => Some(self.database.clone()),
            "default-type" | "default_type" => Some(self.default_type.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database" => {
                if value.trim().is_empty() {
                    return Err(OppError::Api("database cannot be empty".to_string()));
                }
                self.database = value.to_string();
            }
            "default-type" | "default_type" => {
                self.default_type = value.parse()?;
            }
            other => return Err(OppError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
