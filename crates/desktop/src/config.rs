//! Configuration management using config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the reporting backend
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Username prefilled on the login form
    #[serde(default)]
    pub username: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            username: String::new(),
        }
    }
}

impl Config {
    /// Load config from file, creating default if it doesn't exist
    pub fn load() -> Self {
        if Path::new(CONFIG_PATH).exists() {
            match fs::read_to_string(CONFIG_PATH) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::error!("Error parsing config.toml: {}", e);
                    }
                },
                Err(e) => {
                    tracing::error!("Error reading config.toml: {}", e);
                }
            }
        }

        // Return default config (will prompt user to fill in)
        let config = Config::default();
        let _ = config.save(); // Try to create the file
        config
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(CONFIG_PATH, content)?;
        Ok(())
    }

    /// Check if the config points at a usable backend
    pub fn is_valid(&self) -> bool {
        !self.server_url.trim().is_empty()
    }
}
