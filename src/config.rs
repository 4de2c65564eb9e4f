use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrambleConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Seed the store with the sample dataset at startup.
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

impl BrambleConfig {
    /// Load `.bramble.yml` by searching upward from `start_path`.
    /// Falls back to defaults when no config file exists.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let content = std::fs::read_to_string(&config_path)?;
                Ok(serde_yaml::from_str(&content)?)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".bramble.yml");
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
