use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ChallsError, Result};

pub const SOURCE_ENV: &str = "CHALLS_SOURCE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Challenge file path or `http(s)://` endpoint.
    #[serde(default)]
    pub source: Option<String>,
}

impl UserConfig {
    /// Flag beats environment beats config file.
    pub fn resolve_source(&self, flag: Option<&str>) -> Result<String> {
        if let Some(source) = flag {
            return Ok(source.to_string());
        }
        if let Ok(source) = env::var(SOURCE_ENV) {
            if !source.trim().is_empty() {
                return Ok(source);
            }
        }
        self.source.clone().ok_or(ChallsError::NoSource)
    }
}

pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ChallsError::NoHomeDir)?;
    Ok(home.join(".config").join("challs"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.json"))
}

pub fn load_config() -> UserConfig {
    let path = match get_config_path() {
        Ok(path) => path,
        Err(_) => return UserConfig::default(),
    };
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => UserConfig::default(),
    }
}

pub fn save_config(config: &UserConfig) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
