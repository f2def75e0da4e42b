//! Configuration management for the jsonsig CLI
//!
//! Config file: ~/.jsonsig/config.toml

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// jsonsig configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub identity: IdentityConfig,
    #[serde(default)]
    pub signing: SigningConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub key_path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Chain id used when a command gets no --chain-id
    pub chain_id: Option<String>,
    /// Print uncompressed public keys by default
    #[serde(default)]
    pub expanded_keys: bool,
}

impl Config {
    pub fn default_in(dir: &Path) -> Self {
        Self {
            identity: IdentityConfig {
                key_path: dir.join("keys/signer.json"),
            },
            signing: SigningConfig::default(),
        }
    }
}

/// Key file written by `jsonsig keygen`
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyFile {
    pub address: String,
    pub public_key: String,
    pub private_key: String,
    pub created_at: DateTime<Utc>,
}

/// Get the jsonsig config directory (~/.jsonsig)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".jsonsig"))
}

/// Get the config file path (~/.jsonsig/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from the default location
pub fn load() -> Result<Config> {
    let dir = config_dir()?;
    load_from(&dir.join("config.toml"), &dir)
}

/// Load configuration from `path`, falling back to defaults rooted at `dir`
pub fn load_from(path: &Path, dir: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default_in(dir));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<()> {
    save_to(config, &config_path()?)
}

pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn read_key_file(path: &Path) -> Result<KeyFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    let key: KeyFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid key file {}", path.display()))?;
    Ok(key)
}

/// Write a key file readable only by the owner
pub fn write_key_file(key: &KeyFile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(key)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write key file {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(())
}
