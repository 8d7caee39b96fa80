//! Tunable game configuration.
//!
//! Every field has a default taken from [`crate::core::constants`], so a
//! partial JSON file only overrides what it names.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("party size must be at least 1")]
    EmptyParty,
}

/// How the ultimate-charge threshold responds to hero level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargePolicy {
    /// Threshold stays at the template value at every level.
    #[default]
    Fixed,
    /// Threshold drops by one per level above 1, never below 1.
    ReducePerLevel,
}

/// Stat-scaling parameters used by leveling and party construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    pub hp_increment: u32,
    pub atk_increment: u32,
    pub charge_policy: ChargePolicy,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            hp_increment: HP_INCREMENT,
            atk_increment: ATK_INCREMENT,
            charge_policy: ChargePolicy::Fixed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub progression: ProgressionConfig,
    pub party_size: usize,
    pub save_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            progression: ProgressionConfig::default(),
            party_size: DEFAULT_PARTY_SIZE,
            save_key: SAVE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        if config.party_size == 0 {
            return Err(ConfigError::EmptyParty);
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or invalid one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }
        }
    }
}
