//! TOML configuration for building a ring.
//!
//! ```toml
//! [ring]
//! replicas = 64
//! hash = "crc32"   # or "blake3"
//! ```
//!
//! Omitted fields fall back to the defaults: 64 replicas per unit of weight,
//! CRC-32 positions.

use std::path::Path;

use serde::Deserialize;
use tideline_hash::HashKind;

use crate::error::ConfigError;
use crate::ring::DEFAULT_REPLICAS;

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Ring construction parameters.
    pub ring: RingSection,
}

/// `[ring]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RingSection {
    /// Replica positions per unit of target weight.
    pub replicas: Option<u32>,
    /// Hash used for both replica and resource positions.
    pub hash: Option<HashKind>,
}

impl RingConfig {
    /// Load and validate config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate config from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: RingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the ring cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.ring.replicas {
            Some(0) => Err(ConfigError::InvalidReplicas(0)),
            _ => Ok(()),
        }
    }

    /// Effective replica count (config value or 64).
    pub fn replicas(&self) -> u32 {
        self.ring.replicas.unwrap_or(DEFAULT_REPLICAS)
    }

    /// Effective hasher (config value or CRC-32).
    pub fn hash_kind(&self) -> HashKind {
        self.ring.hash.unwrap_or_default()
    }
}
