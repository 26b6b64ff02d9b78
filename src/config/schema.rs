// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from enroll.toml.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::rules::CreditLoadRule;

/// The main configuration structure for enroll.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnrollConfig {
    /// Rule parameters.
    pub rules: RulesConfig,

    /// Logging configuration.
    pub log: LogConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl EnrollConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject values no rule can work with.
    pub fn validate(&self) -> Result<()> {
        if self.rules.max_credit_load == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.max_credit_load".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Parameters for the built-in rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum credit hours a student may carry.
    pub max_credit_load: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_credit_load: CreditLoadRule::DEFAULT_MAX_CREDITS,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,

    /// Whether to use emoji.
    pub emoji: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            emoji: true,
        }
    }
}
