// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry configuration system
//!
//! The only setting is the shared tolerance. It can come from a TOML file and
//! be overridden by the `TRI3D_EPSILON` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::geometry::tolerance::{self, DEFAULT_EPSILON};

/// Default config file looked up by [`GeometryConfig::load`]
pub const CONFIG_FILE: &str = "tri3d.toml";

/// Environment variable overriding the configured epsilon
pub const EPSILON_ENV: &str = "TRI3D_EPSILON";

/// Geometry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Tolerance for collinearity, coplanarity and boundary tests
    pub epsilon: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl GeometryConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: GeometryConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `tri3d.toml` from the working directory if present, then apply
    /// environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Ok(epsilon) = std::env::var(EPSILON_ENV) {
            config.epsilon = epsilon
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", EPSILON_ENV, epsilon))?;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Install this configuration as the process-wide tolerance
    pub fn apply(&self) -> Result<()> {
        tolerance::set_epsilon(self.epsilon).context("Failed to apply geometry config")?;
        Ok(())
    }
}
