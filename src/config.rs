// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::AddonProps;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// YAML file with the add-on options; defaults apply when unset
    pub options_path: Option<PathBuf>,
    /// Print the apply plan instead of applying it
    pub dry_run: bool,
    pub helm_binary: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let options_path = env::var_os("PIXIE_ADDON_OPTIONS").map(PathBuf::from);
        let dry_run: bool = env::var("DRY_RUN")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        let helm_binary = env::var("HELM_BIN").unwrap_or("helm".to_string());

        Ok(Config {
            options_path,
            dry_run,
            helm_binary,
        })
    }

    /// Read the add-on options file, if one is configured
    pub fn load_props(&self) -> Result<AddonProps> {
        let Some(path) = &self.options_path else {
            return Ok(AddonProps::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        parse_props(&contents)
            .with_context(|| format!("Invalid options file {}", path.display()))
    }
}

fn parse_props(contents: &str) -> Result<AddonProps> {
    if contents.trim().is_empty() {
        return Ok(AddonProps::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}
