// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_source};
use anyhow::{Context, Result};
use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "polyroot.config.yaml";
pub const DEFAULT_INPUT_FILE: &str = "input.json";
pub const ENV_PREFIX: &str = "POLYROOT_";
/// `POLYROOT_*` variables read into `AppConfig`. Any other is left alone.
const ENV_KEYS: &[&str] = &["input", "format", "verify"];

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable summary followed by the coefficient line
    #[default]
    Text,
    /// A single JSON object, big integers as decimal strings
    Json,
}

/// Settings for a single run
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// JSON input record holding `keys` and the indexed roots
    pub input: PathBuf,
    /// Report format
    pub format: OutputFormat,
    /// Evaluate the result at every chosen root before reporting
    pub verify: bool,
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            format: OutputFormat::Text,
            verify: false,
            config_file: None,
        }
    }
}

impl AppConfig {
    /// The YAML file the settings were merged from, if one existed.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}

/// Values given on the command line. Only fields that are set take part in the merge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

pub struct OsDirs;
impl OsDirs {
    /// `<os config dir>/polyroot`, or `None` when the platform has no config dir.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("polyroot"))
    }
}

/// Load the config at `config_file`, a discovered `polyroot.config.yaml` or
/// the per-user default, then apply `POLYROOT_*` environment variables and
/// finally the command line overrides.
pub fn load_config(config_file: Option<PathBuf>, overrides: CliOverrides) -> Result<AppConfig> {
    let cwd = env::current_dir()?;
    let fallback_dir = OsDirs::config_dir().unwrap_or_else(|| cwd.clone());

    let source = resolve_config_source(
        find_in_parent,
        &cwd,
        &fallback_dir,
        DEFAULT_CONFIG_NAME,
        config_file.as_deref(),
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    let found_config_file = if source.path().is_file() {
        debug!("Reading configuration from {}", source.path().display());
        figment = figment.merge(Yaml::file(source.path()));
        Some(source.path().to_path_buf())
    } else if source.is_required() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", source.path().display()),
        ))
        .context("Configuration file not found");
    } else {
        None
    };

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
        .merge(Serialized::defaults(&overrides))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = found_config_file;
    Ok(config)
}
