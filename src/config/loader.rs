// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_LOG_LEVEL, DEFAULT_REPEAT};
use crate::errors::ConfigError;
use crate::observability::messages::{config::*, StructuredLog};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A greeting plan: an ordered list of greeting steps.
///
/// # Fields
/// * `log_level` - Default log filter when `RUST_LOG` is unset (optional, defaults to "info")
/// * `greetings` - Steps run in order by the plan runner
///
/// # Example
/// ```yaml
/// log_level: info
/// greetings:
///   - variant: hello
///   - variant: hello_small
///     repeat: 3
/// ```
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub greetings: Vec<GreetingStep>,
}

/// One step of a greeting plan.
///
/// # Fields
/// * `variant` - Which greeter writes the line
/// * `abort` - Abort the process instead of greeting (only `hello`, defaults to false)
/// * `repeat` - How many times the line is written (defaults to 1)
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct GreetingStep {
    pub variant: Variant,
    #[serde(default)]
    pub abort: bool,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

/// The greeters a plan can name.
#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Hello,
    HelloSmall,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Hello => "hello",
            Variant::HelloSmall => "hello_small",
        }
    }
}

/// On-disk plan format, picked from the file extension.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlanFormat {
    Yaml,
    Toml,
}

impl PlanFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Some(PlanFormat::Yaml),
            Some("toml") => Some(PlanFormat::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFormat::Yaml => "yaml",
            PlanFormat::Toml => "toml",
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_repeat() -> u32 {
    DEFAULT_REPEAT
}

/// Load a greeting plan from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = PlanFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cfg: Config = match format {
        PlanFormat::Yaml => serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        PlanFormat::Toml => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
    };

    ConfigLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
        step_count: cfg.greetings.len(),
    }
    .log();

    Ok(cfg)
}

/// Load a greeting plan and check it can run as written
///
/// Every validation problem is reported, not only the first.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_plan(&cfg) {
        let problems: Vec<String> = validation_errors.iter().map(|e| e.to_string()).collect();
        ConfigValidationFailed {
            path: &path.display().to_string(),
            problems: &problems,
        }
        .log();
        return Err(ConfigError::Validation(validation_errors));
    }

    Ok(cfg)
}
