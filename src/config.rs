// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime configuration.
//!
//! Defaults, then an optional JSON file, then `GLYPHPAD_*` environment variables. The binary takes
//! no arguments, so this is the only way to configure it.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{
    check_extension, DrawingFolder, LocalFs, ParsePolicy, WriteDurability, DEFAULT_EXTENSION,
};

pub const CONFIG_FILENAME: &str = "glyphpad.json";

const ENV_CONFIG: &str = "GLYPHPAD_CONFIG";
const ENV_DIR: &str = "GLYPHPAD_DIR";
const ENV_PARSE_POLICY: &str = "GLYPHPAD_PARSE_POLICY";
const ENV_EXTENSION: &str = "GLYPHPAD_EXTENSION";
const ENV_RELOAD_AFTER_SAVE: &str = "GLYPHPAD_RELOAD_AFTER_SAVE";
const ENV_DURABLE_WRITES: &str = "GLYPHPAD_DURABLE_WRITES";
const ENV_LOG: &str = "GLYPHPAD_LOG";
const ENV_LOG_FILE: &str = "GLYPHPAD_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where drawings are saved, loaded and deleted.
    pub drawings_dir: PathBuf,
    /// Appended to every name typed at the prompt.
    pub extension: String,
    pub parse_policy: ParsePolicy,
    pub reload_after_save: bool,
    pub durability: WriteDurability,
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
    /// Logging is off unless this is set; the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drawings_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_owned(),
            parse_policy: ParsePolicy::default(),
            reload_after_save: false,
            durability: WriteDurability::default(),
            log_filter: "info".to_owned(),
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid env {name}={value:?}: {reason}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid drawing extension {value:?}: {reason}")]
    InvalidExtension { value: String, reason: &'static str },
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Resolves configuration against an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let var = |name: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(name) {
                Ok(value) if value.trim().is_empty() => Ok(None),
                Ok(value) => Ok(Some(value.trim().to_owned())),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
                    name,
                    value: "<non-unicode>".to_owned(),
                    reason: "value is not valid unicode".to_owned(),
                }),
            }
        };

        let dir_override = var(ENV_DIR)?.map(PathBuf::from);
        let mut config = match var(ENV_CONFIG)? {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                let dir = dir_override.clone().unwrap_or_else(|| PathBuf::from("."));
                let candidate = dir.join(CONFIG_FILENAME);
                if candidate.is_file() {
                    Self::from_file(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(dir) = dir_override {
            config.drawings_dir = dir;
        }
        if let Some(value) = var(ENV_PARSE_POLICY)? {
            config.parse_policy = value.parse().map_err(|reason| ConfigError::InvalidEnv {
                name: ENV_PARSE_POLICY,
                value: value.clone(),
                reason,
            })?;
        }
        if let Some(value) = var(ENV_EXTENSION)? {
            config.extension = value;
        }
        config.extension = config.extension.trim_start_matches('.').to_owned();
        check_extension(&config.extension).map_err(|reason| ConfigError::InvalidExtension {
            value: config.extension.clone(),
            reason,
        })?;
        if let Some(value) = var(ENV_RELOAD_AFTER_SAVE)? {
            config.reload_after_save = parse_flag(ENV_RELOAD_AFTER_SAVE, &value)?;
        }
        if let Some(value) = var(ENV_DURABLE_WRITES)? {
            config.durability = if parse_flag(ENV_DURABLE_WRITES, &value)? {
                WriteDurability::Durable
            } else {
                WriteDurability::BestEffort
            };
        }
        if let Some(value) = var(ENV_LOG)? {
            config.log_filter = value;
        }
        if let Some(value) = var(ENV_LOG_FILE)? {
            config.log_file = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn drawing_folder(&self) -> DrawingFolder<LocalFs> {
        DrawingFolder::with_fs(
            &self.drawings_dir,
            LocalFs::new().with_durability(self.durability),
        )
        .with_extension(&self.extension)
        .with_policy(self.parse_policy)
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            name,
            value: value.to_owned(),
            reason: "expected a boolean (1/0, true/false, yes/no, on/off)".to_owned(),
        }),
    }
}
