// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("cannot install log subscriber: {0}")]
    Install(String),
}

/// Installs the global subscriber when a log file is configured.
///
/// Returns `Ok(false)` without touching global state when logging is off. Output never goes to
/// stdout or stderr while the UI owns the terminal.
pub fn init(config: &Config) -> Result<bool, LoggingError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    let filter = build_filter(&config.log_filter)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}

fn build_filter(directives: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directives).map_err(|source| LoggingError::Filter {
        filter: directives.to_owned(),
        source,
    })
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })
}
