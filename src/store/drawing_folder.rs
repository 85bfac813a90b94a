// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use super::codec::{self, LoadedDrawing, ParsePolicy};
use super::error::StoreError;
use super::fs::{DrawingFs, LocalFs};
use crate::model::Canvas;

pub const DEFAULT_EXTENSION: &str = "txt";

/// Checks a file extension (without its leading `.`) for anything that could leave the folder.
pub fn check_extension(extension: &str) -> Result<(), &'static str> {
    if extension.contains(['/', '\\']) {
        return Err("extension must not contain path separators");
    }
    if extension.contains("..") {
        return Err("extension must not contain \"..\"");
    }
    if extension.chars().any(char::is_control) {
        return Err("extension must not contain control characters");
    }
    Ok(())
}

/// A user-typed drawing name with the file extension applied.
///
/// Names are a single path segment: drawings always live directly inside the folder root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawingName {
    file_name: SmolStr,
}

impl DrawingName {
    pub fn new(input: &str, extension: &str) -> Result<Self, StoreError> {
        let trimmed = input.trim();
        let invalid = |reason| StoreError::InvalidName {
            name: input.to_owned(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(invalid("name must not contain path separators"));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(invalid("name must not be a relative directory"));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(invalid("name must not contain control characters"));
        }
        check_extension(extension).map_err(|reason| StoreError::InvalidExtension {
            extension: extension.to_owned(),
            reason,
        })?;

        let suffix = format!(".{extension}");
        let file_name = if extension.is_empty() || trimmed.ends_with(&suffix) {
            SmolStr::new(trimmed)
        } else {
            SmolStr::new(format!("{trimmed}{suffix}"))
        };

        Ok(Self { file_name })
    }

    pub fn as_str(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for DrawingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// The directory drawings are saved to and loaded from.
#[derive(Debug, Clone)]
pub struct DrawingFolder<F = LocalFs> {
    root: PathBuf,
    extension: SmolStr,
    policy: ParsePolicy,
    fs: F,
}

impl DrawingFolder<LocalFs> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, LocalFs::new())
    }
}

impl<F: DrawingFs> DrawingFolder<F> {
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into(),
            extension: SmolStr::new_static(DEFAULT_EXTENSION),
            policy: ParsePolicy::default(),
            fs,
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = SmolStr::new(extension.trim_start_matches('.'));
        self
    }

    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn name(&self, input: &str) -> Result<DrawingName, StoreError> {
        DrawingName::new(input, &self.extension)
    }

    pub fn path_for(&self, name: &DrawingName) -> PathBuf {
        self.root.join(name.as_str())
    }

    pub fn save(&self, name: &DrawingName, canvas: &Canvas) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name);
        codec::save(&self.fs, &path, canvas.cells())?;
        Ok(path)
    }

    pub fn load(&self, name: &DrawingName) -> Result<LoadedDrawing, StoreError> {
        codec::load(&self.fs, &self.path_for(name), self.policy)
    }

    /// Removes the drawing; a missing file is reported as [`StoreError::FileNotFound`].
    pub fn delete(&self, name: &DrawingName) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name);
        let removed = self
            .fs
            .delete(&path)
            .map_err(|source| StoreError::from_io(&path, source))?;
        if !removed {
            return Err(StoreError::FileNotFound { path });
        }
        tracing::info!(path = %path.display(), "deleted drawing");
        Ok(path)
    }
}
