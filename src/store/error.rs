// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::codec::RecordError;

/// Every failure here is recoverable: the session reports it and stays in the menu.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("malformed record in {} at line {line}: {content:?}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        source: RecordError,
    },

    #[error("invalid drawing name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid drawing extension {extension:?}: {reason}")]
    InvalidExtension {
        extension: String,
        reason: &'static str,
    },

    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Classifies an I/O failure, keeping not-found distinct.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
