// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for drawings on disk.
//!
//! Drawings are flat text files inside a single folder, one `x,y,glyph,colorIndex` record per
//! painted cell.

pub mod codec;
pub mod drawing_folder;
pub mod error;
pub mod fs;

pub use codec::{LoadedDrawing, MalformedLine, ParsePolicy, RecordError};
pub use drawing_folder::{check_extension, DrawingFolder, DrawingName, DEFAULT_EXTENSION};
pub use error::StoreError;
pub use fs::{DrawingFs, LocalFs, MemoryFs, StoredLine, WriteDurability};

#[cfg(test)]
pub(crate) mod testing {
    use std::env;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub(crate) struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        pub(crate) fn new(prefix: &str) -> Self {
            let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = env::temp_dir();
            path.push(format!("glyphpad-{prefix}-{}-{nanos}-{counter}", std::process::id()));
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        pub(crate) fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }
}
