// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark canvases (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use glyphpad::model::{Brush, Canvas, PaletteColor};
use glyphpad::store::codec::encode_lines;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("glyphpad_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A few strokes on a classic 80x24 screen.
    Sparse,
    /// Every cell of an 80x24 screen.
    Dense,
    /// Every cell of a 240x80 screen.
    Large,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sparse => "sparse_80x24",
            Self::Dense => "dense_80x24",
            Self::Large => "dense_240x80",
        }
    }

    const fn size(self) -> (u16, u16) {
        match self {
            Self::Sparse | Self::Dense => (80, 24),
            Self::Large => (240, 80),
        }
    }
}

const STAMPS: [char; 8] = ['#', '*', '+', 'o', '|', '-', '/', '\\'];

pub fn canvas(case: Case) -> Canvas {
    let (width, height) = case.size();
    let mut canvas = Canvas::new();
    for y in 0..height {
        for x in 0..width {
            if matches!(case, Case::Sparse) && (x + 3 * y) % 11 != 0 {
                continue;
            }
            let mix = usize::from(x) * 7 + usize::from(y) * 13;
            let glyph = if mix % 3 == 0 {
                Brush::ALL[mix % Brush::ALL.len()].glyph()
            } else {
                STAMPS[mix % STAMPS.len()]
            };
            let color = PaletteColor::all()[mix % PaletteColor::COUNT];
            canvas.place(x, y, glyph, color);
        }
    }
    canvas
}

pub fn lines(case: Case) -> Vec<String> {
    encode_lines(canvas(case).cells())
}

pub fn checksum_canvas(canvas: &Canvas) -> u64 {
    canvas.sorted_cells().iter().fold(0u64, |acc, (point, cell)| {
        acc.wrapping_mul(131)
            .wrapping_add((u64::from(point.x) << 16) | u64::from(point.y))
            .wrapping_mul(131)
            .wrapping_add(u64::from(cell.glyph) ^ u64::from(cell.color.index()))
    })
}
