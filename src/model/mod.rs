// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core drawing model.
//!
//! A drawing is a sparse [`Canvas`] of colored glyphs, edited through a [`Cursor`] that is clamped
//! to the current [`Viewport`].

pub mod brush;
pub mod canvas;
pub mod color;
pub mod cursor;

pub use brush::{Brush, Pen};
pub use canvas::{Canvas, Cell, Point};
pub use color::{PaletteColor, DEFAULT_COLOR, INITIAL_COLOR};
pub use cursor::{Cursor, Viewport};
