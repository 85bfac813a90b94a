// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use super::color::PaletteColor;

/// Grid coordinate, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Row-major ordering key, used wherever cells must come out in a stable order.
    pub const fn row_major(self) -> (u16, u16) {
        (self.y, self.x)
    }
}

/// What a non-empty grid cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: char,
    pub color: PaletteColor,
}

impl Cell {
    pub const fn new(glyph: char, color: PaletteColor) -> Self {
        Self { glyph, color }
    }
}

/// Sparse drawing surface: only painted coordinates are stored.
///
/// The canvas does not know the viewport; callers keep coordinates in bounds before they place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: HashMap<Point, Cell>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, x: u16, y: u16, glyph: char, color: PaletteColor) {
        self.cells.insert(Point::new(x, y), Cell::new(glyph, color));
    }

    /// Removes the cell at `(x, y)`; returns whether one was there.
    pub fn erase(&mut self, x: u16, y: u16) -> bool {
        self.cells.remove(&Point::new(x, y)).is_some()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.cells.get(&Point::new(x, y)).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every painted cell, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells.iter().map(|(point, cell)| (*point, *cell))
    }

    /// Every painted cell, ordered by row then column.
    pub fn sorted_cells(&self) -> Vec<(Point, Cell)> {
        let mut cells: Vec<_> = self.cells().collect();
        cells.sort_unstable_by_key(|(point, _)| point.row_major());
        cells
    }

    /// Clears the canvas and places every record, later duplicates winning.
    pub fn replace_with(&mut self, cells: impl IntoIterator<Item = (Point, Cell)>) {
        self.clear();
        for (point, cell) in cells {
            self.place(point.x, point.y, cell.glyph, cell.color);
        }
    }
}

impl FromIterator<(Point, Cell)> for Canvas {
    fn from_iter<I: IntoIterator<Item = (Point, Cell)>>(iter: I) -> Self {
        let mut canvas = Self::new();
        canvas.replace_with(iter);
        canvas
    }
}
