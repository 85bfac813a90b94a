// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::canvas::Point;

/// Visible grid size, re-supplied by the terminal layer on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    fn max_x(&self) -> u16 {
        self.width.saturating_sub(1)
    }

    fn max_y(&self) -> u16 {
        self.height.saturating_sub(1)
    }
}

/// Grid position that never leaves the viewport it was last clamped to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: u16,
    y: u16,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves by `(dx, dy)` and clamps each axis to the viewport.
    ///
    /// Pushing against a wall leaves that axis where it is.
    pub fn move_by(&mut self, dx: i32, dy: i32, viewport: Viewport) {
        self.x = clamp_axis(self.x, dx, viewport.max_x());
        self.y = clamp_axis(self.y, dy, viewport.max_y());
    }

    /// Pulls the cursor back inside a viewport that may have shrunk.
    pub fn clamp_to(&mut self, viewport: Viewport) {
        self.x = self.x.min(viewport.max_x());
        self.y = self.y.min(viewport.max_y());
    }
}

fn clamp_axis(current: u16, delta: i32, max: u16) -> u16 {
    let target = i32::from(current).saturating_add(delta);
    let clamped = target.clamp(0, i32::from(max));
    // Within 0..=max, so it fits.
    u16::try_from(clamped).unwrap_or(max)
}
