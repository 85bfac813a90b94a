// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Shade glyph stamped by the place key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brush {
    #[default]
    Full,
    Dark,
    Medium,
    Light,
}

impl Brush {
    /// In function-key slot order.
    pub const ALL: [Brush; 4] = [Brush::Full, Brush::Dark, Brush::Medium, Brush::Light];

    pub const fn glyph(self) -> char {
        match self {
            Self::Full => '█',
            Self::Dark => '▓',
            Self::Medium => '▒',
            Self::Light => '░',
        }
    }

    /// Brush bound to function key `n` (1..=4).
    pub fn from_slot(slot: u8) -> Option<Self> {
        let idx = usize::from(slot).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }
}

/// Whether directional moves also stamp the active brush.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pen {
    #[default]
    Up,
    Down,
}

impl Pen {
    pub fn toggled(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    pub fn is_down(self) -> bool {
        self == Self::Down
    }
}

#[cfg(test)]
mod tests {
    use super::{Brush, Pen};

    #[test]
    fn slots_map_to_shades_in_order() {
        let glyphs: String = (1..=4)
            .filter_map(Brush::from_slot)
            .map(Brush::glyph)
            .collect();
        assert_eq!(glyphs, "█▓▒░");
        assert_eq!(Brush::from_slot(0), None);
        assert_eq!(Brush::from_slot(5), None);
    }

    #[test]
    fn all_lists_brushes_in_slot_order() {
        for (slot, brush) in (1..).zip(Brush::ALL) {
            assert_eq!(Brush::from_slot(slot), Some(brush));
        }
    }

    #[test]
    fn pen_toggles() {
        assert!(!Pen::default().is_down());
        assert!(Pen::default().toggled().is_down());
        assert_eq!(Pen::Down.toggled(), Pen::Up);
    }
}
