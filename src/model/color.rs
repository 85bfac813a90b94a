// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// One of the 16 console colors a cell can carry.
///
/// The discriminants are the integer encoding used by the drawing file format, so the order here
/// is load-bearing: it matches the classic console numbering (dark colors first, then bright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteColor {
    Black = 0,
    DarkBlue = 1,
    DarkGreen = 2,
    DarkCyan = 3,
    DarkRed = 4,
    DarkMagenta = 5,
    DarkYellow = 6,
    Gray = 7,
    DarkGray = 8,
    Blue = 9,
    Green = 10,
    Cyan = 11,
    Red = 12,
    Magenta = 13,
    Yellow = 14,
    White = 15,
}

/// Color restored by the reset key.
pub const DEFAULT_COLOR: PaletteColor = PaletteColor::Gray;

/// Color a fresh session starts drawing with.
pub const INITIAL_COLOR: PaletteColor = PaletteColor::White;

const ALL: [PaletteColor; 16] = [
    PaletteColor::Black,
    PaletteColor::DarkBlue,
    PaletteColor::DarkGreen,
    PaletteColor::DarkCyan,
    PaletteColor::DarkRed,
    PaletteColor::DarkMagenta,
    PaletteColor::DarkYellow,
    PaletteColor::Gray,
    PaletteColor::DarkGray,
    PaletteColor::Blue,
    PaletteColor::Green,
    PaletteColor::Cyan,
    PaletteColor::Red,
    PaletteColor::Magenta,
    PaletteColor::Yellow,
    PaletteColor::White,
];

/// Digit keys 1..=9, in order.
const DIGIT_PALETTE: [PaletteColor; 9] = [
    PaletteColor::White,
    PaletteColor::Red,
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Yellow,
    PaletteColor::Cyan,
    PaletteColor::Magenta,
    PaletteColor::Gray,
    PaletteColor::Black,
];

impl PaletteColor {
    pub const COUNT: usize = ALL.len();

    pub fn all() -> &'static [PaletteColor; 16] {
        &ALL
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL.get(usize::from(index)).copied()
    }

    /// Maps a digit key (1..=9) to the quick-select palette.
    pub fn from_digit(digit: u8) -> Option<Self> {
        let slot = usize::from(digit).checked_sub(1)?;
        DIGIT_PALETTE.get(slot).copied()
    }

    /// One step up the brightness ladder; saturates at the bright end.
    pub fn brighter(self) -> Self {
        match self {
            Self::DarkBlue => Self::Blue,
            Self::DarkGreen => Self::Green,
            Self::DarkCyan => Self::Cyan,
            Self::DarkRed => Self::Red,
            Self::DarkMagenta => Self::Magenta,
            Self::DarkYellow => Self::Yellow,
            Self::Black => Self::DarkGray,
            Self::DarkGray => Self::Gray,
            Self::Gray => Self::White,
            other => other,
        }
    }

    /// One step down the brightness ladder; saturates at the dark end.
    pub fn darker(self) -> Self {
        match self {
            Self::Blue => Self::DarkBlue,
            Self::Green => Self::DarkGreen,
            Self::Cyan => Self::DarkCyan,
            Self::Red => Self::DarkRed,
            Self::Magenta => Self::DarkMagenta,
            Self::Yellow => Self::DarkYellow,
            Self::White => Self::Gray,
            Self::Gray => Self::DarkGray,
            Self::DarkGray => Self::Black,
            other => other,
        }
    }

    pub fn adjust_brightness(self, direction: i8) -> Self {
        match direction.signum() {
            1 => self.brighter(),
            -1 => self.darker(),
            _ => self,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark blue",
            Self::DarkGreen => "dark green",
            Self::DarkCyan => "dark cyan",
            Self::DarkRed => "dark red",
            Self::DarkMagenta => "dark magenta",
            Self::DarkYellow => "dark yellow",
            Self::Gray => "gray",
            Self::DarkGray => "dark gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
