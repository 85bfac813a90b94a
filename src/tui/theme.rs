// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use crate::model::PaletteColor;
use crate::session::StatusKind;

const PALETTE_ENV: &str = "GLYPHPAD_PALETTE";

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        Self::from_palette_value(env::var(PALETTE_ENV))
    }

    fn from_palette_value(value: Result<String, env::VarError>) -> Result<Self, ThemeError> {
        let value = match value {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV,
                    value: "<non-unicode>".to_owned(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let palette = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV,
            value: format!("{trimmed} ({error})"),
        })?;
        Ok(Self {
            palette: Some(palette),
        })
    }

    /// Terminal color a drawing cell is shown in.
    pub(crate) fn cell_color(&self, color: PaletteColor) -> Color {
        match &self.palette {
            Some(palette) => palette.colors[usize::from(color.index())],
            None => console_color(color),
        }
    }

    pub(crate) fn cell_style(&self, color: PaletteColor) -> Style {
        Style::default().fg(self.cell_color(color))
    }

    pub(crate) fn menu_border_style(&self) -> Style {
        Style::default().fg(self.cell_color(PaletteColor::Yellow))
    }

    pub(crate) fn selection_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        Style::default().fg(self.cell_color(PaletteColor::Gray))
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        Style::default().fg(self.cell_color(PaletteColor::Cyan))
    }

    pub(crate) fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => Style::default().fg(self.cell_color(PaletteColor::Green)),
            StatusKind::Error => Style::default()
                .fg(self.cell_color(PaletteColor::Red))
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// The sixteen console colors mapped onto the terminal's own ANSI palette.
pub(crate) fn console_color(color: PaletteColor) -> Color {
    match color {
        PaletteColor::Black => Color::Black,
        PaletteColor::DarkBlue => Color::Blue,
        PaletteColor::DarkGreen => Color::Green,
        PaletteColor::DarkCyan => Color::Cyan,
        PaletteColor::DarkRed => Color::Red,
        PaletteColor::DarkMagenta => Color::Magenta,
        PaletteColor::DarkYellow => Color::Yellow,
        PaletteColor::Gray => Color::Gray,
        PaletteColor::DarkGray => Color::DarkGray,
        PaletteColor::Blue => Color::LightBlue,
        PaletteColor::Green => Color::LightGreen,
        PaletteColor::Cyan => Color::LightCyan,
        PaletteColor::Red => Color::LightRed,
        PaletteColor::Magenta => Color::LightMagenta,
        PaletteColor::Yellow => Color::LightYellow,
        PaletteColor::White => Color::White,
    }
}

/// Explicit RGB values for all sixteen colors, in file-format index order.
#[derive(Debug, Clone)]
struct TuiPalette {
    colors: [Color; PaletteColor::COUNT],
}

impl TuiPalette {
    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != PaletteColor::COUNT {
            let names: Vec<&str> = PaletteColor::all().iter().map(|c| c.name()).collect();
            return Err(format!(
                "expected {} comma-separated colors ({}), got {}",
                PaletteColor::COUNT,
                names.join(","),
                parts.len()
            ));
        }

        let mut colors = [Color::Reset; PaletteColor::COUNT];
        for (slot, part) in colors.iter_mut().zip(parts) {
            *slot = parse_palette_color(part)?;
        }
        Ok(Self { colors })
    }
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(
            parse_hex_channel(r)?,
            parse_hex_channel(g)?,
            parse_hex_channel(b)?,
        ));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let [_, r, g, b] = rgb.to_be_bytes();
    Ok(Color::Rgb(r, g, b))
}

/// Accepts the 8-bit and 16-bit channel forms terminals report (`ff` or `ffff`).
fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|wide| wide.to_be_bytes()[0])
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!(
            "invalid rgb: component {value} (expected 2 or 4 hex digits)"
        )),
    }
}

#[derive(Debug, Clone, Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: &'static str, value: String },
}
