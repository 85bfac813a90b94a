// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line codec for drawing files.
//!
//! One record per painted cell: `x,y,glyph,colorIndex`. There is no header and no escaping, so a
//! `,` glyph cannot be stored.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::error::StoreError;
use super::fs::DrawingFs;
use crate::model::{Cell, PaletteColor, Point};

const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 4;
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// What to do with a line that does not parse as a record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Skip the line, count it and keep loading.
    #[default]
    Lenient,
    /// Fail the whole load on the first bad line.
    Strict,
}

impl FromStr for ParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown parse policy {other:?} (expected lenient or strict)")),
        }
    }
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 4 comma-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid {axis} coordinate {value:?}")]
    Coordinate { axis: &'static str, value: String },
    #[error("glyph must be exactly one character, got {value:?}")]
    Glyph { value: String },
    #[error("invalid color index {value:?} (expected 0-15)")]
    ColorIndex { value: String },
    #[error("line is not valid UTF-8 (bad byte at offset {valid_up_to})")]
    Encoding { valid_up_to: usize },
}

/// First line that failed under [`ParsePolicy::Strict`]. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct MalformedLine {
    pub line: usize,
    pub content: String,
    #[source]
    pub source: RecordError,
}

/// Records read from a drawing file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedDrawing {
    pub cells: Vec<(Point, Cell)>,
    /// Malformed lines dropped under [`ParsePolicy::Lenient`].
    pub skipped: usize,
}

pub fn encode_record(point: Point, cell: Cell, out: &mut String) {
    let mut num = itoa::Buffer::new();
    out.push_str(num.format(point.x));
    out.push(FIELD_SEPARATOR);
    out.push_str(num.format(point.y));
    out.push(FIELD_SEPARATOR);
    out.push(cell.glyph);
    out.push(FIELD_SEPARATOR);
    out.push_str(num.format(cell.color.index()));
}

pub fn parse_record(line: &str) -> Result<(Point, Cell), RecordError> {
    let fields: SmallVec<[&str; FIELD_COUNT]> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    }

    let x = parse_coordinate("x", fields[0])?;
    let y = parse_coordinate("y", fields[1])?;

    let mut chars = fields[2].chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(glyph), None) => glyph,
        _ => {
            return Err(RecordError::Glyph {
                value: fields[2].to_owned(),
            })
        }
    };

    let color = fields[3]
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(PaletteColor::from_index)
        .ok_or_else(|| RecordError::ColorIndex {
            value: fields[3].to_owned(),
        })?;

    Ok((Point::new(x, y), Cell::new(glyph, color)))
}

fn parse_coordinate(axis: &'static str, raw: &str) -> Result<u16, RecordError> {
    raw.trim().parse::<u16>().map_err(|_| RecordError::Coordinate {
        axis,
        value: raw.to_owned(),
    })
}

/// Encodes cells as file lines, ordered by row then column.
pub fn encode_lines(cells: impl IntoIterator<Item = (Point, Cell)>) -> Vec<String> {
    let mut cells: Vec<_> = cells.into_iter().collect();
    cells.sort_unstable_by_key(|(point, _)| point.row_major());

    cells
        .into_iter()
        .map(|(point, cell)| {
            let mut line = String::with_capacity(16);
            encode_record(point, cell, &mut line);
            line
        })
        .collect()
}

/// Parses file lines. Blank lines are not records and are ignored under both policies.
pub fn decode_lines<I, S>(lines: I, policy: ParsePolicy) -> Result<LoadedDrawing, MalformedLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    decode_stored_lines(lines.into_iter().map(Ok::<S, FromUtf8Error>), policy)
}

/// Like [`decode_lines`], but a line that was not valid UTF-8 counts as one malformed record.
pub fn decode_stored_lines<I, S>(
    lines: I,
    policy: ParsePolicy,
) -> Result<LoadedDrawing, MalformedLine>
where
    I: IntoIterator<Item = Result<S, FromUtf8Error>>,
    S: AsRef<str>,
{
    let mut loaded = LoadedDrawing::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let (content, parsed) = match &line {
            Ok(text) => {
                let mut text = text.as_ref();
                if idx == 0 {
                    text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
                }
                if text.trim().is_empty() {
                    continue;
                }
                (Cow::Borrowed(text), parse_record(text))
            }
            Err(err) => (
                String::from_utf8_lossy(err.as_bytes()),
                Err(RecordError::Encoding {
                    valid_up_to: err.utf8_error().valid_up_to(),
                }),
            ),
        };

        match parsed {
            Ok(record) => loaded.cells.push(record),
            Err(source) => match policy {
                ParsePolicy::Lenient => {
                    tracing::warn!(line = idx + 1, error = %source, "skipping malformed record");
                    loaded.skipped += 1;
                }
                ParsePolicy::Strict => {
                    return Err(MalformedLine {
                        line: idx + 1,
                        content: content.into_owned(),
                        source,
                    });
                }
            },
        }
    }

    Ok(loaded)
}

/// Writes `cells` to `path`, replacing whatever was there.
pub fn save<F>(
    fs: &F,
    path: &Path,
    cells: impl IntoIterator<Item = (Point, Cell)>,
) -> Result<(), StoreError>
where
    F: DrawingFs + ?Sized,
{
    let lines = encode_lines(cells);
    fs.write_lines(path, &lines).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), records = lines.len(), "saved drawing");
    Ok(())
}

/// Reads the records stored at `path`.
pub fn load<F>(fs: &F, path: &Path, policy: ParsePolicy) -> Result<LoadedDrawing, StoreError>
where
    F: DrawingFs + ?Sized,
{
    if !fs.exists(path) {
        return Err(StoreError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let lines = fs.read_lines(path).map_err(|source| StoreError::from_io(path, source))?;
    let loaded =
        decode_stored_lines(lines, policy).map_err(|malformed| StoreError::MalformedRecord {
            path: path.to_path_buf(),
            line: malformed.line,
            content: malformed.content,
            source: malformed.source,
        })?;

    tracing::info!(
        path = %path.display(),
        records = loaded.cells.len(),
        skipped = loaded.skipped,
        "loaded drawing"
    );
    Ok(loaded)
}
