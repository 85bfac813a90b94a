// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing session: the input state machine.
//!
//! A [`DrawingSession`] owns the canvas, cursor, active color and mode. The terminal layer feeds
//! it one [`Event`] at a time through [`DrawingSession::handle`] and draws it through the
//! [`Surface`] capability. Nothing here touches the terminal directly.

use crate::model::{
    Brush, Canvas, Cursor, PaletteColor, Pen, Point, Viewport, DEFAULT_COLOR, INITIAL_COLOR,
};
use crate::store::{DrawingFolder, DrawingFs, DrawingName, LocalFs, StoreError};

pub mod menu;

pub use menu::{Menu, MenuOption, PromptAction};

/// Abstract input, already decoupled from any keyboard API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Stamp the active brush and advance one column.
    Place,
    /// Stamp an explicit glyph and advance one column.
    Stamp(char),
    Erase,
    /// Digit 1..=9.
    SelectColor(u8),
    ResetColor,
    AdjustBrightness(i8),
    /// Brush slot 1..=4.
    SelectBrush(u8),
    TogglePen,
    ClearCanvas,
    OpenMenu,
    ConfirmSelection,
    Cancel,
    Quit,
    /// A completed line from the file-name prompt.
    SubmitText(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Drawing,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}

/// Rendering capability implemented by the platform layer.
pub trait Surface {
    fn set_cell_glyph(&mut self, x: u16, y: u16, glyph: char, color: PaletteColor);

    fn clear_viewport(&mut self);

    fn set_cursor_visible(&mut self, visible: bool);

    fn move_cursor_to(&mut self, x: u16, y: u16);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback for the user, replaced or cleared by the next event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct DrawingSession<F = LocalFs> {
    canvas: Canvas,
    cursor: Cursor,
    color: PaletteColor,
    brush: Brush,
    pen: Pen,
    mode: Mode,
    menu: Menu,
    viewport: Viewport,
    /// Canvas as it was when the menu was opened from drawing mode.
    scratch: Option<Canvas>,
    folder: DrawingFolder<F>,
    reload_after_save: bool,
    status: Option<Status>,
}

impl<F: DrawingFs> DrawingSession<F> {
    /// A session starts in the menu with an empty canvas.
    pub fn new(folder: DrawingFolder<F>, viewport: Viewport) -> Self {
        Self {
            canvas: Canvas::new(),
            cursor: Cursor::new(),
            color: INITIAL_COLOR,
            brush: Brush::default(),
            pen: Pen::default(),
            mode: Mode::Menu,
            menu: Menu::new(),
            viewport,
            scratch: None,
            folder,
            reload_after_save: false,
            status: None,
        }
    }

    /// Re-reads a drawing right after saving it, so the screen shows exactly what was written.
    pub fn with_reload_after_save(mut self, reload_after_save: bool) -> Self {
        self.reload_after_save = reload_after_save;
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn cursor(&self) -> Point {
        self.cursor.position()
    }

    pub fn active_color(&self) -> PaletteColor {
        self.color
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn folder(&self) -> &DrawingFolder<F> {
        &self.folder
    }

    /// True when the menu was opened from a drawing that can be resumed unchanged.
    pub fn can_resume(&self) -> bool {
        self.scratch.is_some()
    }

    /// Updates the viewport; called by the terminal layer once per poll.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.cursor.clamp_to(viewport);
    }

    pub fn handle(&mut self, event: Event) -> Transition {
        self.status = None;

        if event == Event::Quit {
            tracing::debug!(mode = ?self.mode, "quit requested");
            return Transition::Quit;
        }

        match self.mode {
            Mode::Drawing => {
                self.handle_drawing(event);
                Transition::Continue
            }
            Mode::Menu => self.handle_menu(event),
        }
    }

    /// Draws the canvas and cursor. Cells outside the viewport are left out.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear_viewport();
        for (point, cell) in self.canvas.cells() {
            if self.viewport.contains(point) {
                surface.set_cell_glyph(point.x, point.y, cell.glyph, cell.color);
            }
        }

        match self.mode {
            Mode::Drawing => {
                let pos = self.cursor.position();
                surface.move_cursor_to(pos.x, pos.y);
                surface.set_cursor_visible(true);
            }
            Mode::Menu => surface.set_cursor_visible(false),
        }
    }

    fn handle_drawing(&mut self, event: Event) {
        match event {
            Event::MoveUp => self.move_cursor(0, -1),
            Event::MoveDown => self.move_cursor(0, 1),
            Event::MoveLeft => self.move_cursor(-1, 0),
            Event::MoveRight => self.move_cursor(1, 0),
            Event::Place => self.place_and_advance(self.brush.glyph()),
            Event::Stamp(glyph) => {
                if is_storable_glyph(glyph) {
                    self.place_and_advance(glyph);
                }
            }
            Event::Erase => {
                let pos = self.cursor.position();
                self.canvas.erase(pos.x, pos.y);
            }
            Event::SelectColor(digit) => {
                if let Some(color) = PaletteColor::from_digit(digit) {
                    self.color = color;
                }
            }
            Event::ResetColor => self.color = DEFAULT_COLOR,
            Event::AdjustBrightness(direction) => {
                self.color = self.color.adjust_brightness(direction);
            }
            Event::SelectBrush(slot) => {
                if let Some(brush) = Brush::from_slot(slot) {
                    self.brush = brush;
                }
            }
            Event::TogglePen => self.pen = self.pen.toggled(),
            Event::ClearCanvas => {
                self.canvas.clear();
                self.status = Some(Status::info("Canvas cleared"));
            }
            Event::OpenMenu => {
                let snapshot = self.canvas.clone();
                self.enter_menu(Some(snapshot));
            }
            Event::ConfirmSelection | Event::Cancel | Event::Quit | Event::SubmitText(_) => {}
        }
    }

    fn handle_menu(&mut self, event: Event) -> Transition {
        if let Some(action) = self.menu.prompt() {
            match event {
                Event::SubmitText(text) => self.submit_prompt(action, &text),
                Event::Cancel => self.menu.close_prompt(),
                _ => {}
            }
            return Transition::Continue;
        }

        match event {
            Event::MoveUp => self.menu.move_selection(-1),
            Event::MoveDown => self.menu.move_selection(1),
            Event::ConfirmSelection => return self.confirm(),
            Event::Cancel | Event::OpenMenu => {
                if self.scratch.is_some() {
                    self.resume_or_start();
                }
            }
            _ => {}
        }
        Transition::Continue
    }

    fn confirm(&mut self) -> Transition {
        let option = self.menu.selected_option();
        tracing::debug!(?option, "menu confirm");

        if let Some(action) = option.prompt_action() {
            self.menu.open_prompt(action);
            return Transition::Continue;
        }

        match option {
            MenuOption::StartOrResume => {
                self.resume_or_start();
                Transition::Continue
            }
            MenuOption::Quit => Transition::Quit,
            MenuOption::Load | MenuOption::Save | MenuOption::Delete => Transition::Continue,
        }
    }

    fn resume_or_start(&mut self) {
        match self.scratch.take() {
            Some(snapshot) => self.canvas = snapshot,
            None => self.canvas.clear(),
        }
        self.enter_drawing();
    }

    fn submit_prompt(&mut self, action: PromptAction, text: &str) {
        let name = match self.folder.name(text) {
            Ok(name) => name,
            Err(err) => {
                self.status = Some(Status::error(err.to_string()));
                return;
            }
        };
        self.menu.close_prompt();

        match action {
            PromptAction::Load => match self.folder.load(&name) {
                Ok(loaded) => {
                    let count = loaded.cells.len();
                    self.canvas.replace_with(loaded.cells);
                    self.enter_drawing();
                    self.status = Some(if loaded.skipped > 0 {
                        Status::info(format!(
                            "Loaded {name} ({count} cells, {} malformed lines skipped)",
                            loaded.skipped
                        ))
                    } else {
                        Status::info(format!("Loaded {name} ({count} cells)"))
                    });
                }
                Err(err) => self.report_store_error(&name.to_string(), err),
            },
            PromptAction::Save => match self.folder.save(&name, &self.canvas) {
                Ok(_) => {
                    if self.reload_after_save {
                        if let Err(err) = self.reload(&name) {
                            self.report_store_error(&name.to_string(), err);
                            return;
                        }
                    }
                    self.enter_drawing();
                    self.status = Some(Status::info(format!("Saved {name}")));
                }
                Err(err) => self.report_store_error(&name.to_string(), err),
            },
            PromptAction::Delete => match self.folder.delete(&name) {
                Ok(_) => self.status = Some(Status::info(format!("Deleted {name}"))),
                Err(err) => self.report_store_error(&name.to_string(), err),
            },
        }
    }

    fn reload(&mut self, name: &DrawingName) -> Result<(), StoreError> {
        let loaded = self.folder.load(name)?;
        self.canvas.replace_with(loaded.cells);
        Ok(())
    }

    fn report_store_error(&mut self, name: &str, err: StoreError) {
        tracing::warn!(name, error = %err, "drawing operation failed");
        let message = match &err {
            StoreError::FileNotFound { .. } => format!("File not found: {name}"),
            other => other.to_string(),
        };
        self.status = Some(Status::error(message));
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor.move_by(dx, dy, self.viewport);
        if self.pen.is_down() {
            self.place_at_cursor(self.brush.glyph());
        }
    }

    fn place_and_advance(&mut self, glyph: char) {
        self.place_at_cursor(glyph);
        self.cursor.move_by(1, 0, self.viewport);
    }

    fn place_at_cursor(&mut self, glyph: char) {
        if self.viewport.is_empty() {
            return;
        }
        let pos = self.cursor.position();
        debug_assert!(self.viewport.contains(pos), "cursor escaped the viewport");
        self.canvas.place(pos.x, pos.y, glyph, self.color);
    }

    fn enter_menu(&mut self, snapshot: Option<Canvas>) {
        tracing::debug!(resumable = snapshot.is_some(), "entering menu");
        self.mode = Mode::Menu;
        self.menu.reset();
        self.scratch = snapshot;
    }

    fn enter_drawing(&mut self) {
        tracing::debug!(cells = self.canvas.len(), "entering drawing mode");
        self.mode = Mode::Drawing;
        self.menu.reset();
        self.scratch = None;
        self.cursor.clamp_to(self.viewport);
    }
}

/// The file format has no escaping, so commas and control characters cannot be stored.
fn is_storable_glyph(glyph: char) -> bool {
    glyph != ',' && !glyph.is_control()
}
