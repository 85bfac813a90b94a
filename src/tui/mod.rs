// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The ratatui + crossterm front end: turns key presses into session events, and draws the
//! session into a frame through [`Surface`].

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event as TermEvent, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{buffer::Buffer, prelude::*};

use crate::config::Config;
use crate::model::{PaletteColor, Viewport};
use crate::session::{DrawingSession, Event, Mode, Surface, Transition};
use crate::store::DrawingFs;

mod chrome;
mod keymap;
mod prompt;
mod theme;

use prompt::{LineEditor, PromptInput};
pub use theme::ThemeError;
use theme::TuiTheme;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive drawing tool until the user quits.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let session = DrawingSession::new(config.drawing_folder(), Viewport::new(0, 0))
        .with_reload_after_save(config.reload_after_save);

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(session, theme);
    tracing::info!(dir = %config.drawings_dir.display(), "terminal session started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    tracing::info!("terminal session ended");
    Ok(())
}

struct App<F: DrawingFs> {
    session: DrawingSession<F>,
    editor: LineEditor,
    theme: TuiTheme,
    should_quit: bool,
}

impl<F: DrawingFs> App<F> {
    fn new(session: DrawingSession<F>, theme: TuiTheme) -> Self {
        Self {
            session,
            editor: LineEditor::default(),
            theme,
            should_quit: false,
        }
    }

    fn prompt_open(&self) -> bool {
        self.session.mode() == Mode::Menu && self.session.menu().prompt().is_some()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let event = if self.prompt_open() {
            match self.editor.handle_key(key) {
                PromptInput::Editing => None,
                PromptInput::Submit(text) => Some(Event::SubmitText(text)),
                PromptInput::Cancel => Some(Event::Cancel),
                PromptInput::Quit => Some(Event::Quit),
            }
        } else {
            keymap::map_key(key, self.session.mode())
        };

        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: Event) {
        if self.session.handle(event) == Transition::Quit {
            self.should_quit = true;
        }
        // A rejected name leaves the prompt open with its text for correction.
        if !self.prompt_open() {
            self.editor.clear();
        }
    }
}

fn draw<F: DrawingFs>(frame: &mut Frame<'_>, app: &mut App<F>) {
    let (canvas_area, footer_area) = chrome::split_frame(frame.area());
    app.session
        .set_viewport(Viewport::new(canvas_area.width, canvas_area.height));

    let cursor = {
        let mut surface = BufferSurface::new(frame.buffer_mut(), canvas_area, &app.theme);
        app.session.render(&mut surface);
        surface.visible_cursor()
    };

    if app.session.mode() == Mode::Menu {
        chrome::render_menu(frame, &app.session, &app.theme, canvas_area);
    }

    let prompt_cursor = match app.session.menu().prompt() {
        Some(action) if app.session.mode() == Mode::Menu => {
            chrome::render_prompt(frame, action, &app.editor, &app.theme, canvas_area)
        }
        _ => None,
    };

    frame.render_widget(chrome::footer_line(&app.session, &app.theme), footer_area);

    if let Some(position) = prompt_cursor.or(cursor) {
        frame.set_cursor_position(position);
    }
}

/// [`Surface`] over the canvas region of a ratatui buffer.
struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    theme: &'a TuiTheme,
    cursor: Position,
    cursor_visible: bool,
}

impl<'a> BufferSurface<'a> {
    fn new(buf: &'a mut Buffer, area: Rect, theme: &'a TuiTheme) -> Self {
        Self {
            buf,
            area,
            theme,
            cursor: Position::new(area.x, area.y),
            cursor_visible: false,
        }
    }

    fn visible_cursor(&self) -> Option<Position> {
        self.cursor_visible.then_some(self.cursor)
    }

    fn absolute(&self, x: u16, y: u16) -> Option<Position> {
        (x < self.area.width && y < self.area.height)
            .then(|| Position::new(self.area.x + x, self.area.y + y))
    }
}

impl Surface for BufferSurface<'_> {
    fn set_cell_glyph(&mut self, x: u16, y: u16, glyph: char, color: PaletteColor) {
        let Some(position) = self.absolute(x, y) else {
            return;
        };
        let style = self.theme.cell_style(color);
        if let Some(cell) = self.buf.cell_mut(position) {
            cell.set_char(glyph).set_style(style);
        }
    }

    fn clear_viewport(&mut self) {
        for position in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(position) {
                cell.reset();
            }
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn move_cursor_to(&mut self, x: u16, y: u16) {
        if let Some(position) = self.absolute(x, y) {
            self.cursor = position;
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}


#[cfg(test)]
mod tests;
