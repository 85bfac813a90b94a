// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Footer, menu and prompt chrome drawn around the canvas.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::prompt::LineEditor;
use super::theme::TuiTheme;
use crate::model::Pen;
use crate::session::{DrawingSession, Mode, MenuOption, PromptAction};
use crate::store::DrawingFs;

const MENU_TITLE: &str = " Glyphpad ";
const MENU_WIDTH: u16 = 26;
const PROMPT_WIDTH: u16 = 44;

/// Splits the frame into the drawable canvas and the one-line footer.
pub(super) fn split_frame(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (rows[0], rows[1])
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub(super) fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub(super) fn footer_line<F: DrawingFs>(
    session: &DrawingSession<F>,
    theme: &TuiTheme,
) -> Line<'static> {
    if let Some(status) = session.status() {
        return Line::from(Span::styled(
            format!(" {}", status.message),
            theme.status_style(status.kind),
        ));
    }

    let mut spans = Vec::<Span<'static>>::new();
    match session.mode() {
        Mode::Drawing => {
            let color = session.active_color();
            spans.push(Span::styled(" ■ ", theme.cell_style(color)));
            spans.push(Span::styled(color.name(), theme.footer_label_style()));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                session.brush().glyph().to_string(),
                theme.cell_style(color),
            ));
            let pen = match session.pen() {
                Pen::Up => " pen↑",
                Pen::Down => " pen↓",
            };
            spans.push(Span::styled(pen, theme.footer_label_style()));
            let pos = session.cursor();
            spans.push(Span::styled(
                format!("  {},{}", pos.x, pos.y),
                theme.footer_label_style(),
            ));
            push_footer_entry(&mut spans, theme, "MENU", "Esc");
            push_footer_entry(&mut spans, theme, "QUIT", "^Q");
        }
        Mode::Menu if session.menu().prompt().is_some() => {
            push_footer_entry(&mut spans, theme, "OK", "Enter");
            push_footer_entry(&mut spans, theme, "BACK", "Esc");
        }
        Mode::Menu => {
            push_footer_entry(&mut spans, theme, "SELECT", "↑↓");
            push_footer_entry(&mut spans, theme, "OK", "Enter");
            if session.can_resume() {
                push_footer_entry(&mut spans, theme, "RESUME", "Esc");
            }
            push_footer_entry(&mut spans, theme, "QUIT", "^Q");
        }
    }
    Line::from(spans)
}

fn push_footer_entry(
    spans: &mut Vec<Span<'static>>,
    theme: &TuiTheme,
    label: &str,
    key: &str,
) {
    spans.push(Span::styled(" | ", theme.footer_label_style()));
    spans.push(Span::styled(format!("{label} "), theme.footer_label_style()));
    spans.push(Span::styled(key.to_owned(), theme.footer_key_style()));
}

pub(super) fn render_menu<F: DrawingFs>(
    frame: &mut Frame<'_>,
    session: &DrawingSession<F>,
    theme: &TuiTheme,
    area: Rect,
) {
    let height = MenuOption::ALL.len() as u16 + 2;
    let popup = popup_rect(MENU_WIDTH, height, area);
    frame.render_widget(Clear, popup);

    let resumable = session.can_resume();
    let items: Vec<ListItem<'static>> = MenuOption::ALL
        .iter()
        .map(|option| ListItem::new(format!(" {}", option.label(resumable))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(MENU_TITLE)
                .border_style(theme.menu_border_style()),
        )
        .highlight_style(theme.selection_style());

    let mut state = ListState::default();
    state.select(Some(session.menu().selected_index()));
    frame.render_stateful_widget(list, popup, &mut state);
}

/// Draws the file-name prompt and returns where the text cursor belongs.
pub(super) fn render_prompt(
    frame: &mut Frame<'_>,
    action: PromptAction,
    editor: &LineEditor,
    theme: &TuiTheme,
    area: Rect,
) -> Option<Position> {
    let popup = popup_rect(PROMPT_WIDTH, 3, area);
    if popup.width < 3 || popup.height < 3 {
        return None;
    }
    frame.render_widget(Clear, popup);

    let inner_width = usize::from(popup.width - 2);
    let scroll = editor.cursor().saturating_sub(inner_width.saturating_sub(1));
    let visible: String = editor.text().chars().skip(scroll).collect();
    let prompt = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", action.title()))
            .border_style(theme.menu_border_style()),
    );
    frame.render_widget(prompt, popup);

    let column = u16::try_from(editor.cursor() - scroll).unwrap_or(u16::MAX);
    Some(Position::new(
        popup.x + 1 + column.min(popup.width - 3),
        popup.y + 1,
    ))
}
