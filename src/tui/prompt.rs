// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press did to the file-name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PromptInput {
    Editing,
    Submit(String),
    Cancel,
    Quit,
}

/// Single-line text input with a char-indexed cursor.
#[derive(Debug, Default, Clone)]
pub(crate) struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars from the start of the line.
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> PromptInput {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => PromptInput::Quit,
                KeyCode::Char('u') | KeyCode::Char('U') => {
                    self.clear();
                    PromptInput::Editing
                }
                _ => PromptInput::Editing,
            };
        }

        match key.code {
            KeyCode::Enter => return PromptInput::Submit(self.text.clone()),
            KeyCode::Esc => return PromptInput::Cancel,
            KeyCode::Char(ch) if !ch.is_control() => self.insert(ch),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at_cursor();
                }
            }
            KeyCode::Delete => self.remove_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => {}
        }
        PromptInput::Editing
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    fn remove_at_cursor(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }
}
