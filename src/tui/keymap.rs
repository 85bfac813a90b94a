// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keyboard to [`Event`] translation.
//!
//! Only used while no file-name prompt is open; prompt keys go to the line editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::{Event, Mode};

pub(crate) fn map_key(key: KeyEvent, mode: Mode) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control(key.code, mode);
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match mode {
        Mode::Drawing => map_drawing(key.code),
        Mode::Menu => map_menu(key.code),
    }
}

fn map_control(code: KeyCode, mode: Mode) -> Option<Event> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Event::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') if mode == Mode::Drawing => {
            Some(Event::ClearCanvas)
        }
        _ => None,
    }
}

fn map_drawing(code: KeyCode) -> Option<Event> {
    let event = match code {
        KeyCode::Up => Event::MoveUp,
        KeyCode::Down => Event::MoveDown,
        KeyCode::Left => Event::MoveLeft,
        KeyCode::Right => Event::MoveRight,
        KeyCode::Backspace | KeyCode::Delete => Event::Erase,
        KeyCode::Tab => Event::TogglePen,
        KeyCode::Esc => Event::OpenMenu,
        KeyCode::F(slot @ 1..=4) => Event::SelectBrush(slot),
        KeyCode::Char(' ') => Event::Place,
        KeyCode::Char('0') => Event::ResetColor,
        KeyCode::Char('+') => Event::AdjustBrightness(1),
        KeyCode::Char('-') => Event::AdjustBrightness(-1),
        KeyCode::Char(digit @ '1'..='9') => Event::SelectColor(digit as u8 - b'0'),
        KeyCode::Char(glyph) => Event::Stamp(glyph),
        _ => return None,
    };
    Some(event)
}

fn map_menu(code: KeyCode) -> Option<Event> {
    match code {
        KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Enter => Some(Event::ConfirmSelection),
        KeyCode::Esc => Some(Event::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::map_key;
    use crate::session::{Event, Mode};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[rstest]
    #[case(KeyCode::Up, Event::MoveUp)]
    #[case(KeyCode::Down, Event::MoveDown)]
    #[case(KeyCode::Left, Event::MoveLeft)]
    #[case(KeyCode::Right, Event::MoveRight)]
    #[case(KeyCode::Char(' '), Event::Place)]
    #[case(KeyCode::Char('x'), Event::Stamp('x'))]
    #[case(KeyCode::Char('#'), Event::Stamp('#'))]
    #[case(KeyCode::Backspace, Event::Erase)]
    #[case(KeyCode::Delete, Event::Erase)]
    #[case(KeyCode::Char('1'), Event::SelectColor(1))]
    #[case(KeyCode::Char('9'), Event::SelectColor(9))]
    #[case(KeyCode::Char('0'), Event::ResetColor)]
    #[case(KeyCode::Char('+'), Event::AdjustBrightness(1))]
    #[case(KeyCode::Char('-'), Event::AdjustBrightness(-1))]
    #[case(KeyCode::F(1), Event::SelectBrush(1))]
    #[case(KeyCode::F(4), Event::SelectBrush(4))]
    #[case(KeyCode::Tab, Event::TogglePen)]
    #[case(KeyCode::Esc, Event::OpenMenu)]
    fn drawing_keys(#[case] code: KeyCode, #[case] expected: Event) {
        assert_eq!(map_key(key(code), Mode::Drawing), Some(expected));
    }

    #[rstest]
    #[case(KeyCode::Up, Some(Event::MoveUp))]
    #[case(KeyCode::Down, Some(Event::MoveDown))]
    #[case(KeyCode::Enter, Some(Event::ConfirmSelection))]
    #[case(KeyCode::Esc, Some(Event::Cancel))]
    #[case(KeyCode::Left, None)]
    #[case(KeyCode::Char(' '), None)]
    #[case(KeyCode::Char('1'), None)]
    fn menu_keys(#[case] code: KeyCode, #[case] expected: Option<Event>) {
        assert_eq!(map_key(key(code), Mode::Menu), expected);
    }

    #[test]
    fn uppercase_letters_stamp_with_shift_held() {
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(map_key(shifted, Mode::Drawing), Some(Event::Stamp('A')));
    }

    #[test]
    fn control_chords() {
        assert_eq!(map_key(ctrl('q'), Mode::Drawing), Some(Event::Quit));
        assert_eq!(map_key(ctrl('q'), Mode::Menu), Some(Event::Quit));
        assert_eq!(map_key(ctrl('n'), Mode::Drawing), Some(Event::ClearCanvas));
        assert_eq!(map_key(ctrl('n'), Mode::Menu), None);
        assert_eq!(map_key(ctrl('x'), Mode::Drawing), None);
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(map_key(key(KeyCode::F(5)), Mode::Drawing), None);
        assert_eq!(map_key(key(KeyCode::Enter), Mode::Drawing), None);
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(map_key(alt, Mode::Drawing), None);
    }
}
