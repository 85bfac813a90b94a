// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::testing::HeadlessTui;
use crate::model::{PaletteColor, Point};
use crate::session::{Mode, PromptAction};
use crossterm::event::KeyCode;
use ratatui::style::Color;
use rstest::{fixture, rstest};
use std::path::Path;

#[fixture]
fn tui() -> HeadlessTui {
    HeadlessTui::new(40, 12)
}

/// Menu starts on Load; Start Drawing is three rows down.
fn start_drawing(tui: &mut HeadlessTui) {
    tui.render();
    for _ in 0..3 {
        tui.press(KeyCode::Down);
    }
    tui.press(KeyCode::Enter);
    assert_eq!(tui.session().mode(), Mode::Drawing);
}

fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[rstest]
fn initial_frame_shows_menu(mut tui: HeadlessTui) {
    let rows = tui.render();
    assert!(screen_contains(&rows, "Glyphpad"));
    assert!(screen_contains(&rows, "Load"));
    assert!(screen_contains(&rows, "Start Drawing"));
    assert!(screen_contains(&rows, "Quit"));
}

#[rstest]
fn viewport_follows_frame_minus_footer(mut tui: HeadlessTui) {
    tui.render();
    let viewport = tui.session().viewport();
    assert_eq!((viewport.width(), viewport.height()), (40, 11));
}

#[rstest]
fn placed_glyphs_show_up_in_the_frame(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press(KeyCode::Right);
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Char(' '));
    tui.type_str("hi");

    let rows = tui.render();
    assert!(rows[1].starts_with(" █hi"), "row 1: {:?}", rows[1]);
    assert_eq!(tui.session().cursor(), Point::new(4, 1));
}

#[rstest]
fn glyph_color_follows_active_color(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press(KeyCode::Char('2'));
    tui.press(KeyCode::Char(' '));
    tui.render();

    assert_eq!(tui.session().active_color(), PaletteColor::Red);
    assert_eq!(tui.cell_fg(0, 0), Some(Color::LightRed));
}

#[rstest]
fn erase_clears_the_cell_on_screen(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press(KeyCode::Char(' '));
    tui.press(KeyCode::Left);
    tui.press(KeyCode::Backspace);

    let rows = tui.render();
    assert!(rows[0].starts_with("  "), "row 0: {:?}", rows[0]);
    assert!(tui.session().canvas().is_empty());
}

#[rstest]
fn footer_shows_color_and_position_while_drawing(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press(KeyCode::Down);
    let rows = tui.render();
    let footer = &rows[11];
    assert!(footer.contains("white"), "footer: {footer:?}");
    assert!(footer.contains("█ pen↑"), "footer: {footer:?}");
    assert!(footer.contains("0,1"), "footer: {footer:?}");
}

#[rstest]
fn escape_opens_menu_with_resume_label(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press(KeyCode::Esc);
    let rows = tui.render();
    assert_eq!(tui.session().mode(), Mode::Menu);
    assert!(screen_contains(&rows, "Resume Drawing"));

    tui.press(KeyCode::Esc);
    assert_eq!(tui.session().mode(), Mode::Drawing);
}

#[rstest]
fn save_prompt_writes_through_the_folder(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press(KeyCode::Char('2'));
    tui.press(KeyCode::Char(' '));
    tui.press(KeyCode::Esc);
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Enter);
    assert_eq!(tui.session().menu().prompt(), Some(PromptAction::Save));

    let rows = tui.render();
    assert!(screen_contains(&rows, "Save drawing as"));

    tui.type_str("pic");
    assert_eq!(tui.editor_text(), "pic");
    tui.press(KeyCode::Enter);

    assert_eq!(tui.session().mode(), Mode::Drawing);
    assert_eq!(tui.editor_text(), "");
    let lines = tui
        .session()
        .folder()
        .fs()
        .lines(Path::new("drawings/pic.txt"))
        .expect("saved file");
    assert_eq!(lines, vec!["0,0,█,12".to_owned()]);

    let rows = tui.render();
    assert!(rows[11].contains("Saved pic.txt"), "footer: {:?}", rows[11]);
}

#[rstest]
fn prompt_typing_does_not_draw(mut tui: HeadlessTui) {
    tui.render();
    tui.press(KeyCode::Enter);
    assert_eq!(tui.session().menu().prompt(), Some(PromptAction::Load));

    tui.type_str("1 x");
    assert_eq!(tui.editor_text(), "1 x");
    assert!(tui.session().canvas().is_empty());
    assert_eq!(tui.session().mode(), Mode::Menu);
}

#[rstest]
fn invalid_name_keeps_prompt_text(mut tui: HeadlessTui) {
    tui.render();
    tui.press(KeyCode::Enter);
    tui.type_str("a/b");
    tui.press(KeyCode::Enter);

    assert_eq!(tui.session().menu().prompt(), Some(PromptAction::Load));
    assert_eq!(tui.editor_text(), "a/b");
}

#[rstest]
fn escape_in_prompt_discards_text(mut tui: HeadlessTui) {
    tui.render();
    tui.press(KeyCode::Enter);
    tui.type_str("draft");
    tui.press(KeyCode::Esc);

    assert_eq!(tui.session().menu().prompt(), None);
    assert_eq!(tui.editor_text(), "");
    assert_eq!(tui.session().mode(), Mode::Menu);
}

#[rstest]
fn missing_load_reports_in_footer(mut tui: HeadlessTui) {
    tui.render();
    tui.press(KeyCode::Enter);
    tui.type_str("ghost");
    tui.press(KeyCode::Enter);

    let rows = tui.render();
    assert!(
        rows[11].contains("File not found: ghost.txt"),
        "footer: {:?}",
        rows[11]
    );
}

#[rstest]
fn ctrl_q_quits_from_drawing_and_prompt(mut tui: HeadlessTui) {
    start_drawing(&mut tui);
    tui.press_ctrl('q');
    assert!(tui.should_quit());

    let mut prompting = HeadlessTui::new(40, 12);
    prompting.render();
    prompting.press(KeyCode::Enter);
    prompting.press_ctrl('q');
    assert!(prompting.should_quit());
}

#[rstest]
fn quit_option_ends_the_loop(mut tui: HeadlessTui) {
    tui.render();
    tui.press(KeyCode::Up);
    tui.press(KeyCode::Enter);
    assert!(tui.should_quit());
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut tui = HeadlessTui::new(3, 1);
    tui.render();
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Enter);
    tui.press(KeyCode::Char(' '));
    tui.render();
    assert!(tui.session().canvas().is_empty());
}
