// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Load,
    Save,
    Delete,
    StartOrResume,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Load,
        MenuOption::Save,
        MenuOption::Delete,
        MenuOption::StartOrResume,
        MenuOption::Quit,
    ];

    /// `resumable` is true when the menu was opened from a drawing in progress.
    pub const fn label(self, resumable: bool) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::Save => "Save",
            Self::Delete => "Delete",
            Self::StartOrResume if resumable => "Resume Drawing",
            Self::StartOrResume => "Start Drawing",
            Self::Quit => "Quit",
        }
    }

    /// Options that need a file name before they can run.
    pub const fn prompt_action(self) -> Option<PromptAction> {
        match self {
            Self::Load => Some(PromptAction::Load),
            Self::Save => Some(PromptAction::Save),
            Self::Delete => Some(PromptAction::Delete),
            Self::StartOrResume | Self::Quit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptAction {
    Load,
    Save,
    Delete,
}

impl PromptAction {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Load => "Load drawing",
            Self::Save => "Save drawing as",
            Self::Delete => "Delete drawing",
        }
    }
}

/// Highlighted option plus the file-name prompt, if one is open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Menu {
    selected: usize,
    prompt: Option<PromptAction>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first option with no prompt; done every time the menu is entered.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.prompt = None;
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_option(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    /// Moves the highlight by `direction`, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let count = MenuOption::ALL.len() as i64;
        let next = (self.selected as i64 + i64::from(direction)).rem_euclid(count);
        self.selected = next as usize;
    }

    pub fn prompt(&self) -> Option<PromptAction> {
        self.prompt
    }

    pub fn open_prompt(&mut self, action: PromptAction) {
        self.prompt = Some(action);
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }
}
