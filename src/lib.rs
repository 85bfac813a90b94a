// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Glyphpad: a character-grid drawing tool for the terminal.
//!
//! The core (`model`, `session`, `store`) has no terminal dependency; `tui` is the only module
//! that talks to crossterm.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;
pub mod tui;
