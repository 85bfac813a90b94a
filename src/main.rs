// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Glyphpad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Glyphpad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Glyphpad entrypoint.
//!
//! Takes no arguments; everything is configured through `GLYPHPAD_*` environment variables or a
//! `glyphpad.json` file.

use std::error::Error;

use glyphpad::config::Config;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program}\n\nGlyphpad takes no arguments. Configure it with environment variables:\n  GLYPHPAD_DIR                drawings directory (default: .)\n  GLYPHPAD_CONFIG             JSON config file (default: <dir>/glyphpad.json if present)\n  GLYPHPAD_PARSE_POLICY       lenient | strict\n  GLYPHPAD_EXTENSION          file extension (default: txt)\n  GLYPHPAD_RELOAD_AFTER_SAVE  1 | 0\n  GLYPHPAD_DURABLE_WRITES     1 | 0\n  GLYPHPAD_LOG                tracing filter (default: info)\n  GLYPHPAD_LOG_FILE           log file; logging is off when unset\n  GLYPHPAD_PALETTE            16 comma-separated #RRGGBB colors"
    );
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "glyphpad".to_owned());
        if args.next().is_some() {
            print_usage(&program);
            std::process::exit(2);
        }

        let config = Config::from_env()?;
        glyphpad::logging::init(&config)?;
        tracing::debug!(?config, "configuration resolved");

        glyphpad::tui::run(&config)
    })();

    if let Err(err) = result {
        tracing::error!(%err, "glyphpad exited with an error");
        eprintln!("glyphpad: {err}");
        std::process::exit(1);
    }
}
