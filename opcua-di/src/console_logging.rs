// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Console logger for samples and tools, enabled with the `console-logging` feature.

use std::{
    fmt,
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
};

use env_logger::{fmt::Color, Builder, Env};

static INITIALISED: AtomicBool = AtomicBool::new(false);

struct Pad<T> {
    value: T,
    width: usize,
}

impl<T: fmt::Display> fmt::Display for Pad<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{: <width$}", self.value, width = self.width)
    }
}

/// Initialise the logger. Filters are read from `RUST_OPCUA_LOG` instead of
/// `RUST_LOG`, and default to `info`. Only the first call has any effect.
pub fn init() {
    if INITIALISED.swap(true, Ordering::Relaxed) {
        return;
    }

    // RUST_LOG is shared with cargo and other tools.
    let mut builder = Builder::from_env(Env::default().filter_or("RUST_OPCUA_LOG", "info"));
    builder.format(|f, record| {
        let time = f.timestamp_millis();

        let mut style = f.style();
        match record.metadata().level() {
            log::Level::Error => {
                style.set_color(Color::White);
                style.set_bg(Color::Red);
            }
            log::Level::Warn => {
                style.set_color(Color::Yellow);
            }
            log::Level::Info => {
                style.set_color(Color::Cyan);
            }
            log::Level::Debug => {
                style.set_color(Color::Green);
            }
            log::Level::Trace => {
                style.set_color(Color::Ansi256(8));
            }
        }
        let level = style.value(Pad {
            value: record.level(),
            width: 5,
        });

        let mut style = f.style();
        let target = style.set_bold(true).value(Pad {
            value: record.target(),
            width: 30,
        });

        writeln!(f, "{} {} {} {}", time, level, target, record.args())
    });
    // Another logger may already be installed by the application.
    if builder.try_init().is_ok() {
        log::info!(
            "Logging is enabled, use RUST_OPCUA_LOG environment variable to control filtering, logging level"
        );
    }
}
