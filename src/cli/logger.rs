// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stderr logger for the `log` facade.
//!
//! Level resolution, first match wins:
//! - `-q` → `error`
//! - `-v` / `-vv` → `debug` / `trace`
//! - `SLOTCHAIN_LOG` (`off|error|warn|info|debug|trace`)
//! - `warn`
//!
//! Level badges take their colors from the display theme and drop them when
//! stderr is not a terminal or `NO_COLOR` is set.

use log::{LevelFilter, Log, Metadata, Record};

use super::display::{self, BOLD, RESET};

pub const LOG_ENV: &str = "SLOTCHAIN_LOG";

struct StderrLogger {
    level: LevelFilter,
    colors: bool,
}

impl StderrLogger {
    fn badge(&self, level: log::Level) -> String {
        let text = format!("{:<5}", level);
        if !self.colors {
            return text;
        }
        let color = match level {
            log::Level::Error => display::RED(),
            log::Level::Warn => display::YELLOW(),
            log::Level::Info => display::GREEN(),
            log::Level::Debug => display::BLUE(),
            log::Level::Trace => display::GRAY(),
        };
        format!("{}{}{}{}", BOLD, color, text, RESET)
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "{} {}: {}",
            self.badge(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Resolve the log level from the CLI flags and the `SLOTCHAIN_LOG` value.
pub fn level_from(verbose: u8, quiet: bool, env: Option<&str>) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => {}
        1 => return LevelFilter::Debug,
        _ => return LevelFilter::Trace,
    }
    env.and_then(|value| value.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    let logger = StderrLogger {
        level,
        colors: display::colors_for(atty::Stream::Stderr),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_beat_environment() {
        assert_eq!(level_from(0, true, Some("trace")), LevelFilter::Error);
        assert_eq!(level_from(1, false, Some("error")), LevelFilter::Debug);
        assert_eq!(level_from(3, false, None), LevelFilter::Trace);
    }

    #[test]
    fn environment_is_parsed_case_insensitively() {
        assert_eq!(level_from(0, false, Some("INFO")), LevelFilter::Info);
        assert_eq!(level_from(0, false, Some(" debug ")), LevelFilter::Debug);
        assert_eq!(level_from(0, false, Some("off")), LevelFilter::Off);
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(level_from(0, false, None), LevelFilter::Warn);
        assert_eq!(level_from(0, false, Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn plain_badges_are_padded() {
        let logger = StderrLogger {
            level: LevelFilter::Trace,
            colors: false,
        };
        assert_eq!(logger.badge(log::Level::Warn), "WARN ");
        assert_eq!(logger.badge(log::Level::Error), "ERROR");
    }
}
