/*
 * ==========================================================================
 * LOXFRONT - Scanner & Parser for Lox Expressions
 * ==========================================================================
 *
 * File:      logger.rs
 * Purpose:   stderr backend for the `log` facade, used by the binary.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/loxfront
 *
 * License:
 * This file is part of the LOXFRONT project.
 *
 * LOXFRONT is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::str::FromStr;

/// Environment variable consulted when no level is given on the
/// command line.
pub const LOG_ENV_VAR: &str = "LOXFRONT_LOG";

/// Writes every enabled record to stderr as
/// `[<local timestamp> LEVEL target] message`.
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Formats a record without writing it.
    pub fn format(&self, record: &Record) -> String {
        format!(
            "[{} {:<5} {}] {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Installs `StderrLogger` as the global logger.
///
/// Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Picks the log level: an explicit value wins, then `LOXFRONT_LOG`,
/// then `default`. Unparseable values fall through to the next source.
pub fn resolve_level(explicit: Option<&str>, default: LevelFilter) -> LevelFilter {
    explicit
        .and_then(|s| LevelFilter::from_str(s).ok())
        .or_else(|| {
            std::env::var(LOG_ENV_VAR)
                .ok()
                .and_then(|s| LevelFilter::from_str(&s).ok())
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn filters_by_level() {
        let logger = StderrLogger::new(LevelFilter::Info);

        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn formats_level_target_and_message() {
        let logger = StderrLogger::new(LevelFilter::Trace);
        let line = logger.format(
            &Record::builder()
                .args(format_args!("scanned 4 tokens"))
                .level(Level::Debug)
                .target("loxfront::lexer::scanner")
                .build(),
        );

        assert!(line.starts_with('['));
        assert!(line.ends_with("DEBUG loxfront::lexer::scanner] scanned 4 tokens"));
    }

    #[test]
    fn explicit_level_wins() {
        assert_eq!(resolve_level(Some("trace"), LevelFilter::Warn), LevelFilter::Trace);
        assert_eq!(resolve_level(Some("DEBUG"), LevelFilter::Warn), LevelFilter::Debug);
    }
}
