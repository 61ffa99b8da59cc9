#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Writes records to stderr so stdout stays clean for grids and JSON.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level used when `WORDCROSS_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Initialize logging with a level taken from the `WORDCROSS_LOG` environment variable.
pub fn init_logging() {
    let level = env::var("WORDCROSS_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
