#![cfg(feature = "std")]

//! Stderr logger for the binaries. Stdout stays reserved for boards and the
//! simulator's JSON summary.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no level is given on the command line.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

/// Pick the log level: an explicit `flag` wins, then `env`, then `info`.
/// Unparsable values fall through to the next source.
pub fn resolve_level(flag: Option<&str>, env: Option<&str>) -> LevelFilter {
    flag.and_then(|l| l.parse().ok())
        .or_else(|| env.and_then(|l| l.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level chosen from `flag` and
/// [`LOG_ENV`]. Calling it again keeps the first logger.
pub fn init_logging(flag: Option<&str>) -> LevelFilter {
    let env_level = env::var(LOG_ENV).ok();
    let level = resolve_level(flag, env_level.as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
