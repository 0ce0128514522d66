use log::{Level, LevelFilter, Metadata, Record};
use std::io::IsTerminal;

/// Parse a log level name, falling back to `Info` on anything unknown.
pub fn parse_log_level(level: &str) -> LevelFilter {
    let level = level.trim();

    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level: {}, using 'info'", level);
        LevelFilter::Info
    })
}

/// Install the stderr logger at `Warn`; `set_level` adjusts it once the
/// configuration is known.
pub fn init() {
    static LOGGER: Logger = Logger;

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
    debug!("Logger level set to {}", level);
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (color_code, level_str) = match record.level() {
            Level::Error => ("\x1b[31m", "ERROR"),
            Level::Warn => ("\x1b[33m", "WARN "),
            Level::Info => ("\x1b[32m", "INFO "),
            Level::Debug => ("\x1b[36m", "DEBUG"),
            Level::Trace => ("\x1b[90m", "TRACE"),
        };

        // the report goes to stdout, keep log records out of it
        if std::io::stderr().is_terminal() {
            eprintln!("[{}{}\x1b[0m] {}", color_code, level_str, record.args());
        } else {
            eprintln!("[{}] {}", level_str, record.args());
        }
    }

    fn flush(&self) {}
}
