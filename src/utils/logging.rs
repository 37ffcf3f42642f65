// Thu May 7 2026 - Alex

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::time::Instant;

/// Installs the colored stderr logger. When `RUST_LOG` is set the
/// standard env_logger filter syntax wins instead.
pub fn init_logger(verbosity: u8) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env()
            .format_timestamp(None)
            .target(env_logger::Target::Stderr)
            .try_init()
            .ok();
        return;
    }

    let level = level_from_verbosity(verbosity);
    log::set_boxed_logger(Box::new(ColoredLogger::new(level))).ok();
    log::set_max_level(level);
}

pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

struct ColoredLogger {
    level: LevelFilter,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                format!("[{}]", record.target())
            } else {
                String::new()
            };

            eprintln!(
                "{} {} {}",
                self.format_level(record.level()),
                target.dimmed(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &str) -> Self {
        log::debug!("[TIMER] {} started", name);
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        log::debug!(
            "[TIMER] {} took {:.2}ms",
            self.name,
            elapsed.as_secs_f64() * 1000.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(LevelFilter::Warn, level_from_verbosity(0));
        assert_eq!(LevelFilter::Info, level_from_verbosity(1));
        assert_eq!(LevelFilter::Debug, level_from_verbosity(2));
        assert_eq!(LevelFilter::Debug, level_from_verbosity(9));
    }

    #[test]
    fn test_scoped_timer_drops_cleanly() {
        let timer = ScopedTimer::new("unit");
        drop(timer);
    }
}
