#![cfg(feature = "std")]

use std::boxed::Box;
use std::env;
use std::string::{String, ToString};
use std::time::Instant;

use log::{self, LevelFilter, Metadata, Record};

/// Writes records to stderr, stamped with the time since logging started.
/// stdout is reserved for game output and the `sim` JSON summary.
struct StderrLogger {
    started: Instant,
    target: Option<String>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && self
                .target
                .as_deref()
                .map_or(true, |prefix| metadata.target().starts_with(prefix))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = self.started.elapsed().as_secs_f64();
            eprintln!(
                "{:>9.3}s {:<5} [{}] {}",
                elapsed,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Parse `level` or `target=level`. An unknown level falls back to `info`.
fn parse_filter(spec: &str) -> (Option<String>, LevelFilter) {
    let (target, level) = match spec.split_once('=') {
        Some((target, level)) => (Some(target.trim()), level),
        None => (None, spec),
    };
    let level = level.trim().parse().unwrap_or(LevelFilter::Info);
    let target = target.filter(|t| !t.is_empty()).map(ToString::to_string);
    (target, level)
}

/// Initialize logging from the `SKIRMISH_LOG` environment variable.
///
/// The value is a level (`debug`) or a target prefix and a level
/// (`skirmish::game=debug`). Defaults to `info` for every target.
pub fn init_logging() {
    let (target, level) = env::var("SKIRMISH_LOG")
        .map(|spec| parse_filter(&spec))
        .unwrap_or((None, LevelFilter::Info));
    let logger = StderrLogger {
        started: Instant::now(),
        target,
    };
    let _ = log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_level() {
        assert_eq!(parse_filter("debug"), (None, LevelFilter::Debug));
        assert_eq!(parse_filter("nonsense"), (None, LevelFilter::Info));
    }

    #[test]
    fn target_and_level() {
        assert_eq!(
            parse_filter("skirmish::game=trace"),
            (Some("skirmish::game".to_string()), LevelFilter::Trace)
        );
        assert_eq!(parse_filter("=warn"), (None, LevelFilter::Warn));
    }
}
