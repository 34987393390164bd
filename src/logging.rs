// Logger setup for the binary, plus debug-build-only logging macros used on
// the per-guess path.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Maps the `-v`/`-q` count from the CLI to a log level. `1` is the default.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. `RUST_LOG` still overrides the CLI level.
pub fn init_logging(verbosity: u8) {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!(target: "guess_scorer", $($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!(target: "guess_scorer", $($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Error);
        assert_eq!(level_for_verbosity(1), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(2), LevelFilter::Info);
        assert_eq!(level_for_verbosity(3), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(1);
        init_logging(3);
    }
}
