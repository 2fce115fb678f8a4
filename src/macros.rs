//! Logging macros.
//!
//! Every argument after the level is converted with `LogValue::from` and the
//! rendered pieces are concatenated with no separator, so put spacing in
//! string arguments yourself.
//!
//! # Examples
//!
//! ```
//! use sak::{log, log_to, Logger, Tag};
//!
//! // Program output through the global logger
//! log!(0, "processed ", 12, " files");
//!
//! // Diagnostics with a facility, through a logger of your own
//! let logger = Logger::new();
//! log_to!(logger, 2, Tag::facility("db"), "slow query: ", 1.5, "s");
//! ```

/// Log through the global logger.
///
/// # Examples
///
/// ```
/// use sak::{log, LogValue, Tag};
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// log!(1, Tag::facility("cfg").with_code("E17"), "cannot open ", LogValue::failure(&err));
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr $(, $arg:expr)* $(,)?) => {
        $crate::log($level, &[$($crate::LogValue::from($arg)),*])
    };
}

/// Log through a specific logger.
///
/// # Examples
///
/// ```
/// # use sak::{Logger, MemoryStreams};
/// use sak::log_to;
///
/// let capture = MemoryStreams::new();
/// let logger = Logger::builder().debug_level(1).streams(capture.clone()).build();
/// log_to!(logger, 1, "answer=", 42);
/// assert_eq!(capture.stderr_lines(), vec!["1: answer=42"]);
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, &[$($crate::LogValue::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, MapEnv, MemoryStreams, Tag};

    fn capture() -> (Logger, MemoryStreams) {
        let streams = MemoryStreams::new();
        let logger = Logger::builder()
            .debug_level(5)
            .max_history(10)
            .streams(streams.clone())
            .env(MapEnv::new())
            .build();
        (logger, streams)
    }

    #[test]
    fn test_log_to_macro() {
        let (logger, streams) = capture();
        log_to!(logger, 1, "Test message");
        log_to!(logger, 2, "Formatted: ", 42);
        assert_eq!(streams.stderr_lines(), vec!["1: Test message", "2: Formatted: 42"]);
    }

    #[test]
    fn test_log_to_with_tag_and_trailing_comma() {
        let (logger, streams) = capture();
        log_to!(logger, 3, Tag::facility("net").with_severity("warn"), "retry ", 2u8,);
        assert_eq!(streams.stderr_lines(), vec!["3: [net/warn]: retry 2"]);
    }

    #[test]
    fn test_log_to_no_values() {
        let (logger, _streams) = capture();
        log_to!(logger, 1);
        assert_eq!(logger.last_entry().expect("entry").output, "1: ");
    }

    #[test]
    fn test_log_to_borrowed_string() {
        let (logger, _streams) = capture();
        let name = String::from("worker-1");
        log_to!(logger, 1, "started ", &name);
        assert_eq!(logger.last_entry().expect("entry").message, "started worker-1");
    }
}
