//! Main logger implementation

use super::{
    env::{EnvSource, ProcessEnv, FACILITY_FILTER_VAR, LEVEL_OVERRIDE_VAR},
    error::{Result, SakError},
    filter::FacilityFilter,
    history::History,
    log_entry::LogEntry,
    metrics::LoggerMetrics,
    options::Options,
    render::render,
    streams::{StdStreams, Streams},
    value::LogValue,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::OnceLock;

struct LoggerState {
    options: Options,
    history: History,
    streams: Box<dyn Streams>,
}

/// A leveled logger with optional in-memory history.
///
/// Options, history and the output streams sit behind one lock. Values are
/// rendered with the lock released; the line is written and appended to the
/// history under it, so concurrent calls never interleave their lines and
/// the history order is the order lines were written in.
pub struct Logger {
    state: Mutex<LoggerState>,
    env: Box<dyn EnvSource>,
    filter: FacilityFilter,
    /// Metrics for observability (printed, suppressed, absorbed failures)
    metrics: LoggerMetrics,
    last_error: Mutex<Option<SakError>>,
}

impl Logger {
    /// Logger with default options writing to the real stdout/stderr
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Options::default(), Box::new(StdStreams), Box::new(ProcessEnv))
    }

    /// Logger with the given options writing to the real stdout/stderr
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self::with_parts(options, Box::new(StdStreams), Box::new(ProcessEnv))
    }

    fn with_parts(options: Options, streams: Box<dyn Streams>, env: Box<dyn EnvSource>) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                options,
                history: History::new(),
                streams,
            }),
            env,
            filter: FacilityFilter::new(),
            metrics: LoggerMetrics::new(),
            last_error: Mutex::new(None),
        }
    }

    /// Log `values` at `level`.
    ///
    /// Level 0 is plain output: it goes to stdout with no prefix. Levels up
    /// to the debug level go to stderr, subject to the facility filter.
    /// Nothing here ever fails from the caller's point of view.
    pub fn log(&self, level: i64, values: &[LogValue<'_>]) {
        self.metrics.record_call();

        let (debug_level, time_format) = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            if state.options.debug_level < 0 {
                state.options.debug_level = 0;
            }

            if state.options.history_disabled() {
                state.history.clear();
                // Nobody will see it and nothing keeps it.
                if level > state.options.debug_level {
                    self.metrics.record_early_exit();
                    return;
                }
            }

            state.options.behavior.shift_buffer = state.options.behavior.effective_shift_buffer();
            self.apply_level_override(&mut state.options);
            self.refresh_filter(&state.options);

            (
                state.options.debug_level,
                state.options.behavior.timestamp_format(),
            )
        };

        // Logify and Debug impls may log through this same logger.
        let mut entry = LogEntry::new(Utc::now(), level, render(values), time_format);

        let mut guard = self.state.lock();
        let state = &mut *guard;

        if debug_level >= level {
            entry.printed = self.emit(&mut *state.streams, &entry);
        }

        if entry.printed {
            self.metrics.record_printed();
        } else {
            self.metrics.record_suppressed();
        }

        let evicted = state.history.record(
            entry,
            state.options.max_history,
            state.options.behavior.shift_buffer,
        );
        if evicted > 0 {
            self.metrics.record_evicted(evicted as u64);
        }
    }

    /// `SAK_LOG_DLOVERRIDE` replaces the debug level outright; garbage means 0.
    fn apply_level_override(&self, options: &mut Options) {
        let Some(raw) = self.env.non_empty(LEVEL_OVERRIDE_VAR) else {
            return;
        };
        match raw.parse::<i64>() {
            Ok(level) => options.debug_level = level,
            Err(e) => {
                options.debug_level = 0;
                self.metrics.record_override_failure();
                self.note_error(SakError::level_override(LEVEL_OVERRIDE_VAR, raw, e));
            }
        }
    }

    fn refresh_filter(&self, options: &Options) {
        if self.filter.is_compiled() {
            return;
        }
        let pattern = self.env.non_empty(FACILITY_FILTER_VAR).or_else(|| {
            options
                .behavior
                .filter_pattern
                .clone()
                .filter(|p| !p.is_empty())
        });
        if let Some(pattern) = pattern {
            if let Some(err) = self.filter.try_compile(&pattern) {
                self.metrics.record_filter_failure();
                self.note_error(err);
            }
        }
    }

    /// Write the entry; returns whether any stream took it.
    ///
    /// A level-0 entry whose facility passes the filter is written to both
    /// stdout and stderr.
    fn emit(&self, streams: &mut dyn Streams, entry: &LogEntry) -> bool {
        let mut printed = false;

        if entry.level == 0 {
            match streams.write_stdout(&entry.output) {
                Ok(()) => printed = true,
                Err(e) => {
                    self.metrics.record_write_failure();
                    self.note_error(SakError::stream_write("stdout", e));
                }
            }
        }

        if self.filter.allows(&entry.facility) {
            match streams.write_stderr(&entry.output) {
                Ok(()) => printed = true,
                Err(e) => {
                    self.metrics.record_write_failure();
                    self.note_error(SakError::stream_write("stderr", e));
                }
            }
        }

        printed
    }

    fn note_error(&self, err: SakError) {
        *self.last_error.lock() = Some(err);
    }

    /// The most recent silently absorbed failure, clearing it
    pub fn take_last_error(&self) -> Option<SakError> {
        self.last_error.lock().take()
    }

    /// Snapshot of the current options
    pub fn options(&self) -> Options {
        self.state.lock().options.clone()
    }

    pub fn set_options(&self, options: Options) {
        self.state.lock().options = options;
    }

    /// Change options in place
    ///
    /// ```
    /// use sak::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.update_options(|o| {
    ///     o.max_history = 50;
    ///     o.behavior.print_time = true;
    /// });
    /// assert_eq!(logger.options().max_history, 50);
    /// ```
    pub fn update_options<F: FnOnce(&mut Options)>(&self, f: F) {
        f(&mut self.state.lock().options);
    }

    pub fn set_debug_level(&self, level: i64) {
        self.state.lock().options.debug_level = level;
    }

    pub fn debug_level(&self) -> i64 {
        self.state.lock().options.debug_level
    }

    pub fn set_max_history(&self, max: i64) {
        self.state.lock().options.max_history = max;
    }

    pub fn set_streams(&self, streams: Box<dyn Streams>) {
        self.state.lock().streams = streams;
    }

    /// Copy of the history, oldest first
    pub fn history(&self) -> Vec<LogEntry> {
        self.state.lock().history.entries().to_vec()
    }

    pub fn last_entry(&self) -> Option<LogEntry> {
        self.state.lock().history.last().cloned()
    }

    pub fn history_len(&self) -> usize {
        self.state.lock().history.len()
    }

    pub fn clear_history(&self) {
        self.state.lock().history.clear();
    }

    /// History as a JSON array
    pub fn history_json(&self) -> Result<String> {
        let state = self.state.lock();
        Ok(serde_json::to_string(state.history.entries())?)
    }

    /// Source of the compiled facility filter, if one is active
    pub fn filter_pattern(&self) -> Option<String> {
        self.filter.pattern().map(str::to_string)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Create a new LoggerBuilder for fluent configuration
    ///
    /// # Example
    ///
    /// ```
    /// use sak::{Logger, MemoryStreams};
    ///
    /// let capture = MemoryStreams::new();
    /// let logger = Logger::builder()
    ///     .debug_level(2)
    ///     .max_history(100)
    ///     .streams(capture.clone())
    ///     .build();
    ///
    /// logger.log(1, &["ready".into()]);
    /// assert_eq!(capture.stderr_lines(), vec!["1: ready"]);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a Logger with fluent API
pub struct LoggerBuilder {
    options: Options,
    streams: Option<Box<dyn Streams>>,
    env: Option<Box<dyn EnvSource>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            streams: None,
            env: None,
        }
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn debug_level(mut self, level: i64) -> Self {
        self.options.debug_level = level;
        self
    }

    #[must_use]
    pub fn max_history(mut self, max: i64) -> Self {
        self.options.max_history = max;
        self
    }

    #[must_use]
    pub fn print_time(mut self, print_time: bool) -> Self {
        self.options.behavior.print_time = print_time;
        self
    }

    #[must_use]
    pub fn time_milli(mut self, time_milli: bool) -> Self {
        self.options.behavior.time_milli = time_milli;
        self
    }

    #[must_use]
    pub fn filter_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.options.behavior.filter_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn shift_buffer(mut self, shift: i64) -> Self {
        self.options.behavior.shift_buffer = shift;
        self
    }

    /// Write to these streams instead of stdout/stderr
    #[must_use]
    pub fn streams<S: Streams + 'static>(mut self, streams: S) -> Self {
        self.streams = Some(Box::new(streams));
        self
    }

    /// Read overrides from this source instead of the process environment
    #[must_use]
    pub fn env<E: EnvSource + 'static>(mut self, env: E) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger::with_parts(
            self.options,
            self.streams.unwrap_or_else(|| Box::new(StdStreams)),
            self.env.unwrap_or_else(|| Box::new(ProcessEnv)),
        )
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger used by `log!` and `sak::log`
///
/// Built on first use with default options, the real output streams and the
/// process environment.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Log through the process-wide logger
pub fn log(level: i64, values: &[LogValue<'_>]) {
    global().log(level, values);
}
