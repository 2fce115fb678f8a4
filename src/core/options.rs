//! Logger options
//!
//! All fields are plain data so an embedding program can tweak them at any
//! time, or load them from JSON. A zeroed `Options` is the "import and call"
//! configuration: threshold 0, no history, no timestamps, no filter.

use super::error::Result;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Shift applied to the history when `shift_buffer` is not positive
pub const DEFAULT_SHIFT_BUFFER: i64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Highest level that gets printed. Negative values are clamped to 0.
    pub debug_level: i64,
    /// History capacity. 0 disables history, negative keeps everything.
    pub max_history: i64,
    pub behavior: Behavior,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Behavior {
    /// Prefix each line with the epoch time
    pub print_time: bool,
    /// Use milliseconds instead of seconds when printing time
    pub time_milli: bool,
    /// Facility filter used when `SAK_LOG_FFILTER` is unset
    pub filter_pattern: Option<String>,
    /// Extra entries dropped from the front of the history on overflow
    pub shift_buffer: i64,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document; missing fields take their defaults
    ///
    /// # Example
    ///
    /// ```
    /// use sak::Options;
    ///
    /// let opts = Options::from_json(r#"{"debugLevel": 3, "behavior": {"printTime": true}}"#).unwrap();
    /// assert_eq!(opts.debug_level, 3);
    /// assert!(opts.behavior.print_time);
    /// assert_eq!(opts.max_history, 0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn with_debug_level(mut self, level: i64) -> Self {
        self.debug_level = level;
        self
    }

    #[must_use]
    pub fn with_max_history(mut self, max: i64) -> Self {
        self.max_history = max;
        self
    }

    #[must_use]
    pub fn with_print_time(mut self, print_time: bool) -> Self {
        self.behavior.print_time = print_time;
        self
    }

    #[must_use]
    pub fn with_time_milli(mut self, time_milli: bool) -> Self {
        self.behavior.time_milli = time_milli;
        self
    }

    #[must_use]
    pub fn with_filter_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.behavior.filter_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_shift_buffer(mut self, shift: i64) -> Self {
        self.behavior.shift_buffer = shift;
        self
    }

    /// History is off and nothing is retained between calls
    pub fn history_disabled(&self) -> bool {
        self.max_history == 0
    }
}

impl Behavior {
    /// Timestamp format for the line prefix, or `None` when time is not printed
    pub fn timestamp_format(&self) -> Option<TimestampFormat> {
        match (self.print_time, self.time_milli) {
            (false, _) => None,
            (true, false) => Some(TimestampFormat::Unix),
            (true, true) => Some(TimestampFormat::UnixMillis),
        }
    }

    /// Shift buffer with the default applied
    pub fn effective_shift_buffer(&self) -> i64 {
        if self.shift_buffer <= 0 {
            DEFAULT_SHIFT_BUFFER
        } else {
            self.shift_buffer
        }
    }
}
