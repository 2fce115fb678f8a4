//! Error types for the logger
//!
//! `Logger::log` never hands these back to the caller. They are recorded as
//! diagnostics (see `Logger::take_last_error`) and returned from the few
//! fallible helpers such as `Options::from_json` and `Logger::history_json`.

pub type Result<T> = std::result::Result<T, SakError>;

#[derive(Debug, thiserror::Error)]
pub enum SakError {
    /// The level override variable held something other than an integer
    #[error("Invalid level override in {variable}: '{value}'")]
    InvalidLevelOverride {
        variable: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The facility filter did not compile
    #[error("Invalid facility filter '{pattern}': {source}")]
    InvalidFilterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Writing a line to stdout or stderr failed
    #[error("Failed to write to {stream}: {source}")]
    StreamWrite {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SakError {
    /// Create a level override error
    pub fn level_override(
        variable: impl Into<String>,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        SakError::InvalidLevelOverride {
            variable: variable.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a filter compilation error
    pub fn filter_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        SakError::InvalidFilterPattern {
            pattern: pattern.into(),
            source,
        }
    }

    pub fn stream_write(stream: &'static str, source: std::io::Error) -> Self {
        SakError::StreamWrite { stream, source }
    }
}
