//! Per-call facility / severity / code tag

use serde::{Deserialize, Serialize};

/// Optional labels attached to a single log call.
///
/// Facility and severity carry roughly their syslog meaning but are really
/// free-form tags. The code is meant to be an unambiguous, greppable key.
/// An empty string means "not set".
///
/// # Example
///
/// ```
/// use sak::Tag;
///
/// let tag = Tag::facility("db").with_severity("warn").with_code("3919");
/// assert_eq!(tag.facility, "db");
/// assert!(!tag.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub facility: String,
    pub severity: String,
    pub code: String,
}

impl Tag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tag with the given facility
    #[must_use]
    pub fn facility(facility: impl Into<String>) -> Self {
        Self {
            facility: facility.into(),
            ..Self::default()
        }
    }

    /// Start a tag carrying only a code
    #[must_use]
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = severity.into();
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.facility.is_empty() && self.severity.is_empty() && self.code.is_empty()
    }
}
