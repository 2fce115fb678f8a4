//! Timestamp formatting for the optional line prefix
//!
//! Lines only ever carry numeric epoch time so they stay sortable and
//! greppable. `Behavior::timestamp_format` picks the variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric timestamp formats
///
/// # Examples
///
/// ```
/// use sak::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.timestamp_millis_opt(1_736_332_245_123).unwrap();
/// assert_eq!(TimestampFormat::Unix.format(&t), "1736332245");
/// assert_eq!(TimestampFormat::UnixMillis.format(&t), "1736332245123");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Unix timestamp in seconds: `1736332245`
    #[default]
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        // Seconds are derived from the millisecond value so both views of
        // one instant agree.
        let millis = datetime.timestamp_millis();
        match self {
            TimestampFormat::Unix => (millis / 1000).to_string(),
            TimestampFormat::UnixMillis => millis.to_string(),
        }
    }
}
