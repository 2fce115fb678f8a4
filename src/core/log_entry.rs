//! Log entry structure

use super::line::assemble_line;
use super::render::Rendered;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One log call, as kept in the history.
///
/// `output` is assembled even when the entry is suppressed, so the history
/// shows exactly what would have been printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "logLevel")]
    pub level: i64,
    pub facility: String,
    pub severity: String,
    pub code: String,
    pub message: String,
    #[serde(rename = "outputstr")]
    pub output: String,
    pub printed: bool,
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        level: i64,
        rendered: Rendered,
        time_format: Option<TimestampFormat>,
    ) -> Self {
        let time_str = time_format.map(|f| f.format(&timestamp));
        let output = assemble_line(level, time_str.as_deref(), &rendered.tag, &rendered.message);
        let Rendered { message, tag } = rendered;
        Self {
            timestamp,
            level,
            facility: tag.facility,
            severity: tag.severity,
            code: tag.code,
            message,
            output,
            printed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tag::Tag;
    use chrono::TimeZone;

    fn rendered(message: &str, tag: Tag) -> Rendered {
        Rendered {
            message: message.to_string(),
            tag,
        }
    }

    #[test]
    fn test_new_assembles_output() {
        let now = Utc::now();
        let entry = LogEntry::new(now, 1, rendered("hello", Tag::facility("testfac")), None);

        assert_eq!(entry.level, 1);
        assert_eq!(entry.facility, "testfac");
        assert_eq!(entry.message, "hello");
        assert_eq!(entry.output, "1: [testfac]: hello");
        assert!(!entry.printed);
    }

    #[test]
    fn test_new_with_timestamp() {
        let t = Utc.timestamp_millis_opt(1_736_332_245_123).single().expect("valid");
        let entry = LogEntry::new(t, 2, rendered("x", Tag::new()), Some(TimestampFormat::UnixMillis));
        assert_eq!(entry.output, "2: 1736332245123: x");

        let entry = LogEntry::new(t, 2, rendered("x", Tag::new()), Some(TimestampFormat::Unix));
        assert_eq!(entry.output, "2: 1736332245: x");
    }

    #[test]
    fn test_json_field_names() {
        let entry = LogEntry::new(Utc::now(), 3, rendered("m", Tag::code("9")), None);
        let json = serde_json::to_value(&entry).expect("serialize");

        assert_eq!(json["logLevel"], 3);
        assert_eq!(json["outputstr"], "3: <C@9> m");
        assert_eq!(json["code"], "9");
        assert_eq!(json["printed"], false);
        assert!(json.get("time").is_some());

        let back: LogEntry = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, entry);
    }
}
