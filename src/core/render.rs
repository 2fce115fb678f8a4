//! Turns the values of one log call into a message payload

use super::tag::Tag;
use super::value::LogValue;
use std::fmt::Write as _;

/// Payload and tag extracted from a call's values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub message: String,
    pub tag: Tag,
}

/// Render values in call order with no separator between them.
///
/// Tags are not part of the message; the last tag seen replaces any earlier
/// one wholesale.
///
/// ```
/// use sak::{render, LogValue, Tag};
///
/// let rendered = render(&[
///     LogValue::from(Tag::facility("a")),
///     LogValue::from("n="),
///     LogValue::from(3),
///     LogValue::from(Tag::facility("b")),
/// ]);
/// assert_eq!(rendered.message, "n=3");
/// assert_eq!(rendered.tag.facility, "b");
/// ```
pub fn render(values: &[LogValue<'_>]) -> Rendered {
    let mut rendered = Rendered::default();
    for value in values {
        match value {
            LogValue::Custom(v) => rendered.message.push_str(&v.logify()),
            LogValue::Tag(tag) => rendered.tag = tag.clone(),
            LogValue::Text(s) => rendered.message.push_str(s),
            LogValue::Int(i) => {
                let _ = write!(rendered.message, "{}", i);
            }
            LogValue::UInt(u) => {
                let _ = write!(rendered.message, "{}", u);
            }
            LogValue::Float(f) => {
                let _ = write!(rendered.message, "{:.6}", f);
            }
            LogValue::Failure(e) => {
                let _ = write!(rendered.message, "{}", e);
            }
            LogValue::Dump { value, type_name } => {
                rendered.message.push_str(&debug_dump(*value, type_name));
            }
        }
    }
    rendered
}

/// Best-effort dump of an arbitrary value: `(<type>) <pretty debug>` plus a
/// trailing newline. Output size is unbounded.
pub fn debug_dump(value: &dyn std::fmt::Debug, type_name: &str) -> String {
    format!("({}) {:#?}\n", type_name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Logify;

    struct TestStruct {
        str1: String,
        str2: String,
        int: i32,
    }

    impl Logify for TestStruct {
        fn logify(&self) -> String {
            format!("str1: {}, str2: {}, int: {}", self.str1, self.str2, self.int)
        }
    }

    #[derive(Debug)]
    #[allow(dead_code)]
    struct Opaque {
        id: u32,
    }

    #[test]
    fn test_concatenates_without_separator() {
        let rendered = render(&["a".into(), 1.into(), "b".into()]);
        assert_eq!(rendered.message, "a1b");
        assert!(rendered.tag.is_empty());
    }

    #[test]
    fn test_custom_rendering() {
        let ts = TestStruct {
            str1: "str1".into(),
            str2: "str2".into(),
            int: 10,
        };
        let rendered = render(&["value - ".into(), LogValue::custom(&ts)]);
        assert_eq!(rendered.message, "value - str1: str1, str2: str2, int: 10");
    }

    #[test]
    fn test_numbers() {
        let rendered = render(&[(-12i64).into(), " ".into(), 7u64.into(), " ".into(), 2.5.into()]);
        assert_eq!(rendered.message, "-12 7 2.500000");
    }

    #[test]
    fn test_failure_uses_display() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let rendered = render(&["failed: ".into(), LogValue::failure(&err)]);
        assert_eq!(rendered.message, "failed: disk on fire");
    }

    #[test]
    fn test_dump_fallback() {
        let opaque = Opaque { id: 9 };
        let rendered = render(&[LogValue::dump(&opaque)]);
        assert!(rendered.message.starts_with('('));
        assert!(rendered.message.contains("Opaque"));
        assert!(rendered.message.contains("id: 9"));
        assert!(rendered.message.ends_with('\n'));
    }

    #[test]
    fn test_last_tag_wins_whole() {
        let rendered = render(&[
            Tag::facility("first").with_code("1").into(),
            "msg".into(),
            Tag::facility("second").into(),
        ]);
        assert_eq!(rendered.message, "msg");
        assert_eq!(rendered.tag.facility, "second");
        // overwrite, not merge
        assert!(rendered.tag.code.is_empty());
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(render(&[]), Rendered::default());
    }
}
