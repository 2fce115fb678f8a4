//! Output line assembly
//!
//! Layout, with every part optional except the message:
//!
//! ```text
//! <level>: <time>: [facility/severity]: <C@code> message
//! ```
//!
//! Level 0 is plain program output, so it carries neither the level prefix
//! nor the facility block. `^4:` greps every level-4 line.

use super::tag::Tag;

/// Build the output line for one entry.
///
/// ```
/// use sak::{assemble_line, Tag};
///
/// let tag = Tag::facility("testfac").with_code("3919");
/// assert_eq!(assemble_line(1, None, &tag, "hi"), "1: [testfac]: <C@3919> hi");
/// assert_eq!(assemble_line(0, None, &tag, "hi"), "<C@3919> hi");
/// ```
pub fn assemble_line(level: i64, timestamp: Option<&str>, tag: &Tag, message: &str) -> String {
    let mut line = String::with_capacity(message.len() + 32);

    if level > 0 {
        line.push_str(&level.to_string());
        line.push_str(": ");
    }

    if let Some(ts) = timestamp {
        line.push_str(ts);
        line.push_str(": ");
    }

    if !tag.facility.is_empty() && level > 0 {
        line.push('[');
        line.push_str(&tag.facility);
        if !tag.severity.is_empty() {
            line.push('/');
            line.push_str(&tag.severity);
        }
        line.push_str("]: ");
    }

    if !tag.code.is_empty() {
        line.push_str("<C@");
        line.push_str(&tag.code);
        line.push_str("> ");
    }

    line.push_str(message);
    line
}
