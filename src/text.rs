//! Message preparation and output layout.

use crate::error::{EnigmaError, ErrorKind, Result};

/// Prepares typed text for the machine: drops whitespace and uppercases
/// letters. Anything else is rejected, as is a message with no letters.
pub fn sanitize_message(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        if !c.is_ascii_alphabetic() {
            return Err(EnigmaError::input(
                ErrorKind::InvalidCharacter,
                format!("invalid character {:?} at index {}; letters only", c, i),
            ));
        }
        out.push(c.to_ascii_uppercase());
    }

    if out.is_empty() {
        return Err(EnigmaError::input(
            ErrorKind::EmptyMessage,
            "message has no letters",
        ));
    }
    Ok(out)
}

/// How enciphered text is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One unbroken run of letters.
    #[default]
    Continuous,
    /// Fixed-size groups separated by spaces, a fixed number per line.
    Grouped {
        group_len: usize,
        groups_per_line: usize,
    },
}

impl Layout {
    /// Five-letter groups, ten to a line.
    pub const RADIO: Layout = Layout::Grouped {
        group_len: 5,
        groups_per_line: 10,
    };

    pub fn apply(self, text: &str) -> String {
        match self {
            Layout::Continuous => text.to_string(),
            Layout::Grouped {
                group_len,
                groups_per_line,
            } => format_groups(text, group_len, groups_per_line),
        }
    }
}

/// Lays letters out in fixed groups, `groups_per_line` groups to a line.
///
/// A `group_len` or `groups_per_line` of 0 leaves that break out.
pub fn format_groups(text: &str, group_len: usize, groups_per_line: usize) -> String {
    if group_len == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + text.len() / group_len + 1);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % group_len == 0 {
            let group = i / group_len;
            if groups_per_line > 0 && group % groups_per_line == 0 {
                out.push('\n');
            } else {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}
