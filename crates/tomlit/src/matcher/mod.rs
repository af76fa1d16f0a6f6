//! Literal matcher: anchored recognizers for scalar literal shapes.
//!
//! Each recognizer looks at `text` starting exactly at a byte offset and
//! returns the longest literal of its kind found there, decomposed into the
//! fragments the converter needs. A failed match is `None`; the caller is
//! expected to try another literal kind or report a syntax error with its own
//! position information.
//!
//! The recognizers only enforce the literal grammar. A date such as
//! `2021-02-30` is accepted here and rejected later, when the converter asks
//! the calendar to build it.
//!
//! Matches borrow from the input and record absolute byte spans, so a
//! document parser can resume right after the literal:
//!
//! ```rust
//! use tomlit::{NumberKind, Radix, match_number};
//!
//! let text = "port = 0x1F_90 # hex";
//! let m = match_number(text, 7).unwrap();
//! assert_eq!(m.as_str(), "0x1F_90");
//! assert_eq!(m.kind(), NumberKind::Integer(Radix::Hexadecimal));
//! assert_eq!(m.digits(), "1F_90");
//! assert_eq!(&text[m.span().end..], " # hex");
//! ```

mod datetime;
mod number;
#[cfg(test)]
mod tests;

use core::ops::Range;

use regex::{Captures, Regex};

pub use datetime::{
    DateMatch, DateTimeMatch, TimeMatch, ZoneMatch, ZoneOffset, match_date_time_parts,
    match_local_time,
};
pub use number::{NumberKind, NumberMatch, Radix, match_number, match_special_float};

/// Sign of a number or of a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub(crate) fn from_str_lossy(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Sign::Plus),
            "-" => Some(Sign::Minus),
            _ => None,
        }
    }

    /// The character this sign is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid literal pattern {pattern:?}: {err}"))
}

/// Runs an `\A`-anchored pattern at `start`.
///
/// Returns `None` when `start` is past the end of `text` or falls inside a
/// multi-byte character.
pub(crate) fn captures_at<'a>(re: &Regex, text: &'a str, start: usize) -> Option<Captures<'a>> {
    re.captures(text.get(start..)?)
}

/// Shifts a capture-relative range to an absolute span in the input.
pub(crate) fn shift(range: Range<usize>, start: usize) -> Range<usize> {
    range.start + start..range.end + start
}
