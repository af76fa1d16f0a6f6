use core::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{captures_at, compile, shift};

/// Radix-prefixed integers first, then optionally signed decimals. Leftmost
/// first alternation makes `0x` without hex digits fall through to `0`.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"\A(?:",
        r"0(?:x(?P<hex>[0-9A-Fa-f](?:_?[0-9A-Fa-f])*)",
        r"|b(?P<bin>[01](?:_?[01])*)",
        r"|o(?P<oct>[0-7](?:_?[0-7])*))",
        r"|[+-]?(?:0|[1-9](?:_?[0-9])*)",
        r"(?P<frac>\.[0-9](?:_?[0-9])*)?",
        r"(?P<exp>[eE][+-]?[0-9](?:_?[0-9])*)?",
        r")",
    ))
});

static SPECIAL_FLOAT: Lazy<Regex> = Lazy::new(|| compile(r"\A[+-]?(?:inf|nan)"));

/// Base of an integer literal, detected from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b`
    Binary = 2,
    /// `0o`
    Octal = 8,
    /// No prefix.
    Decimal = 10,
    /// `0x`
    Hexadecimal = 16,
}

impl Radix {
    /// The numeric base, suitable for `from_str_radix`.
    #[must_use]
    pub fn base(self) -> u32 {
        self as u32
    }
}

/// Lexical class of a matched number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// No fractional part and no exponent.
    Integer(Radix),
    /// Has a fractional part, an exponent, or is `inf`/`nan`.
    Float,
}

/// A recognized number literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMatch<'a> {
    text: &'a str,
    span: Range<usize>,
    kind: NumberKind,
    digits: &'a str,
}

impl<'a> NumberMatch<'a> {
    /// The full literal as written, including sign, prefix and underscores.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte range of the literal in the matched input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[must_use]
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        self.kind == NumberKind::Float
    }

    /// The digit run handed to integer parsing.
    ///
    /// For prefixed integers this excludes the `0x`/`0o`/`0b` prefix. For
    /// everything else it is the whole literal, sign included. Underscores
    /// are still present.
    #[must_use]
    pub fn digits(&self) -> &'a str {
        self.digits
    }
}

/// Recognizes an integer or float literal starting at `start`.
#[must_use]
pub fn match_number(text: &str, start: usize) -> Option<NumberMatch<'_>> {
    let caps = captures_at(&NUMBER, text, start)?;
    let whole = caps.get(0)?;
    let prefixed = [
        ("hex", Radix::Hexadecimal),
        ("bin", Radix::Binary),
        ("oct", Radix::Octal),
    ]
    .into_iter()
    .find_map(|(name, radix)| caps.name(name).map(|digits| (radix, digits.as_str())));

    let (kind, digits) = match prefixed {
        Some((radix, digits)) => (NumberKind::Integer(radix), digits),
        None if caps.name("frac").is_some() || caps.name("exp").is_some() => {
            (NumberKind::Float, whole.as_str())
        }
        None => (NumberKind::Integer(Radix::Decimal), whole.as_str()),
    };

    Some(NumberMatch {
        text: whole.as_str(),
        span: shift(whole.range(), start),
        kind,
        digits,
    })
}

/// Recognizes `inf` or `nan`, optionally signed, as a float literal.
#[must_use]
pub fn match_special_float(text: &str, start: usize) -> Option<NumberMatch<'_>> {
    let whole = SPECIAL_FLOAT.find(text.get(start..)?)?;
    Some(NumberMatch {
        text: whole.as_str(),
        span: shift(whole.range(), start),
        kind: NumberKind::Float,
        digits: whole.as_str(),
    })
}
