use std::{borrow::Cow, num::ParseFloatError};

use crate::error::BoxError;

/// Turns the text of a float literal into a float value.
///
/// The parser receives the literal exactly as written, sign and underscores
/// included, or one of `inf`, `nan` with an optional sign. Any
/// `Fn(&str) -> Result<T, E>` is a parser, which makes it easy to keep the
/// decimal text around for arbitrary-precision types:
///
/// ```rust
/// use tomlit::{Value, match_number, to_number};
///
/// let keep_text = |s: &str| Ok::<_, std::convert::Infallible>(s.replace('_', ""));
/// let m = match_number("3.141_592_653_589_793_238", 0).unwrap();
/// let value = to_number(&m, &keep_text).unwrap();
/// assert_eq!(value, Value::Float("3.141592653589793238".to_string()));
/// ```
pub trait FloatParser {
    type Float;
    type Error: Into<BoxError>;

    fn parse_float(&self, literal: &str) -> Result<Self::Float, Self::Error>;
}

/// IEEE-754 binary64, via `str::parse::<f64>` with underscores removed.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFloat;

impl FloatParser for StdFloat {
    type Float = f64;
    type Error = ParseFloatError;

    fn parse_float(&self, literal: &str) -> Result<f64, ParseFloatError> {
        let digits = if literal.contains('_') {
            Cow::Owned(literal.replace('_', ""))
        } else {
            Cow::Borrowed(literal)
        };
        digits.parse()
    }
}

impl<T, E, P> FloatParser for P
where
    P: Fn(&str) -> Result<T, E>,
    E: Into<BoxError>,
{
    type Float = T;
    type Error = E;

    fn parse_float(&self, literal: &str) -> Result<T, E> {
        self(literal)
    }
}
