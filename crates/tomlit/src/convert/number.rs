use std::borrow::Cow;

use super::FloatParser;
use crate::{
    Error, Value,
    matcher::{NumberKind, NumberMatch},
};

/// Converts a matched number.
///
/// Integers are parsed in their detected radix with underscores removed and
/// must fit in an `i64`. Floats are handed to `parser` untouched.
pub fn to_number<P: FloatParser>(m: &NumberMatch<'_>, parser: &P) -> Result<Value<P::Float>, Error> {
    match m.kind() {
        NumberKind::Float => parser
            .parse_float(m.as_str())
            .map(Value::Float)
            .map_err(|source| Error::Float {
                literal: m.as_str().into(),
                source: source.into(),
            }),
        NumberKind::Integer(radix) => i64::from_str_radix(&strip_underscores(m.digits()), radix.base())
            .map(Value::Integer)
            .map_err(|source| Error::IntegerOutOfRange {
                literal: m.as_str().into(),
                source,
            }),
    }
}

fn strip_underscores(digits: &str) -> Cow<'_, str> {
    if digits.contains('_') {
        Cow::Owned(digits.replace('_', ""))
    } else {
        Cow::Borrowed(digits)
    }
}
