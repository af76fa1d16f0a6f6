//! One-stop matching and conversion for a document parser.
//!
//! A value position in a document can hold any scalar literal, and the
//! shapes overlap: `1979-05-27` starts with the integer `1979` and `07:32:00`
//! starts with the integer `0`. [`match_scalar`] therefore tries the longer
//! shapes first: date-time, then local time, then number, then `inf`/`nan`.

use core::ops::Range;
use std::sync::Arc;

use jiff::civil::Time;

use crate::{
    Error, Value,
    convert::{FloatParser, StdFloat, to_date_time, to_local_time, to_number},
    matcher::{
        DateTimeMatch, NumberMatch, TimeMatch, match_date_time_parts, match_local_time,
        match_number, match_special_float,
    },
    tz::OffsetCache,
};

/// Any recognized scalar literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarMatch<'a> {
    DateTime(DateTimeMatch<'a>),
    LocalTime(TimeMatch<'a>),
    Number(NumberMatch<'a>),
}

impl ScalarMatch<'_> {
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            ScalarMatch::DateTime(m) => m.span(),
            ScalarMatch::LocalTime(m) => m.span(),
            ScalarMatch::Number(m) => m.span(),
        }
    }
}

/// Recognizes whichever scalar literal starts at `start`.
#[must_use]
pub fn match_scalar(text: &str, start: usize) -> Option<ScalarMatch<'_>> {
    if let Some(m) = match_date_time_parts(text, start) {
        return Some(ScalarMatch::DateTime(m));
    }
    if let Some(m) = match_local_time(text, start) {
        return Some(ScalarMatch::LocalTime(m));
    }
    match_number(text, start)
        .or_else(|| match_special_float(text, start))
        .map(ScalarMatch::Number)
}

/// Converts matched literals with a shared offset cache and a float parser.
///
/// Converters are cheap to clone; clones share the cache.
///
/// ```rust
/// use std::sync::Arc;
///
/// use tomlit::{Converter, OffsetCache, Value};
///
/// let cache = Arc::new(OffsetCache::new());
/// let conv = Converter::new().with_cache(Arc::clone(&cache));
///
/// let (value, span) = conv.parse_scalar("when = 07:32:00", 7).unwrap().unwrap();
/// assert_eq!(span, 7..15);
/// assert_eq!(value.kind(), "local time");
///
/// conv.parse_scalar("2001-01-01T00:00:00+01:00", 0).unwrap().unwrap();
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Converter<P = StdFloat> {
    cache: Arc<OffsetCache>,
    float: P,
}

impl Converter {
    /// A converter with its own empty cache and `f64` floats.
    #[must_use]
    pub fn new() -> Self {
        Converter {
            cache: Arc::new(OffsetCache::new()),
            float: StdFloat,
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FloatParser> Converter<P> {
    #[must_use]
    pub fn with_cache(self, cache: Arc<OffsetCache>) -> Self {
        Converter { cache, ..self }
    }

    #[must_use]
    pub fn with_float_parser<Q: FloatParser>(self, float: Q) -> Converter<Q> {
        Converter {
            cache: self.cache,
            float,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<OffsetCache> {
        &self.cache
    }

    pub fn number(&self, m: &NumberMatch<'_>) -> Result<Value<P::Float>, Error> {
        to_number(m, &self.float)
    }

    pub fn date_time(&self, m: &DateTimeMatch<'_>) -> Result<Value<P::Float>, Error> {
        to_date_time(m, &self.cache)
    }

    pub fn local_time(&self, m: &TimeMatch<'_>) -> Result<Time, Error> {
        to_local_time(m)
    }

    pub fn convert(&self, m: &ScalarMatch<'_>) -> Result<Value<P::Float>, Error> {
        match m {
            ScalarMatch::DateTime(m) => self.date_time(m),
            ScalarMatch::LocalTime(m) => self.local_time(m).map(Value::LocalTime),
            ScalarMatch::Number(m) => self.number(m),
        }
    }

    /// Matches and converts the scalar at `start`.
    ///
    /// `None` means nothing matched; `Some(Err(_))` means a literal matched
    /// but does not denote a value. On success the span lets the caller
    /// continue after the literal.
    pub fn parse_scalar(
        &self,
        text: &str,
        start: usize,
    ) -> Option<Result<(Value<P::Float>, Range<usize>), Error>> {
        let m = match_scalar(text, start)?;
        Some(self.convert(&m).map(|value| (value, m.span())))
    }
}
