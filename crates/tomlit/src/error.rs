use core::num::ParseIntError;

use thiserror::Error;

/// Boxed error returned by a caller-supplied [`FloatParser`].
///
/// [`FloatParser`]: crate::FloatParser
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Conversion failure for a literal that matched syntactically.
///
/// A literal that does not match at all is not an error: the matchers return
/// `None` and the caller decides whether to try another literal kind.
#[derive(Error, Debug)]
pub enum Error {
    /// The date or time does not exist, e.g. April 31st.
    #[error("`{literal}` is not a valid calendar value: {source}")]
    InvalidCalendarValue {
        literal: String,
        #[source]
        source: jiff::Error,
    },
    /// Integers are limited to the `i64` range.
    #[error("integer `{literal}` does not fit in 64 bits")]
    IntegerOutOfRange {
        literal: String,
        #[source]
        source: ParseIntError,
    },
    /// The caller's [`FloatParser`](crate::FloatParser) failed.
    #[error("float `{literal}` was rejected: {source}")]
    Float {
        literal: String,
        #[source]
        source: BoxError,
    },
    /// Offset digits passed to
    /// [`OffsetCache::get_or_create`](crate::OffsetCache::get_or_create) were
    /// not a valid `HH`/`MM` pair.
    #[error("invalid UTC offset `{literal}`")]
    InvalidOffset { literal: String },
}

impl Error {
    /// Returns true for dates and times that do not exist on the calendar.
    #[must_use]
    pub fn is_invalid_calendar_value(&self) -> bool {
        matches!(self, Error::InvalidCalendarValue { .. })
    }

    pub(crate) fn calendar(literal: &str, source: jiff::Error) -> Self {
        debug!("rejecting calendar value {literal:?}: {source}");
        Error::InvalidCalendarValue {
            literal: literal.into(),
            source,
        }
    }
}
