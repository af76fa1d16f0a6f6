use core::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{Sign, captures_at, compile, shift};

/// `HH:MM:SS[.fraction]`. Only the first six fraction digits are captured;
/// the rest are consumed and dropped.
const TIME: &str = concat!(
    r"(?P<hour>[01][0-9]|2[0-3]):(?P<minute>[0-5][0-9]):(?P<second>[0-5][0-9])",
    r"(?:\.(?P<fraction>[0-9]{1,6})[0-9]*)?",
);

static LOCAL_TIME: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\A{TIME}")));

static DATE: Lazy<Regex> = Lazy::new(|| {
    compile(r"\A(?P<year>[0-9]{4})-(?P<month>0[1-9]|1[0-2])-(?P<day>0[1-9]|[12][0-9]|3[01])")
});

static DATE_TIME_TIME: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\A[Tt ]{TIME}")));

static ZONE: Lazy<Regex> = Lazy::new(|| {
    compile(r"\A(?:(?P<utc>[Zz])|(?P<sign>[+-])(?P<hour>[01][0-9]|2[0-3]):(?P<minute>[0-5][0-9]))")
});

/// `YYYY-MM-DD`, digits as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch<'a> {
    year: &'a str,
    month: &'a str,
    day: &'a str,
    span: Range<usize>,
}

impl<'a> DateMatch<'a> {
    #[must_use]
    pub fn year(&self) -> &'a str {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> &'a str {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> &'a str {
        self.day
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// `HH:MM:SS` with an optional fraction of up to six digits.
///
/// Inside a date-time the span starts after the `T`/`t`/space separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch<'a> {
    hour: &'a str,
    minute: &'a str,
    second: &'a str,
    fraction: Option<&'a str>,
    span: Range<usize>,
}

impl<'a> TimeMatch<'a> {
    #[must_use]
    pub fn hour(&self) -> &'a str {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> &'a str {
        self.minute
    }

    #[must_use]
    pub fn second(&self) -> &'a str {
        self.second
    }

    /// First one to six fraction digits; digits past the sixth are dropped.
    #[must_use]
    pub fn fraction(&self) -> Option<&'a str> {
        self.fraction
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// The zone suffix of a date-time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMatch<'a> {
    offset: ZoneOffset<'a>,
    span: Range<usize>,
}

impl<'a> ZoneMatch<'a> {
    #[must_use]
    pub fn offset(&self) -> ZoneOffset<'a> {
        self.offset
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneOffset<'a> {
    /// `Z` or `z`.
    Utc,
    /// `+HH:MM` or `-HH:MM`.
    Fixed {
        sign: Sign,
        hour: &'a str,
        minute: &'a str,
    },
}

/// A date-time literal, tagged by which fragments were present.
///
/// [`match_date_time_parts`] never yields `LocalTime`; it only arises from
/// [`DateTimeMatch::from_parts`] with a time and no date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeMatch<'a> {
    Date(DateMatch<'a>),
    LocalTime(TimeMatch<'a>),
    LocalDateTime(DateMatch<'a>, TimeMatch<'a>),
    ZonedDateTime(DateMatch<'a>, TimeMatch<'a>, ZoneMatch<'a>),
}

impl<'a> DateTimeMatch<'a> {
    /// Composes a match from independently recognized fragments.
    ///
    /// Returns `None` when nothing is present, or when a zone comes without
    /// both a date and a time.
    #[must_use]
    pub fn from_parts(
        date: Option<DateMatch<'a>>,
        time: Option<TimeMatch<'a>>,
        zone: Option<ZoneMatch<'a>>,
    ) -> Option<Self> {
        match (date, time, zone) {
            (Some(date), None, None) => Some(DateTimeMatch::Date(date)),
            (None, Some(time), None) => Some(DateTimeMatch::LocalTime(time)),
            (Some(date), Some(time), None) => Some(DateTimeMatch::LocalDateTime(date, time)),
            (Some(date), Some(time), Some(zone)) => {
                Some(DateTimeMatch::ZonedDateTime(date, time, zone))
            }
            (None, None, None) | (_, None, Some(_)) | (None, Some(_), Some(_)) => None,
        }
    }

    /// The fragments as optional parts.
    #[must_use]
    pub fn parts(&self) -> (Option<&DateMatch<'a>>, Option<&TimeMatch<'a>>, Option<&ZoneMatch<'a>>) {
        match self {
            DateTimeMatch::Date(date) => (Some(date), None, None),
            DateTimeMatch::LocalTime(time) => (None, Some(time), None),
            DateTimeMatch::LocalDateTime(date, time) => (Some(date), Some(time), None),
            DateTimeMatch::ZonedDateTime(date, time, zone) => (Some(date), Some(time), Some(zone)),
        }
    }

    #[must_use]
    pub fn date(&self) -> Option<&DateMatch<'a>> {
        match self {
            DateTimeMatch::Date(date)
            | DateTimeMatch::LocalDateTime(date, _)
            | DateTimeMatch::ZonedDateTime(date, _, _) => Some(date),
            DateTimeMatch::LocalTime(_) => None,
        }
    }

    /// Byte range of the whole literal, separator and zone included.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            DateTimeMatch::Date(date) => date.span(),
            DateTimeMatch::LocalTime(time) => time.span(),
            DateTimeMatch::LocalDateTime(date, time) => date.span.start..time.span.end,
            DateTimeMatch::ZonedDateTime(date, _, zone) => date.span.start..zone.span.end,
        }
    }
}

fn time_from_captures<'a>(caps: &Captures<'a>, start: usize) -> Option<TimeMatch<'a>> {
    let hour = caps.name("hour")?;
    let whole = caps.get(0)?;
    Some(TimeMatch {
        hour: hour.as_str(),
        minute: caps.name("minute")?.as_str(),
        second: caps.name("second")?.as_str(),
        fraction: caps.name("fraction").map(|m| m.as_str()),
        span: shift(hour.start()..whole.end(), start),
    })
}

/// Recognizes a bare local time (`HH:MM:SS[.fraction]`) at `start`.
#[must_use]
pub fn match_local_time(text: &str, start: usize) -> Option<TimeMatch<'_>> {
    let caps = captures_at(&LOCAL_TIME, text, start)?;
    time_from_captures(&caps, start)
}

fn match_date(text: &str, start: usize) -> Option<DateMatch<'_>> {
    let caps = captures_at(&DATE, text, start)?;
    Some(DateMatch {
        year: caps.name("year")?.as_str(),
        month: caps.name("month")?.as_str(),
        day: caps.name("day")?.as_str(),
        span: shift(caps.get(0)?.range(), start),
    })
}

fn match_date_time_time(text: &str, start: usize) -> Option<TimeMatch<'_>> {
    let caps = captures_at(&DATE_TIME_TIME, text, start)?;
    time_from_captures(&caps, start)
}

fn match_zone(text: &str, start: usize) -> Option<ZoneMatch<'_>> {
    let caps = captures_at(&ZONE, text, start)?;
    let offset = if caps.name("utc").is_some() {
        ZoneOffset::Utc
    } else {
        ZoneOffset::Fixed {
            sign: Sign::from_str_lossy(caps.name("sign")?.as_str())?,
            hour: caps.name("hour")?.as_str(),
            minute: caps.name("minute")?.as_str(),
        }
    };
    Some(ZoneMatch {
        offset,
        span: shift(caps.get(0)?.range(), start),
    })
}

/// Recognizes a date, local date-time or zoned date-time at `start`.
///
/// The time fragment is only tried after a date, and the zone only after a
/// time. A separator that is not followed by a valid time is left unconsumed,
/// so `"2021-01-01 # comment"` is a date-only match.
#[must_use]
pub fn match_date_time_parts(text: &str, start: usize) -> Option<DateTimeMatch<'_>> {
    let date = match_date(text, start)?;
    let time = match_date_time_time(text, date.span.end);
    let zone = time
        .as_ref()
        .and_then(|time| match_zone(text, time.span.end));
    DateTimeMatch::from_parts(Some(date), time, zone)
}
