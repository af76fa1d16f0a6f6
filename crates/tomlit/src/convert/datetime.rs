use jiff::civil::{Date, DateTime, Time};

use super::ascii_digits;
use crate::{
    Error, Value, ZonedDateTime,
    matcher::{DateMatch, DateTimeMatch, TimeMatch, ZoneMatch, ZoneOffset},
    tz::{OffsetCache, TzHandle},
};

/// Fraction digits are right-padded to this many places (microseconds).
const FRACTION_DIGITS: usize = 6;

/// Converts a matched date, local time, local date-time or zoned date-time.
///
/// Fails with [`Error::InvalidCalendarValue`] when the date does not exist,
/// e.g. `2021-02-30` or `2021-04-31`. Fixed offsets are looked up in (and
/// added to) `cache`; `Z` maps to [`TzHandle::utc`].
pub fn to_date_time<F>(m: &DateTimeMatch<'_>, cache: &OffsetCache) -> Result<Value<F>, Error> {
    match m {
        DateTimeMatch::Date(date) => to_date(date).map(Value::LocalDate),
        DateTimeMatch::LocalTime(time) => to_local_time(time).map(Value::LocalTime),
        DateTimeMatch::LocalDateTime(date, time) => {
            Ok(Value::LocalDateTime(DateTime::from_parts(to_date(date)?, to_local_time(time)?)))
        }
        DateTimeMatch::ZonedDateTime(date, time, zone) => {
            let datetime = DateTime::from_parts(to_date(date)?, to_local_time(time)?);
            Ok(Value::ZonedDateTime(ZonedDateTime::new(datetime, to_zone(zone, cache)?)))
        }
    }
}

/// Converts a matched local time, keeping microsecond precision.
///
/// A fraction is right-padded rather than scaled, so `.5` is 500000
/// microseconds. Digits past the sixth never reach this point.
#[allow(clippy::cast_possible_truncation)]
pub fn to_local_time(m: &TimeMatch<'_>) -> Result<Time, Error> {
    let micros = m.fraction().map_or(0, |fraction| {
        (fraction.len()..FRACTION_DIGITS).fold(ascii_digits(fraction), |acc, _| acc * 10)
    });
    Time::new(
        ascii_digits(m.hour()) as i8,
        ascii_digits(m.minute()) as i8,
        ascii_digits(m.second()) as i8,
        micros * 1_000,
    )
    .map_err(|source| {
        let literal = format!("{}:{}:{}", m.hour(), m.minute(), m.second());
        Error::calendar(&literal, source)
    })
}

#[allow(clippy::cast_possible_truncation)]
fn to_date(m: &DateMatch<'_>) -> Result<Date, Error> {
    Date::new(
        ascii_digits(m.year()) as i16,
        ascii_digits(m.month()) as i8,
        ascii_digits(m.day()) as i8,
    )
    .map_err(|source| {
        let literal = format!("{}-{}-{}", m.year(), m.month(), m.day());
        Error::calendar(&literal, source)
    })
}

fn to_zone(m: &ZoneMatch<'_>, cache: &OffsetCache) -> Result<TzHandle, Error> {
    match m.offset() {
        ZoneOffset::Utc => Ok(TzHandle::utc()),
        ZoneOffset::Fixed { sign, hour, minute } => cache.get_or_create(sign, hour, minute),
    }
}
