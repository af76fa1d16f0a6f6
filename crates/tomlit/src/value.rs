use core::fmt;

use jiff::{
    Timestamp, Zoned,
    civil::{Date, DateTime, Time},
    tz::Offset,
};

use crate::tz::TzHandle;

/// A converted scalar literal.
///
/// `F` is whatever the float parser produces; [`StdFloat`] yields `f64`.
///
/// `Display` writes the canonical literal form, which converts back to an
/// equal value:
///
/// ```rust
/// use tomlit::Converter;
///
/// let conv = Converter::new();
/// let (value, _) = conv.parse_scalar("1_000", 0).unwrap().unwrap();
/// assert_eq!(value.to_string(), "1000");
/// let (value, _) = conv.parse_scalar("1979-05-27 07:32:00.5-07:00", 0).unwrap().unwrap();
/// assert_eq!(value.to_string(), "1979-05-27T07:32:00.5-07:00");
/// ```
///
/// [`StdFloat`]: crate::StdFloat
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value<F = f64> {
    Integer(i64),
    Float(F),
    LocalTime(Time),
    LocalDate(Date),
    LocalDateTime(DateTime),
    ZonedDateTime(ZonedDateTime),
}

impl<F> Value<F> {
    /// Short name of the variant, as used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::LocalTime(_) => "local time",
            Value::LocalDate(_) => "local date",
            Value::LocalDateTime(_) => "local date-time",
            Value::ZonedDateTime(_) => "offset date-time",
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<&F> {
        match self {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

/// A wall-clock date-time pinned to a fixed UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDateTime {
    datetime: DateTime,
    zone: TzHandle,
}

impl ZonedDateTime {
    #[must_use]
    pub fn new(datetime: DateTime, zone: TzHandle) -> Self {
        Self { datetime, zone }
    }

    /// The date-time as written, before applying the offset.
    #[must_use]
    pub fn datetime(&self) -> DateTime {
        self.datetime
    }

    #[must_use]
    pub fn zone(&self) -> &TzHandle {
        &self.zone
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.zone.offset()
    }

    /// The instant this date-time denotes.
    ///
    /// Fails only when applying the offset leaves jiff's supported range,
    /// e.g. `9999-12-31T23:59:59-23:59`.
    pub fn timestamp(&self) -> Result<Timestamp, jiff::Error> {
        self.offset().to_timestamp(self.datetime)
    }

    pub fn to_zoned(&self) -> Result<Zoned, jiff::Error> {
        self.datetime.to_zoned(self.zone.time_zone().clone())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ZonedDateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct CanonicalDate(Date);

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        write!(f, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
    }
}

struct CanonicalTime(Time);

impl fmt::Display for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(f, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())?;
        let micros = t.subsec_nanosecond() / 1_000;
        if micros != 0 {
            let digits = format!("{micros:06}");
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{}{}",
            CanonicalDate(self.datetime.date()),
            CanonicalTime(self.datetime.time()),
            self.zone,
        )
    }
}

impl<F: fmt::Debug> fmt::Display for Value<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            // `Debug` keeps the `.0` on integral floats.
            Value::Float(x) => match format!("{x:?}").as_str() {
                "NaN" => f.write_str("nan"),
                s => f.write_str(s),
            },
            Value::LocalTime(t) => write!(f, "{}", CanonicalTime(*t)),
            Value::LocalDate(d) => write!(f, "{}", CanonicalDate(*d)),
            Value::LocalDateTime(dt) => {
                write!(f, "{}T{}", CanonicalDate(dt.date()), CanonicalTime(dt.time()))
            }
            Value::ZonedDateTime(zdt) => write!(f, "{zdt}"),
        }
    }
}
