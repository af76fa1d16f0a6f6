//! Recognition and conversion of TOML scalar literals.
//!
//! This crate sits underneath a document parser. It answers two questions
//! about the text at a given position: *is there a number, time, date or
//! date-time literal here, and how long is it?* ([`matcher`]), and *what
//! value does it denote?* ([`convert`]). Tables, keys, arrays and strings are
//! the document parser's business.
//!
//! ```rust
//! use tomlit::{Converter, Value, match_date_time_parts};
//!
//! let conv = Converter::new();
//!
//! let m = match_date_time_parts("dob = 1979-05-27T07:32:00-08:00", 6).unwrap();
//! assert_eq!(m.span(), 6..31);
//! let Value::ZonedDateTime(dob) = conv.date_time(&m).unwrap() else { unreachable!() };
//! assert_eq!(dob.offset().seconds(), -8 * 3600);
//!
//! // Syntactically fine, but April has 30 days.
//! let m = match_date_time_parts("2021-04-31", 0).unwrap();
//! assert!(conv.date_time(&m).unwrap_err().is_invalid_calendar_value());
//! ```
//!
//! # Features
//!
//! - `logging`: emit [`log`](https://docs.rs/log) records for offset cache
//!   misses and rejected calendar values.
//! - `serde`: `Serialize` for [`Value`].

#![allow(missing_docs)]

#[macro_use]
mod logging;

pub mod convert;
mod error;
pub mod matcher;
mod scalar;
mod tz;
mod value;

#[cfg(test)]
mod tests;

pub use convert::{FloatParser, StdFloat, to_date_time, to_local_time, to_number};
pub use error::{BoxError, Error};
pub use matcher::{
    DateMatch, DateTimeMatch, NumberKind, NumberMatch, Radix, Sign, TimeMatch, ZoneMatch,
    ZoneOffset, match_date_time_parts, match_local_time, match_number, match_special_float,
};
pub use scalar::{Converter, ScalarMatch, match_scalar};
pub use tz::{OffsetCache, TzHandle};
pub use value::{Value, ZonedDateTime};
