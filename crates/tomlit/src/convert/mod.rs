//! Literal converter: turns matched fragments into typed values.
//!
//! Conversion is a second stage after matching. The matcher only checks the
//! literal grammar; everything the calendar knows about (month lengths, leap
//! years) is checked here, by asking `jiff` to build the value.

mod datetime;
mod float;
mod number;

pub use datetime::{to_date_time, to_local_time};
pub use float::{FloatParser, StdFloat};
pub use number::to_number;

/// Value of a run of ASCII digits.
///
/// Callers pass fragments produced by the matcher, which are at most six
/// ASCII digits long.
fn ascii_digits(s: &str) -> i32 {
    s.bytes()
        .fold(0, |acc, b| acc * 10 + i32::from(b.wrapping_sub(b'0')))
}
