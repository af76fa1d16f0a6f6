use rstest::rstest;

use super::*;

fn number(text: &str) -> Option<(&str, NumberKind)> {
    match_number(text, 0).map(|m| (m.as_str(), m.kind()))
}

#[rstest]
#[case("0", "0", NumberKind::Integer(Radix::Decimal))]
#[case("+99", "+99", NumberKind::Integer(Radix::Decimal))]
#[case("-17 ", "-17", NumberKind::Integer(Radix::Decimal))]
#[case("1_000,", "1_000", NumberKind::Integer(Radix::Decimal))]
#[case("0xDEAD_beef", "0xDEAD_beef", NumberKind::Integer(Radix::Hexadecimal))]
#[case("0o01234567", "0o01234567", NumberKind::Integer(Radix::Octal))]
#[case("0b11010110]", "0b11010110", NumberKind::Integer(Radix::Binary))]
#[case("1.0", "1.0", NumberKind::Float)]
#[case("1e10", "1e10", NumberKind::Float)]
#[case("-0.01", "-0.01", NumberKind::Float)]
#[case("6.626e-34", "6.626e-34", NumberKind::Float)]
#[case("5e+22", "5e+22", NumberKind::Float)]
#[case("9_224_617.445_991_228_313", "9_224_617.445_991_228_313", NumberKind::Float)]
fn numbers(#[case] text: &str, #[case] matched: &str, #[case] kind: NumberKind) {
    assert_eq!(number(text), Some((matched, kind)));
}

/// Underscores must sit between two digits; a bad one ends the match.
#[rstest]
#[case("1__000", "1")]
#[case("1_", "1")]
#[case("1_000_", "1_000")]
#[case("0x_ff", "0")]
#[case("0xff__f", "0xff")]
#[case("1._5", "1")]
#[case("1.5_", "1.5")]
#[case("1e_5", "1")]
#[case("1e5_", "1e5")]
fn underscore_placement(#[case] text: &str, #[case] matched: &str) {
    assert_eq!(match_number(text, 0).unwrap().as_str(), matched);
}

#[rstest]
#[case("00", "0")]
#[case("01", "0")]
#[case("0x", "0")]
#[case("0b2", "0")]
#[case("0o8", "0")]
#[case("1.", "1")]
#[case("1.e5", "1")]
#[case("1e", "1")]
#[case("1e+", "1")]
#[case("3.14.15", "3.14")]
fn longest_valid_prefix(#[case] text: &str, #[case] matched: &str) {
    assert_eq!(match_number(text, 0).unwrap().as_str(), matched);
}

#[rstest]
#[case("")]
#[case("_1")]
#[case(".5")]
#[case("+")]
#[case("-_1")]
#[case("inf")]
#[case("x10")]
fn not_numbers(#[case] text: &str) {
    assert_eq!(number(text), None);
}

/// Radix prefixes take no sign; the sign binds to a decimal zero instead.
#[test]
fn signed_prefix_is_a_decimal_zero() {
    assert_eq!(number("+0x10"), Some(("+0", NumberKind::Integer(Radix::Decimal))));
    assert_eq!(number("-0b1"), Some(("-0", NumberKind::Integer(Radix::Decimal))));
}

#[test]
fn prefix_is_excluded_from_digits() {
    let m = match_number("0x1A", 0).unwrap();
    assert_eq!(m.digits(), "1A");
    let m = match_number("-1_0", 0).unwrap();
    assert_eq!(m.digits(), "-1_0");
}

#[test]
fn spans_are_absolute() {
    let text = "a = [ 1, 22, 0o7 ]";
    let m = match_number(text, 9).unwrap();
    assert_eq!((m.as_str(), m.span()), ("22", 9..11));
    let m = match_number(text, 13).unwrap();
    assert_eq!((m.as_str(), m.span()), ("0o7", 13..16));
    assert!(match_number(text, 8).is_none());
}

#[test]
fn bad_start_positions() {
    assert!(match_number("12", 3).is_none());
    assert!(match_number("é1", 1).is_none());
    assert!(match_number("12", 2).is_none());
    assert!(match_local_time("é", 1).is_none());
    assert!(match_date_time_parts("1979-05-27", 11).is_none());
}

#[rstest]
#[case("inf", "inf")]
#[case("+inf", "+inf")]
#[case("-nan,", "-nan")]
#[case("infinity", "inf")]
fn special_floats(#[case] text: &str, #[case] matched: &str) {
    let m = match_special_float(text, 0).unwrap();
    assert_eq!((m.as_str(), m.kind()), (matched, NumberKind::Float));
}

#[rstest]
#[case("Inf")]
#[case("NaN")]
#[case("in")]
fn not_special_floats(#[case] text: &str) {
    assert!(match_special_float(text, 0).is_none());
}

#[rstest]
#[case("00:00:00", ("00", "00", "00", None), 0..8)]
#[case("23:59:59", ("23", "59", "59", None), 0..8)]
#[case("07:32:00.5", ("07", "32", "00", Some("5")), 0..10)]
#[case("07:32:00.999999", ("07", "32", "00", Some("999999")), 0..15)]
#[case("07:32:00.123456789 #", ("07", "32", "00", Some("123456")), 0..18)]
#[case("07:32:00. ", ("07", "32", "00", None), 0..8)]
fn local_times(
    #[case] text: &str,
    #[case] parts: (&str, &str, &str, Option<&str>),
    #[case] span: core::ops::Range<usize>,
) {
    let m = match_local_time(text, 0).unwrap();
    assert_eq!((m.hour(), m.minute(), m.second(), m.fraction()), parts);
    assert_eq!(m.span(), span);
}

#[rstest]
#[case("24:00:00")]
#[case("12:60:00")]
#[case("12:00:60")]
#[case("7:32:00")]
#[case("07:32")]
#[case("07-32-00")]
fn not_local_times(#[case] text: &str) {
    assert!(match_local_time(text, 0).is_none());
}

#[test]
fn date_only() {
    let m = match_date_time_parts("1979-05-27", 0).unwrap();
    let DateTimeMatch::Date(date) = &m else {
        panic!("expected date-only, got {m:?}");
    };
    assert_eq!((date.year(), date.month(), date.day()), ("1979", "05", "27"));
    assert_eq!(m.span(), 0..10);
}

#[test]
fn date_with_unconsumed_separator() {
    for text in ["1979-05-27 # birthday", "1979-05-27T", "1979-05-27 07:32"] {
        let m = match_date_time_parts(text, 0).unwrap();
        assert!(matches!(m, DateTimeMatch::Date(_)), "{text}");
        assert_eq!(m.span(), 0..10, "{text}");
    }
}

#[rstest]
#[case("1979-05-27T07:32:00")]
#[case("1979-05-27t07:32:00")]
#[case("1979-05-27 07:32:00")]
fn local_date_times(#[case] text: &str) {
    let m = match_date_time_parts(text, 0).unwrap();
    let DateTimeMatch::LocalDateTime(_, time) = &m else {
        panic!("expected local date-time, got {m:?}");
    };
    assert_eq!(time.span(), 11..19);
    assert_eq!(m.span(), 0..19);
}

#[rstest]
#[case("1979-05-27T07:32:00Z", ZoneOffset::Utc)]
#[case("1979-05-27T07:32:00z", ZoneOffset::Utc)]
#[case("1979-05-27T07:32:00+05:30", ZoneOffset::Fixed { sign: Sign::Plus, hour: "05", minute: "30" })]
#[case("1979-05-27T07:32:00-23:59", ZoneOffset::Fixed { sign: Sign::Minus, hour: "23", minute: "59" })]
fn zoned_date_times(#[case] text: &str, #[case] offset: ZoneOffset<'static>) {
    let m = match_date_time_parts(text, 0).unwrap();
    let DateTimeMatch::ZonedDateTime(_, _, zone) = &m else {
        panic!("expected zoned date-time, got {m:?}");
    };
    assert_eq!(zone.offset(), offset);
    assert_eq!(m.span(), 0..text.len());
}

#[rstest]
#[case("1979-05-27T07:32:00+24:00")]
#[case("1979-05-27T07:32:00+05:60")]
#[case("1979-05-27T07:32:00+0530")]
#[case("1979-05-27T07:32:00 Z")]
fn bad_zone_leaves_a_local_date_time(#[case] text: &str) {
    let m = match_date_time_parts(text, 0).unwrap();
    assert!(matches!(m, DateTimeMatch::LocalDateTime(..)), "{text}");
    assert_eq!(m.span(), 0..19);
}

#[rstest]
#[case("1979-13-01")]
#[case("1979-00-01")]
#[case("1979-05-32")]
#[case("1979-05-00")]
#[case("79-05-27")]
#[case("1979-5-27")]
#[case("1979/05/27")]
fn not_dates(#[case] text: &str) {
    assert!(match_date_time_parts(text, 0).is_none());
}

#[test]
fn calendar_is_not_checked_by_the_matcher() {
    assert!(match_date_time_parts("2021-02-30T10:00:00", 0).is_some());
    assert!(match_date_time_parts("2021-04-31", 0).is_some());
}

#[test]
fn zone_without_time_is_not_a_date_time() {
    let date = match_date_time_parts("1979-05-27", 0).and_then(|m| m.date().cloned());
    let zone = match_date_time_parts("1979-05-27T00:00:00Z", 0).and_then(|m| m.parts().2.cloned());
    assert!(zone.is_some());
    assert_eq!(DateTimeMatch::from_parts(date.clone(), None, zone), None);
    assert_eq!(DateTimeMatch::from_parts(None, None, None), None);
    assert!(matches!(
        DateTimeMatch::from_parts(date, None, None),
        Some(DateTimeMatch::Date(_))
    ));
}

#[test]
fn time_without_date_is_a_local_time() {
    let time = match_local_time("10:00:00.25", 0).unwrap();
    let zone = match_date_time_parts("1979-05-27T00:00:00Z", 0).and_then(|m| m.parts().2.cloned());

    let m = DateTimeMatch::from_parts(None, Some(time.clone()), None).unwrap();
    assert_eq!(m, DateTimeMatch::LocalTime(time.clone()));
    assert_eq!(m.parts(), (None, Some(&time), None));
    assert_eq!(m.date(), None);
    assert_eq!(m.span(), 0..11);

    assert_eq!(DateTimeMatch::from_parts(None, Some(time), zone), None);
}

#[test]
fn parts_round_trip_through_from_parts() {
    let m = match_date_time_parts("1979-05-27T07:32:00.999-07:00", 0).unwrap();
    let (date, time, zone) = m.parts();
    let rebuilt = DateTimeMatch::from_parts(date.cloned(), time.cloned(), zone.cloned());
    assert_eq!(rebuilt, Some(m));
}
