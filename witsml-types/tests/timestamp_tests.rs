use chrono::{Datelike, Timelike};
use witsml_types::parse_timestamp;

#[test]
fn parses_rfc3339_with_zone() {
    let ts = parse_timestamp("2023-11-05T08:15:30.250+02:00").unwrap();
    assert_eq!(ts.year(), 2023);
    assert_eq!(ts.hour(), 8);
    assert_eq!(ts.offset().local_minus_utc(), 2 * 3600);
}

#[test]
fn parses_zulu() {
    let ts = parse_timestamp("2001-10-31T08:15:00.000Z").unwrap();
    assert_eq!(ts.offset().local_minus_utc(), 0);
    assert_eq!(ts.minute(), 15);
}

#[test]
fn parses_space_separated_without_zone() {
    let ts = parse_timestamp("2001-10-31 08:15:00").unwrap();
    assert_eq!(ts.day(), 31);
}

#[test]
fn parses_bare_date_as_midnight() {
    let ts = parse_timestamp("2010-01-02").unwrap();
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (0, 0, 0));
}

#[test]
fn rejects_garbage_and_names_it() {
    let err = parse_timestamp("yesterday").unwrap_err();
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn rejects_empty() {
    assert!(parse_timestamp("").is_err());
}
