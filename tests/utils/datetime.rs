use chrono::{Local, NaiveDate, NaiveTime};
use convertist::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(parse_date(" 2024-03-01 ").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("15/01/2025").is_err());
}

#[test]
fn test_parse_and_format_time() {
    let time = parse_time("07:05").unwrap();
    assert_eq!(time, NaiveTime::from_hms_opt(7, 5, 0).unwrap());
    assert_eq!(format_hm(time), "07:05");
    assert!(parse_time("24:00").is_err());
    assert!(parse_time("noon").is_err());
}

#[test]
fn test_format_today() {
    let today = Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(format_today(), today);
    assert!(parse_time(&format_now_hm()).is_ok());
}

#[test]
fn test_format_gmt_offset() {
    assert_eq!(format_gmt_offset(0), "GMT");
    assert_eq!(format_gmt_offset(240), "GMT+4");
    assert_eq!(format_gmt_offset(330), "GMT+5:30");
    assert_eq!(format_gmt_offset(-210), "GMT-3:30");
    assert_eq!(format_gmt_offset(345), "GMT+5:45");
}

#[test]
fn test_format_gmt_offset_long() {
    assert_eq!(format_gmt_offset_long(0), "GMT");
    assert_eq!(format_gmt_offset_long(330), "GMT+05:30");
    assert_eq!(format_gmt_offset_long(-600), "GMT-10:00");
}

#[test]
fn test_format_hours() {
    assert_eq!(format_hours(5.0), "5");
    assert_eq!(format_hours(-9.5), "-9.5");
    assert_eq!(format_hours(5.75), "5.75");
    assert_eq!(format_hours(0.0), "0");
}
