//! Date and time utility functions
//!
//! Parsing and formatting helpers shared by the timezone resolver, the
//! currency history window and the UI.

use chrono::{Local, NaiveDate, NaiveTime};

/// Calendar date format used for user input and for the history API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock time format used for user input
pub const HM_FORMAT: &str = "%H:%M";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
}

/// Parse a time string in HH:MM format to NaiveTime
pub fn parse_time(time_str: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(time_str.trim(), HM_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format a NaiveTime to HH:MM string
pub fn format_hm(t: NaiveTime) -> String {
    t.format(HM_FORMAT).to_string()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Format current local time to HH:MM string
pub fn format_now_hm() -> String {
    format_hm(Local::now().time())
}

/// Format a UTC offset the way `Intl.DateTimeFormat` names zones without an
/// abbreviation: `GMT`, `GMT+4`, `GMT-3:30`.
pub fn format_gmt_offset(offset_minutes: i32) -> String {
    if offset_minutes == 0 {
        return "GMT".to_string();
    }
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let abs = offset_minutes.unsigned_abs();
    let (hours, minutes) = (abs / 60, abs % 60);
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

/// Format a UTC offset with zero-padded hours and minutes: `GMT+05:30`.
pub fn format_gmt_offset_long(offset_minutes: i32) -> String {
    if offset_minutes == 0 {
        return "GMT".to_string();
    }
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let abs = offset_minutes.unsigned_abs();
    format!("GMT{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

/// Format an hour count without trailing zeros (`5`, `-9.5`, `5.75`)
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}
