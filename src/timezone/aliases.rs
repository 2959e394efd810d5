//! Abbreviation alias table.
//!
//! Abbreviations like `IST` are not part of the zone identifier or the city
//! name, so a search for them needs an explicit mapping.

/// Uppercase abbreviation → canonical zone identifiers.
pub static ABBREVIATION_ALIASES: &[(&str, &[&str])] = &[
    ("IST", &["Asia/Kolkata"]),
    ("EST", &["America/New_York"]),
    ("EDT", &["America/New_York"]),
    ("CST", &["America/Chicago"]),
    ("CDT", &["America/Chicago"]),
    ("MST", &["America/Denver"]),
    ("MDT", &["America/Denver"]),
    ("PST", &["America/Los_Angeles"]),
    ("PDT", &["America/Los_Angeles"]),
    ("GMT", &["UTC"]),
    ("UTC", &["UTC"]),
    ("BST", &["Europe/London"]),
    ("CET", &["Europe/Paris"]),
    ("CEST", &["Europe/Paris"]),
    ("JST", &["Asia/Tokyo"]),
    ("SGT", &["Asia/Singapore"]),
    ("HKT", &["Asia/Hong_Kong"]),
    ("AEST", &["Australia/Sydney"]),
    ("AEDT", &["Australia/Sydney"]),
    ("NZST", &["Pacific/Auckland"]),
    ("NZDT", &["Pacific/Auckland"]),
];

/// Look up the zones an abbreviation stands for. The key must already be
/// uppercase; callers normalise the query first.
pub fn lookup(abbreviation: &str) -> Option<&'static [&'static str]> {
    ABBREVIATION_ALIASES
        .iter()
        .find(|(key, _)| *key == abbreviation)
        .map(|(_, zones)| *zones)
}

/// Whether `zone` is one of the zones the abbreviation stands for
pub fn is_alias_of(abbreviation: &str, zone: &str) -> bool {
    lookup(abbreviation).is_some_and(|zones| zones.contains(&zone))
}
