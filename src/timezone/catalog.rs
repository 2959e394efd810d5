//! Supported time zones and their display names.
//!
//! The catalog is derived once from the IANA database compiled into
//! `chrono-tz` and stays immutable for the lifetime of the process.

use crate::utils::datetime::{format_gmt_offset, format_gmt_offset_long};
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::{OffsetName, Tz, TZ_VARIANTS};
use once_cell::sync::Lazy;

static ALL_TIMEZONES: Lazy<Vec<TimeZoneEntry>> = Lazy::new(|| build_catalog(Utc::now()));

/// Every supported zone, sorted by identifier, with names computed for the
/// moment the catalog was first accessed.
pub fn all_timezones() -> &'static [TimeZoneEntry] {
    &ALL_TIMEZONES
}

/// A zone as shown in the pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeZoneEntry {
    /// IANA identifier, e.g. `Asia/Kolkata`
    pub zone: String,
    /// Last identifier segment with underscores replaced, e.g. `New York`
    pub city: String,
    /// First identifier segment, e.g. `America`
    pub region: String,
    /// Short name such as `EST` or `GMT+5:30`
    pub abbreviation: String,
    /// Long name such as `Eastern Standard Time`
    pub long_name: String,
    search_text: String,
}

impl TimeZoneEntry {
    pub fn new(zone: impl Into<String>, abbreviation: impl Into<String>, long_name: impl Into<String>) -> Self {
        let zone = zone.into();
        let abbreviation = abbreviation.into();
        let long_name = long_name.into();
        let city = city_name(&zone);
        let region = zone.split('/').next().unwrap_or_default().to_string();
        let search_text = format!("{} {} {} {}", city, zone, abbreviation, long_name).to_lowercase();

        Self {
            zone,
            city,
            region,
            abbreviation,
            long_name,
            search_text,
        }
    }

    /// Build an entry for a zone, naming it as of `at`.
    pub fn for_zone(tz: Tz, at: DateTime<Utc>) -> Self {
        let local = at.with_timezone(&tz);
        let offset_minutes = local.offset().fix().local_minus_utc() / 60;
        let abbreviation = short_name(local.offset().abbreviation(), offset_minutes);
        let long_name = long_name(tz.name(), &abbreviation, offset_minutes);
        Self::new(tz.name(), abbreviation, long_name)
    }

    /// Lowercased `"{city} {zone} {abbreviation} {long_name}"`
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

/// Families of deprecated identifiers from tzdata's `backward` file.
const LEGACY_PREFIXES: &[&str] = &["Brazil/", "Canada/", "Chile/", "Etc/", "Mexico/", "SystemV/", "US/"];

/// Renamed or merged identifiers from tzdata's `backward` file. Each one is
/// an alias of a zone that is already listed under its current name.
const LEGACY_LINKS: &[&str] = &[
    "Africa/Asmera",
    "Africa/Timbuktu",
    "America/Argentina/ComodRivadavia",
    "America/Atka",
    "America/Buenos_Aires",
    "America/Catamarca",
    "America/Coral_Harbour",
    "America/Cordoba",
    "America/Ensenada",
    "America/Fort_Wayne",
    "America/Godthab",
    "America/Indianapolis",
    "America/Jujuy",
    "America/Knox_IN",
    "America/Louisville",
    "America/Mendoza",
    "America/Montreal",
    "America/Nipigon",
    "America/Pangnirtung",
    "America/Porto_Acre",
    "America/Rainy_River",
    "America/Rosario",
    "America/Santa_Isabel",
    "America/Shiprock",
    "America/Thunder_Bay",
    "America/Virgin",
    "America/Yellowknife",
    "Antarctica/South_Pole",
    "Asia/Ashkhabad",
    "Asia/Calcutta",
    "Asia/Chongqing",
    "Asia/Chungking",
    "Asia/Dacca",
    "Asia/Harbin",
    "Asia/Istanbul",
    "Asia/Kashgar",
    "Asia/Katmandu",
    "Asia/Macao",
    "Asia/Rangoon",
    "Asia/Saigon",
    "Asia/Tel_Aviv",
    "Asia/Thimbu",
    "Asia/Ujung_Pandang",
    "Asia/Ulan_Bator",
    "Atlantic/Faeroe",
    "Atlantic/Jan_Mayen",
    "Australia/ACT",
    "Australia/Canberra",
    "Australia/Currie",
    "Australia/LHI",
    "Australia/NSW",
    "Australia/North",
    "Australia/Queensland",
    "Australia/South",
    "Australia/Tasmania",
    "Australia/Victoria",
    "Australia/West",
    "Australia/Yancowinna",
    "Europe/Belfast",
    "Europe/Kiev",
    "Europe/Nicosia",
    "Europe/Tiraspol",
    "Europe/Uzhgorod",
    "Europe/Zaporozhye",
    "Pacific/Enderbury",
    "Pacific/Johnston",
    "Pacific/Ponape",
    "Pacific/Samoa",
    "Pacific/Truk",
    "Pacific/Yap",
];

/// Whether `zone` is a current `Area/Location` identifier rather than a
/// backward-compatibility alias like `Asia/Calcutta`, `Eire` or `US/Eastern`.
/// `UTC` is the one single-segment name kept.
pub fn is_canonical(zone: &str) -> bool {
    if zone == "UTC" {
        return true;
    }
    zone.contains('/')
        && !LEGACY_PREFIXES.iter().any(|prefix| zone.starts_with(prefix))
        && !LEGACY_LINKS.contains(&zone)
}

/// Build the catalog of canonical zones with names valid at `at`.
pub fn build_catalog(at: DateTime<Utc>) -> Vec<TimeZoneEntry> {
    let mut zones: Vec<Tz> = TZ_VARIANTS
        .iter()
        .copied()
        .filter(|tz| is_canonical(tz.name()))
        .collect();
    zones.sort_by_key(|tz| tz.name());
    zones.into_iter().map(|tz| TimeZoneEntry::for_zone(tz, at)).collect()
}

/// Display city for a zone identifier: `America/Argentina/Buenos_Aires` →
/// `Buenos Aires`.
pub fn city_name(zone: &str) -> String {
    zone.rsplit('/').next().unwrap_or(zone).replace('_', " ")
}

/// Short and long names for `zone` at an arbitrary instant.
pub fn names_at<Tz2: TimeZone>(tz: Tz, at: &DateTime<Tz2>) -> (String, String) {
    let local = at.with_timezone(&tz);
    let offset_minutes = local.offset().fix().local_minus_utc() / 60;
    let abbreviation = short_name(local.offset().abbreviation(), offset_minutes);
    let long = long_name(tz.name(), &abbreviation, offset_minutes);
    (abbreviation, long)
}

/// tzdb uses numeric placeholders like `+04` where no abbreviation is in
/// common use; those are rendered as `GMT+4`.
fn short_name(abbreviation: Option<&str>, offset_minutes: i32) -> String {
    match abbreviation {
        Some(abbr) if !abbr.is_empty() && abbr.chars().all(|c| c.is_ascii_alphabetic()) => abbr.to_string(),
        _ => format_gmt_offset(offset_minutes),
    }
}

/// Abbreviations whose meaning depends on the zone.
static ZONE_SPECIFIC_NAMES: &[(&str, &str, &str)] = &[
    ("Asia/Shanghai", "CST", "China Standard Time"),
    ("Asia/Macau", "CST", "China Standard Time"),
    ("Asia/Taipei", "CST", "Taipei Standard Time"),
    ("America/Havana", "CST", "Cuba Standard Time"),
    ("America/Havana", "CDT", "Cuba Daylight Time"),
    ("Asia/Manila", "PST", "Philippine Standard Time"),
    ("Europe/Dublin", "IST", "Irish Standard Time"),
    ("Asia/Jerusalem", "IST", "Israel Standard Time"),
    ("Asia/Jerusalem", "IDT", "Israel Daylight Time"),
];

static ABBREVIATION_NAMES: &[(&str, &str)] = &[
    ("UTC", "Coordinated Universal Time"),
    ("GMT", "Greenwich Mean Time"),
    ("BST", "British Summer Time"),
    ("WET", "Western European Standard Time"),
    ("WEST", "Western European Summer Time"),
    ("CET", "Central European Standard Time"),
    ("CEST", "Central European Summer Time"),
    ("EET", "Eastern European Standard Time"),
    ("EEST", "Eastern European Summer Time"),
    ("MSK", "Moscow Standard Time"),
    ("IST", "India Standard Time"),
    ("PKT", "Pakistan Standard Time"),
    ("WIB", "Western Indonesia Time"),
    ("WITA", "Central Indonesia Time"),
    ("WIT", "Eastern Indonesia Time"),
    ("HKT", "Hong Kong Standard Time"),
    ("JST", "Japan Standard Time"),
    ("KST", "Korean Standard Time"),
    ("SAST", "South Africa Standard Time"),
    ("CAT", "Central Africa Time"),
    ("EAT", "East Africa Time"),
    ("WAT", "West Africa Standard Time"),
    ("AWST", "Australian Western Standard Time"),
    ("ACST", "Australian Central Standard Time"),
    ("ACDT", "Australian Central Daylight Time"),
    ("AEST", "Australian Eastern Standard Time"),
    ("AEDT", "Australian Eastern Daylight Time"),
    ("NZST", "New Zealand Standard Time"),
    ("NZDT", "New Zealand Daylight Time"),
    ("HST", "Hawaii-Aleutian Standard Time"),
    ("AKST", "Alaska Standard Time"),
    ("AKDT", "Alaska Daylight Time"),
    ("PST", "Pacific Standard Time"),
    ("PDT", "Pacific Daylight Time"),
    ("MST", "Mountain Standard Time"),
    ("MDT", "Mountain Daylight Time"),
    ("CST", "Central Standard Time"),
    ("CDT", "Central Daylight Time"),
    ("EST", "Eastern Standard Time"),
    ("EDT", "Eastern Daylight Time"),
    ("AST", "Atlantic Standard Time"),
    ("ADT", "Atlantic Daylight Time"),
    ("NST", "Newfoundland Standard Time"),
    ("NDT", "Newfoundland Daylight Time"),
];

fn long_name(zone: &str, abbreviation: &str, offset_minutes: i32) -> String {
    ZONE_SPECIFIC_NAMES
        .iter()
        .find(|(z, abbr, _)| *z == zone && *abbr == abbreviation)
        .map(|(_, _, name)| *name)
        .or_else(|| {
            ABBREVIATION_NAMES
                .iter()
                .find(|(abbr, _)| *abbr == abbreviation)
                .map(|(_, name)| *name)
        })
        .map(str::to_string)
        .unwrap_or_else(|| format_gmt_offset_long(offset_minutes))
}
