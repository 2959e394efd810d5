//! Free-text zone search.

use super::aliases;
use super::catalog::TimeZoneEntry;
use crate::constants::{EMPTY_QUERY_LIMIT, SEARCH_RESULT_LIMIT};

/// Filter `zones` by a free-text query.
///
/// The query is split on whitespace and every term must appear in the
/// entry's city, identifier, abbreviation or long name. Independently, if the
/// whole query is a known abbreviation (`IST`, `PST`, ...) the zones it stands
/// for match too. Results keep the catalog order; an empty query returns the
/// head of the catalog.
pub fn search<'a>(zones: &'a [TimeZoneEntry], query: &str) -> Vec<&'a TimeZoneEntry> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return zones.iter().take(EMPTY_QUERY_LIMIT).collect();
    }

    let terms: Vec<&str> = normalized.split_whitespace().collect();
    let alias_key = normalized.to_uppercase();

    zones
        .iter()
        .filter(|entry| {
            terms.iter().all(|term| entry.search_text().contains(term)) || aliases::is_alias_of(&alias_key, &entry.zone)
        })
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}
