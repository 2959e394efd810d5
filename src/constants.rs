//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Timezone search limits
/// Maximum number of zones returned for a non-empty query
pub const SEARCH_RESULT_LIMIT: usize = 100;
/// Number of zones shown when the query is empty
pub const EMPTY_QUERY_LIMIT: usize = 50;

// Timezone defaults
pub const DEFAULT_HOME_ZONE: &str = "Asia/Kolkata";
pub const DEFAULT_TARGET_ZONE: &str = "America/Toronto";

// Currency defaults
pub const DEFAULT_BASE_CURRENCY: &str = "USD";
pub const DEFAULT_TARGET_CURRENCY: &str = "EUR";
pub const DEFAULT_AMOUNT: &str = "100";
pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest";
pub const DEFAULT_HISTORY_URL: &str = "https://api.frankfurter.app";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const HTTP_USER_AGENT: &str = concat!("convertist/", env!("CARGO_PKG_VERSION"));

// Display fallbacks
pub const INVALID_DATETIME: &str = "Invalid DateTime";
pub const NO_RESULTS: &str = "No results found";
pub const NO_TARGET_CITIES: &str = "No target cities added - press 'a' to add your first city";
pub const LOADING_TREND: &str = "Loading trend data...";
pub const RATE_PENDING: &str = "…";
pub const SHOE_SIZE_NOTE: &str =
    "Sizes may vary slightly between brands. For the best fit, measure your foot length in centimeters.";

// Date/time display formats
pub const TIME_FORMAT: &str = "%H:%M";
pub const LONG_DATE_FORMAT: &str = "%A, %-d %b %Y";
pub const SHORT_DATE_FORMAT: &str = "%a, %-d %b";

// Dialog titles
pub const TITLE_HOME_PICKER: &str = " Change Home City ";
pub const TITLE_TARGET_PICKER: &str = " Add Target City ";
pub const TITLE_BASE_PICKER: &str = " Select Base Currency ";
pub const TITLE_TARGET_CURRENCY_PICKER: &str = " Select Target Currency ";
pub const TITLE_DATETIME_PICKER: &str = " Adjust Time & Date ";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";

// Log messages
pub const LOG_ERROR_FETCH_RATES: &str = "❌ Failed to fetch rates";
pub const LOG_ERROR_FETCH_HISTORY: &str = "❌ History fetch failed";

// UI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI layout constants
/// Height of the bottom tab bar in lines
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of a single target-city card in lines
pub const TARGET_CARD_HEIGHT: u16 = 4;
