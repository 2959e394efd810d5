//! Currency conversion backed by a remote exchange-rate feed.
//!
//! - [`catalog`] - the static list of supported currencies
//! - [`convert`] - amount parsing, conversion and number formatting
//! - [`history`] - rate-history windows and chart normalization
//! - [`feed`] - the [`RateFeed`] trait and its HTTP implementation
//! - [`state`] - tab state with stale-response protection

pub mod catalog;
pub mod convert;
pub mod feed;
pub mod history;
pub mod state;

pub use catalog::{filter_currencies, find_currency, CurrencyEntry, CURRENCIES};
pub use convert::{convert, format_amount, format_rate, parse_amount};
pub use feed::{ExchangeRateSnapshot, FeedError, HttpRateFeed, RateFeed};
pub use history::{chart_points, ChartPoint, RateHistoryPoint, TimeRange};
pub use state::{ApplyOutcome, CurrencyState, FetchKind, FetchTicket};
