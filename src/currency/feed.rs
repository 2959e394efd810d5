//! Exchange-rate feed abstraction.
//!
//! This module defines the interface the currency tab fetches rates through,
//! along with its error type and the HTTP implementation used at runtime.

use super::history::RateHistoryPoint;
use crate::constants::{DEFAULT_HISTORY_URL, DEFAULT_RATES_URL, DEFAULT_REQUEST_TIMEOUT_SECS, HTTP_USER_AGENT};
use crate::utils::datetime::{self, format_ymd};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Common error types for feed operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid data: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}

/// Latest rates relative to one base currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateSnapshot {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl ExchangeRateSnapshot {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }

    /// Rate for `target`, only if this snapshot was taken for `base`.
    pub fn rate_for(&self, base: &str, target: &str) -> Option<f64> {
        if self.base != base {
            return None;
        }
        self.rates.get(target).copied()
    }
}

/// Source of exchange rates.
#[async_trait]
pub trait RateFeed: Send + Sync {
    /// Current rates for every currency, relative to `base`.
    async fn fetch_latest(&self, base: &str) -> Result<ExchangeRateSnapshot, FeedError>;

    /// Daily `base`→`target` rates for the inclusive window, oldest first.
    async fn fetch_history(
        &self,
        base: &str,
        target: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RateHistoryPoint>, FeedError>;
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    rates: BTreeMap<String, HashMap<String, f64>>,
}

/// Parse a `{"rates": {"EUR": 0.92, ...}}` body.
pub fn parse_latest_response(base: &str, body: &str) -> Result<ExchangeRateSnapshot, FeedError> {
    let response: LatestResponse = serde_json::from_str(body)?;
    Ok(ExchangeRateSnapshot::new(base, response.rates))
}

/// Parse a `{"rates": {"2024-01-02": {"EUR": 0.91}, ...}}` body into points
/// ordered by date. Days without a `target` rate are skipped.
pub fn parse_history_response(target: &str, body: &str) -> Result<Vec<RateHistoryPoint>, FeedError> {
    let response: HistoryResponse = serde_json::from_str(body)?;
    response
        .rates
        .into_iter()
        .filter_map(|(date, rates)| rates.get(target).map(|rate| (date, *rate)))
        .map(|(date, rate)| {
            datetime::parse_date(&date)
                .map(|date| RateHistoryPoint { date, rate })
                .map_err(|e| FeedError::Parse(format!("bad date '{}': {}", date, e)))
        })
        .collect()
}

/// Feed backed by the public exchangerate-api / frankfurter endpoints.
#[derive(Debug, Clone)]
pub struct HttpRateFeed {
    client: reqwest::Client,
    rates_url: String,
    history_url: String,
}

impl HttpRateFeed {
    pub fn new(rates_url: impl Into<String>, history_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build HTTP client ({}), using defaults without timeout", e);
                reqwest::Client::new()
            });

        Self {
            client,
            rates_url: rates_url.into().trim_end_matches('/').to_string(),
            history_url: history_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn latest_url(&self, base: &str) -> String {
        format!("{}/{}", self.rates_url, base)
    }

    pub fn history_url(&self, base: &str, target: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/{}..{}?from={}&to={}",
            self.history_url,
            format_ymd(start),
            format_ymd(end),
            base,
            target
        )
    }

    async fn get_body(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

impl Default for HttpRateFeed {
    fn default() -> Self {
        Self::new(
            DEFAULT_RATES_URL,
            DEFAULT_HISTORY_URL,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[async_trait]
impl RateFeed for HttpRateFeed {
    async fn fetch_latest(&self, base: &str) -> Result<ExchangeRateSnapshot, FeedError> {
        let body = self.get_body(&self.latest_url(base)).await?;
        parse_latest_response(base, &body)
    }

    async fn fetch_history(
        &self,
        base: &str,
        target: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RateHistoryPoint>, FeedError> {
        let body = self.get_body(&self.history_url(base, target, start, end)).await?;
        parse_history_response(target, &body)
    }
}
