//! Currency tab state.
//!
//! Rate and history fetches complete asynchronously and may finish out of
//! order. Each fetch is issued with a [`FetchTicket`] carrying a generation
//! number; a response is applied only if no newer fetch of the same kind has
//! been issued since.

use super::catalog::{find_currency, CurrencyEntry};
use super::convert::{convert, format_amount, format_rate};
use super::feed::{ExchangeRateSnapshot, FeedError};
use super::history::{chart_points, rate_bounds, ChartPoint, RateHistoryPoint, TimeRange};
use crate::constants::{LOG_ERROR_FETCH_HISTORY, LOG_ERROR_FETCH_RATES, RATE_PENDING};
use chrono::NaiveDate;

/// Which remote request a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Rates,
    History,
}

/// The inputs a fetch was issued for, plus its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: FetchKind,
    pub generation: u64,
    pub base: String,
    pub target: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// What happened to a fetch response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer fetch of the same kind was issued; the response was dropped.
    Stale,
    /// The fetch failed; previous data was kept.
    Failed,
}

#[derive(Debug, Clone)]
pub struct CurrencyState {
    amount: String,
    base: String,
    target: String,
    range: TimeRange,
    snapshot: Option<ExchangeRateSnapshot>,
    history: Vec<RateHistoryPoint>,
    rates_generation: u64,
    history_generation: u64,
    rates_loading: bool,
    history_loading: bool,
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_BASE_CURRENCY,
            crate::constants::DEFAULT_TARGET_CURRENCY,
            crate::constants::DEFAULT_AMOUNT,
            TimeRange::default(),
        )
    }
}

impl CurrencyState {
    pub fn new(
        base: impl Into<String>,
        target: impl Into<String>,
        amount: impl Into<String>,
        range: TimeRange,
    ) -> Self {
        Self {
            amount: amount.into(),
            base: base.into(),
            target: target.into(),
            range,
            snapshot: None,
            history: Vec::new(),
            rates_generation: 0,
            history_generation: 0,
            rates_loading: false,
            history_loading: false,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn history(&self) -> &[RateHistoryPoint] {
        &self.history
    }

    pub fn snapshot(&self) -> Option<&ExchangeRateSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn base_info(&self) -> Option<&'static CurrencyEntry> {
        find_currency(&self.base)
    }

    pub fn target_info(&self) -> Option<&'static CurrencyEntry> {
        find_currency(&self.target)
    }

    pub fn is_loading(&self) -> bool {
        self.rates_loading || self.history_loading
    }

    pub fn is_history_loading(&self) -> bool {
        self.history_loading
    }

    // Inputs

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    /// Append a typed character if it can be part of a number.
    pub fn push_amount_char(&mut self, c: char) -> bool {
        let accepted = c.is_ascii_digit() || (c == '.' && !self.amount.contains('.'));
        if accepted {
            self.amount.push(c);
        }
        accepted
    }

    pub fn pop_amount_char(&mut self) {
        self.amount.pop();
    }

    /// Change the base currency. Returns the fetches this triggers.
    pub fn set_base(&mut self, code: impl Into<String>) -> Vec<FetchKind> {
        let code = code.into();
        if code == self.base {
            return Vec::new();
        }
        self.base = code;
        vec![FetchKind::Rates, FetchKind::History]
    }

    /// Change the target currency. Returns the fetches this triggers.
    pub fn set_target(&mut self, code: impl Into<String>) -> Vec<FetchKind> {
        let code = code.into();
        if code == self.target {
            return Vec::new();
        }
        self.target = code;
        vec![FetchKind::History]
    }

    /// Exchange base and target. Returns the fetches this triggers.
    pub fn swap(&mut self) -> Vec<FetchKind> {
        if self.base == self.target {
            return Vec::new();
        }
        std::mem::swap(&mut self.base, &mut self.target);
        vec![FetchKind::Rates, FetchKind::History]
    }

    pub fn set_range(&mut self, range: TimeRange) -> Vec<FetchKind> {
        if range == self.range {
            return Vec::new();
        }
        self.range = range;
        vec![FetchKind::History]
    }

    pub fn cycle_range(&mut self) -> Vec<FetchKind> {
        self.set_range(self.range.next())
    }

    // Fetch lifecycle

    /// Issue a ticket for a new fetch of `kind`, superseding any in flight.
    pub fn begin_fetch(&mut self, kind: FetchKind, today: NaiveDate) -> FetchTicket {
        let generation = match kind {
            FetchKind::Rates => {
                self.rates_generation += 1;
                self.rates_loading = true;
                self.rates_generation
            }
            FetchKind::History => {
                self.history_generation += 1;
                self.history_loading = true;
                self.history_generation
            }
        };
        let (start, end) = self.range.date_window(today);

        FetchTicket {
            kind,
            generation,
            base: self.base.clone(),
            target: self.target.clone(),
            start,
            end,
        }
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        match ticket.kind {
            FetchKind::Rates => ticket.generation == self.rates_generation,
            FetchKind::History => ticket.generation == self.history_generation,
        }
    }

    /// Apply a rates response. The whole snapshot is replaced on success.
    pub fn apply_rates(
        &mut self,
        ticket: &FetchTicket,
        result: Result<ExchangeRateSnapshot, FeedError>,
    ) -> ApplyOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale rates response for {} (generation {}, latest {})",
                ticket.base,
                ticket.generation,
                self.rates_generation
            );
            return ApplyOutcome::Stale;
        }
        self.rates_loading = false;

        match result {
            Ok(snapshot) => {
                log::info!("Loaded {} rates for base {}", snapshot.rates.len(), snapshot.base);
                self.snapshot = Some(snapshot);
                ApplyOutcome::Applied
            }
            Err(e) => {
                log::warn!("{} for {}: {}", LOG_ERROR_FETCH_RATES, ticket.base, e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Apply a history response. The whole history is replaced on success.
    pub fn apply_history(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<RateHistoryPoint>, FeedError>,
    ) -> ApplyOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale history response for {}/{} (generation {}, latest {})",
                ticket.base,
                ticket.target,
                ticket.generation,
                self.history_generation
            );
            return ApplyOutcome::Stale;
        }
        self.history_loading = false;

        match result {
            Ok(points) => {
                log::info!(
                    "Loaded {} history points for {}/{}",
                    points.len(),
                    ticket.base,
                    ticket.target
                );
                self.history = points;
                ApplyOutcome::Applied
            }
            Err(e) => {
                log::warn!("{} for {}/{}: {}", LOG_ERROR_FETCH_HISTORY, ticket.base, ticket.target, e);
                ApplyOutcome::Failed
            }
        }
    }

    // Derived values

    /// Rate from the current base to the current target, if the snapshot
    /// belongs to the current base.
    pub fn current_rate(&self) -> Option<f64> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.rate_for(&self.base, &self.target))
    }

    pub fn converted(&self) -> f64 {
        convert(&self.amount, self.current_rate())
    }

    pub fn formatted_result(&self) -> String {
        format_amount(self.converted())
    }

    /// `1 USD = 0.9213 EUR`
    pub fn rate_line(&self) -> String {
        let rate = self.current_rate().map(format_rate).unwrap_or_else(|| RATE_PENDING.to_string());
        format!("1 {} = {} {}", self.base, rate, self.target)
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        chart_points(&self.history)
    }

    pub fn history_bounds(&self) -> Option<(f64, f64)> {
        rate_bounds(&self.history)
    }
}
