use crate::{buffer_text, key};
use chrono::NaiveDate;
use convertist::currency::{CurrencyState, ExchangeRateSnapshot, FetchKind, RateHistoryPoint, TimeRange};
use convertist::ui::components::CurrencyTabComponent;
use convertist::ui::core::{Action, Component, CurrencySide, DialogType};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use std::collections::HashMap;

fn render(tab: &mut CurrencyTabComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| tab.render(f, f.area())).unwrap();
    buffer_text(&terminal)
}

fn loaded_state() -> CurrencyState {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let mut state = CurrencyState::new("USD", "EUR", "1000", TimeRange::FiveDays);

    let ticket = state.begin_fetch(FetchKind::Rates, today);
    let rates = HashMap::from([("EUR".to_string(), 0.9213)]);
    state.apply_rates(&ticket, Ok(ExchangeRateSnapshot::new("USD", rates)));

    let ticket = state.begin_fetch(FetchKind::History, today);
    let points = (0..5)
        .map(|i| RateHistoryPoint {
            date: today - chrono::Duration::days(4 - i),
            rate: 0.91 + i as f64 * 0.002,
        })
        .collect();
    state.apply_history(&ticket, Ok(points));
    state
}

#[test]
fn test_key_mapping() {
    let mut tab = CurrencyTabComponent::new();

    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('7'))), Action::AmountInput('7')));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('.'))), Action::AmountInput('.')));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Backspace)), Action::AmountBackspace));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Delete)), Action::ClearAmount));
    assert!(matches!(
        tab.handle_key_events(key(KeyCode::Char('f'))),
        Action::ShowDialog(DialogType::CurrencyPicker(CurrencySide::Base))
    ));
    assert!(matches!(
        tab.handle_key_events(key(KeyCode::Char('t'))),
        Action::ShowDialog(DialogType::CurrencyPicker(CurrencySide::Target))
    ));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('s'))), Action::SwapCurrencies));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('r'))), Action::CycleRange));

    // Letters fall through to the global keymap
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('q'))), Action::None));
}

#[test]
fn test_render_before_rates_arrive() {
    let mut tab = CurrencyTabComponent::new();
    let text = render(&mut tab);

    assert!(text.contains("US Dollar"));
    assert!(text.contains("Euro"));
    assert!(text.contains("0.00"));
    assert!(text.contains("Not enough data for a trend"));
}

#[test]
fn test_render_loading_trend() {
    let mut state = CurrencyState::default();
    state.begin_fetch(FetchKind::History, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());

    let mut tab = CurrencyTabComponent::new();
    tab.update_data(state);
    assert!(render(&mut tab).contains("Loading trend data..."));
}

#[test]
fn test_render_result_and_chart() {
    let mut tab = CurrencyTabComponent::new();
    tab.update_data(loaded_state());
    let text = render(&mut tab);

    assert!(text.contains("1000"));
    assert!(text.contains("921.30"));
    assert!(text.contains("1 USD = 0.9213 EUR"));
    assert!(text.contains("Market Trends"));
    assert!(text.contains("low 0.9100"));
    assert!(text.contains("high 0.9180"));
    assert!(text.contains("2024-03-11"));
}
