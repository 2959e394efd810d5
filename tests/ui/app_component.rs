use crate::{buffer_text, ctrl, key, StaticFeed};
use convertist::config::{Config, StartTab};
use convertist::currency::TimeRange;
use convertist::ui::app_component::{AppComponent, AppState};
use convertist::ui::core::{
    actions::{DialogType, Tab},
    event_handler::EventType,
    Component,
};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), Arc::new(StaticFeed))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code))).unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Apply background results until no fetch is pending.
async fn settle(app: &mut AppComponent) {
    for _ in 0..200 {
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if !app.state().currency.is_loading() && !app.is_busy() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("background fetches did not settle");
}

#[test]
fn test_app_state_from_config() {
    let mut config = Config::default();
    config.ui.default_tab = StartTab::Shoe;
    config.currency.base = "gbp".to_string();
    config.currency.default_range = TimeRange::SixMonths;

    let state = AppState::from_config(&config);
    assert_eq!(state.active_tab, Tab::Shoe);
    assert_eq!(state.timezone.source_zone, "Asia/Kolkata");
    assert!(state.timezone.targets.contains("America/Toronto"));
    assert!(state.timezone.source_instant().is_ok());
    assert_eq!(state.currency.base(), "GBP");
    assert_eq!(state.currency.amount(), "100");
    assert_eq!(state.currency.range(), TimeRange::SixMonths);
    assert_eq!(state.shoe.active_value(), 8.0);
}

#[tokio::test]
async fn test_tab_navigation() {
    let mut app = app();
    assert_eq!(app.state().active_tab, Tab::Timezone);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, Tab::Currency);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, Tab::Shoe);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, Tab::Timezone);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().active_tab, Tab::Shoe);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    app.handle_event(EventType::Key(ctrl('c'))).unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_help_and_logs_dialogs() {
    let mut app = app();

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog_open(), Some(&DialogType::Help));

    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, Tab::Timezone);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog_open(), None);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog_open(), Some(&DialogType::Logs));
    assert!(!app.logger().is_empty());
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.dialog_open(), None);
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_add_and_remove_target_city() {
    let mut app = app();

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "tokyo");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog_open(), None);
    assert_eq!(
        app.state().timezone.targets.as_slice(),
        ["America/Toronto", "Asia/Tokyo"]
    );

    // Adding the same city again keeps one entry
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "tokyo");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().timezone.targets.len(), 2);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().timezone.targets.as_slice(), ["America/Toronto"]);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.state().timezone.targets.is_empty());
}

#[tokio::test]
async fn test_change_home_city() {
    let mut app = app();

    press(&mut app, KeyCode::Char('f'));
    assert!(matches!(app.dialog_open(), Some(DialogType::ZonePicker(_))));
    type_text(&mut app, "london");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().timezone.source_zone, "Europe/London");
}

#[tokio::test]
async fn test_datetime_picker() {
    let mut app = app();
    let start_date = app.state().timezone.source_date.clone();

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.dialog_open(), Some(&DialogType::DateTimePicker));

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Left);
    let expected = convertist::timezone::resolver::adjust_date(&start_date, 1).unwrap();
    assert_eq!(app.state().timezone.source_date, expected);

    type_text(&mut app, "45");
    press(&mut app, KeyCode::Enter);
    assert!(app.state().timezone.source_time.ends_with(":45"));
    assert_eq!(app.dialog_open(), Some(&DialogType::DateTimePicker));

    press(&mut app, KeyCode::Char('+'));
    assert!(app.state().timezone.source_time.ends_with(":50"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog_open(), None);
}

#[tokio::test]
async fn test_amount_entry() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);

    type_text(&mut app, "5.5.");
    assert_eq!(app.state().currency.amount(), "1005.5");

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.state().currency.amount(), "1005.");

    press(&mut app, KeyCode::Delete);
    assert_eq!(app.state().currency.amount(), "");
}

#[tokio::test]
async fn test_initial_fetch_and_currency_change() {
    let mut app = app();
    app.trigger_initial_fetch();
    settle(&mut app).await;

    let currency = &app.state().currency;
    assert_eq!(currency.current_rate(), Some(0.9));
    assert_eq!(currency.formatted_result(), "90.00");
    assert_eq!(currency.history().len(), 3);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('f'));
    type_text(&mut app, "gbp");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().currency.base(), "GBP");
    assert!(app.state().currency.is_loading());

    settle(&mut app).await;
    assert_eq!(app.state().currency.rate_line(), "1 GBP = 0.9000 EUR");

    press(&mut app, KeyCode::Char('s'));
    settle(&mut app).await;
    assert_eq!(app.state().currency.base(), "EUR");
    assert_eq!(app.state().currency.target(), "GBP");
    assert_eq!(app.state().currency.current_rate(), Some(0.8));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().currency.range(), TimeRange::SixMonths);
    settle(&mut app).await;
}

#[tokio::test]
async fn test_shoe_tab_keys() {
    let mut app = app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().active_tab, Tab::Shoe);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().shoe.active_value(), 8.5);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.state().shoe.active_value(), 8.0);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.state().shoe.active_value(), 7.5);
}

#[tokio::test]
async fn test_render_every_tab() {
    let mut app = app();
    app.trigger_initial_fetch();
    settle(&mut app).await;

    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Shoe Size"));
    assert!(text.contains("Kolkata"));
    assert!(text.contains("Toronto"));

    press(&mut app, KeyCode::Tab);
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("1 USD = 0.9000 EUR"));
    assert!(text.contains("Market Trends"));

    press(&mut app, KeyCode::Tab);
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("Select Size"));

    press(&mut app, KeyCode::Char('?'));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("CONVERTIST"));
}

#[tokio::test]
async fn test_render_small_terminal() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

    for _ in 0..3 {
        terminal.draw(|f| app.render(f, f.area())).unwrap();
        press(&mut app, KeyCode::Tab);
    }
    press(&mut app, KeyCode::Char('a'));
    terminal.draw(|f| app.render(f, f.area())).unwrap();
}
