use crate::{buffer_text, ctrl, key};
use convertist::logger::Logger;
use convertist::timezone::{TargetZones, TimezoneState};
use convertist::ui::components::dialogs::system_dialogs::HELP_CONTENT;
use convertist::ui::components::DialogComponent;
use convertist::ui::core::{Action, Component, CurrencySide, DialogType, ZonePickerMode};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

fn open(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.update_data(TimezoneState::new(
        "Asia/Kolkata",
        TargetZones::from_zones(["America/Toronto"]),
        "2024-03-15".to_string(),
        "08:00".to_string(),
    ));
    let action = dialog.update(Action::ShowDialog(dialog_type));
    assert!(matches!(action, Action::None));
    dialog
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        assert!(matches!(dialog.handle_key_events(key(KeyCode::Char(c))), Action::None));
    }
}

fn render(dialog: &mut DialogComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    buffer_text(&terminal)
}

#[test]
fn test_hidden_by_default() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));

    // Non-dialog actions pass through untouched
    assert!(matches!(dialog.update(Action::NextTab), Action::NextTab));
}

#[test]
fn test_home_picker_submits_selected_zone() {
    let mut dialog = open(DialogType::ZonePicker(ZonePickerMode::Home));
    type_text(&mut dialog, "kolkata");

    let rows = dialog.picker_rows();
    assert_eq!(rows[0].primary, "Kolkata");
    assert!(rows[0].secondary.contains("Asia/Kolkata"));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SetHomeZone(zone) => assert_eq!(zone, "Asia/Kolkata"),
        other => panic!("unexpected action {:?}", other),
    }
    assert!(!dialog.is_visible());
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_target_picker_adds_zone() {
    let mut dialog = open(DialogType::ZonePicker(ZonePickerMode::Target));
    type_text(&mut dialog, "tokyo");
    dialog.handle_key_events(key(KeyCode::Down));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::AddTargetZone(zone) => assert_eq!(zone, "Asia/Tokyo"),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_picker_navigation_is_clamped() {
    let mut dialog = open(DialogType::CurrencyPicker(CurrencySide::Base));
    let count = dialog.picker_rows().len();
    assert!(count > 1);

    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.selected_index, 0);

    for _ in 0..count + 5 {
        dialog.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(dialog.selected_index, count - 1);

    // Typing restarts the selection
    type_text(&mut dialog, "e");
    assert_eq!(dialog.selected_index, 0);
    dialog.handle_key_events(key(KeyCode::Down));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.selected_index, 0);
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_currency_picker_matches_name() {
    let mut dialog = open(DialogType::CurrencyPicker(CurrencySide::Target));
    type_text(&mut dialog, "yen");

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SetTargetCurrency(code) => assert_eq!(code, "JPY"),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn test_picker_without_results_stays_open() {
    let mut dialog = open(DialogType::ZonePicker(ZonePickerMode::Target));
    type_text(&mut dialog, "zzzz");

    assert!(dialog.picker_rows().is_empty());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(dialog.is_visible());
    assert!(render(&mut dialog).contains("No results found"));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_datetime_keys() {
    let mut dialog = open(DialogType::DateTimePicker);

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Left)), Action::AdjustDate(-1)));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Right)), Action::AdjustDate(1)));
    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Up)),
        Action::AdjustTime { hours: 1, minutes: 0 }
    ));
    assert!(matches!(
        dialog.handle_key_events(key(KeyCode::Char('-'))),
        Action::AdjustTime { hours: 0, minutes: -5 }
    ));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::ResetDateTime));

    // At most two minute digits are kept
    type_text(&mut dialog, "123");
    assert_eq!(dialog.minute_buffer, "12");
    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SetMinute(minute) => assert_eq!(minute, 12),
        other => panic!("unexpected action {:?}", other),
    }
    assert!(dialog.minute_buffer.is_empty());

    // Enter with nothing typed closes the picker
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::HideDialog));
}

#[test]
fn test_help_close_keys() {
    let mut dialog = open(DialogType::Help);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(ctrl('c')), Action::Quit));

    dialog.handle_key_events(key(KeyCode::PageDown));
    assert_eq!(dialog.scroll_offset, 10);
    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, 9);
    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_render_each_dialog() {
    let mut dialog = open(DialogType::ZonePicker(ZonePickerMode::Home));
    let text = render(&mut dialog);
    assert!(text.contains("Change Home City"));
    assert!(text.contains("City or time zone"));

    let mut dialog = open(DialogType::CurrencyPicker(CurrencySide::Base));
    type_text(&mut dialog, "usd");
    let text = render(&mut dialog);
    assert!(text.contains("Select Base Currency"));
    assert!(text.contains("US Dollar"));

    let mut dialog = open(DialogType::DateTimePicker);
    type_text(&mut dialog, "3");
    let text = render(&mut dialog);
    assert!(text.contains("2024-03-15"));
    assert!(text.contains("Friday, 15 Mar 2024"));
    assert!(text.contains(":3_"));

    let mut dialog = open(DialogType::Help);
    dialog.handle_key_events(key(KeyCode::End));
    render(&mut dialog);

    let logger = Logger::new();
    logger.log("Background: rates #1 applied".to_string());
    let mut dialog = open(DialogType::Logs);
    dialog.set_logger(logger);
    assert!(render(&mut dialog).contains("rates #1 applied"));
}

#[test]
fn test_scroll_after_end_moves_back_from_last_page() {
    let mut dialog = open(DialogType::Help);
    dialog.handle_key_events(key(KeyCode::End));
    render(&mut dialog);

    let last_page = dialog.scroll_offset;
    assert!(last_page > 0);
    assert!(last_page < HELP_CONTENT.lines().count());

    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, last_page - 1);
    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.scroll_offset, last_page - 2);

    // Scrolling past the end snaps back to the same last page
    for _ in 0..5 {
        dialog.handle_key_events(key(KeyCode::PageDown));
    }
    render(&mut dialog);
    assert_eq!(dialog.scroll_offset, last_page);
}
