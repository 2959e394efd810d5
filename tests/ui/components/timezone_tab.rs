use crate::{buffer_text, key};
use convertist::timezone::{TargetZones, TimezoneState};
use convertist::ui::components::TimezoneTabComponent;
use convertist::ui::core::{Action, Component, DialogType, ZonePickerMode};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

fn state(targets: &[&str]) -> TimezoneState {
    TimezoneState::new(
        "Asia/Kolkata",
        TargetZones::from_zones(targets.iter().copied()),
        "2024-03-15".to_string(),
        "22:00".to_string(),
    )
}

fn render(tab: &mut TimezoneTabComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| tab.render(f, f.area())).unwrap();
    buffer_text(&terminal)
}

#[test]
fn test_key_mapping() {
    let mut tab = TimezoneTabComponent::new();
    tab.update_data(state(&["Asia/Tokyo"]));

    assert!(matches!(
        tab.handle_key_events(key(KeyCode::Char('f'))),
        Action::ShowDialog(DialogType::ZonePicker(ZonePickerMode::Home))
    ));
    assert!(matches!(
        tab.handle_key_events(key(KeyCode::Char('a'))),
        Action::ShowDialog(DialogType::ZonePicker(ZonePickerMode::Target))
    ));
    assert!(matches!(
        tab.handle_key_events(key(KeyCode::Char('t'))),
        Action::ShowDialog(DialogType::DateTimePicker)
    ));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('n'))), Action::ResetDateTime));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('x'))), Action::None));
}

#[test]
fn test_selection_and_removal() {
    let mut tab = TimezoneTabComponent::new();
    tab.update_data(state(&["Asia/Tokyo", "Europe/London", "America/Toronto"]));

    for _ in 0..5 {
        tab.handle_key_events(key(KeyCode::Char('j')));
    }
    assert_eq!(tab.selected_target(), 2);

    tab.handle_key_events(key(KeyCode::Up));
    match tab.handle_key_events(key(KeyCode::Delete)) {
        Action::RemoveTargetZone(zone) => assert_eq!(zone, "Europe/London"),
        other => panic!("unexpected action {:?}", other),
    }

    // A shorter list pulls the selection back in range
    tab.handle_key_events(key(KeyCode::Down));
    tab.update_data(state(&["Asia/Tokyo"]));
    assert_eq!(tab.selected_target(), 0);
}

#[test]
fn test_remove_without_targets() {
    let mut tab = TimezoneTabComponent::new();
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('d'))), Action::None));

    tab.update_data(state(&[]));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('d'))), Action::None));
    assert!(render(&mut tab).contains("No target cities added"));
}

#[test]
fn test_render_cards() {
    let mut tab = TimezoneTabComponent::new();
    tab.update_data(state(&["Asia/Tokyo", "America/Toronto"]));
    let text = render(&mut tab);

    assert!(text.contains("Kolkata"));
    assert!(text.contains("22:00"));
    assert!(text.contains("Friday, 15 Mar 2024"));

    // Tokyo rolls over to the next day, Toronto stays on the same one
    assert!(text.contains("Tokyo"));
    assert!(text.contains("01:30"));
    assert!(text.contains("+1 DAY"));
    assert!(text.contains("+3.5 hrs"));
    assert!(text.contains("Toronto"));
    assert!(text.contains("12:30"));
    assert!(text.contains("-9.5 hrs"));
}

#[test]
fn test_render_invalid_source() {
    let mut state = state(&["Asia/Tokyo"]);
    state.source_time = "99:99".to_string();

    let mut tab = TimezoneTabComponent::new();
    tab.update_data(state);
    assert!(render(&mut tab).contains("Invalid DateTime"));
}
