use crate::{buffer_text, key};
use convertist::shoe::{ShoeSizeState, SizeSystem};
use convertist::ui::components::ShoeTabComponent;
use convertist::ui::core::{Action, Component};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_key_mapping() {
    let mut tab = ShoeTabComponent::new();

    assert!(matches!(tab.handle_key_events(key(KeyCode::Right)), Action::NextShoeSize));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('l'))), Action::NextShoeSize));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Left)), Action::PreviousShoeSize));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('h'))), Action::PreviousShoeSize));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Char('s'))), Action::CycleShoeSystem));
    assert!(matches!(tab.handle_key_events(key(KeyCode::Up)), Action::None));
}

#[test]
fn test_render_selected_size_and_equivalents() {
    let mut state = ShoeSizeState::new();
    state.set_system(SizeSystem::Eu);
    assert!(state.select_by_value(SizeSystem::Eu, 42.0));

    let mut tab = ShoeTabComponent::new();
    tab.update_data(state);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| tab.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains("EU Size"));
    assert!(text.contains("Select Size"));
    assert!(text.contains(" 42 "));
    // US 8.5, UK 8, 26.5 cm
    assert!(text.contains("8.5"));
    assert!(text.contains("26.5"));
}
