use crate::{buffer_text, key};
use convertist::ui::components::TabBarComponent;
use convertist::ui::core::{Action, Component, Tab};
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

#[test]
fn test_tab_bar_renders_all_titles() {
    let mut tab_bar = TabBarComponent::new();
    tab_bar.update_data(Tab::Currency);
    assert_eq!(tab_bar.active, Tab::Currency);

    let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
    terminal.draw(|f| tab_bar.render(f, f.area())).unwrap();
    let text = buffer_text(&terminal);

    for tab in Tab::ALL {
        assert!(text.contains(tab.title()), "missing {}", tab.title());
    }
}

#[test]
fn test_tab_bar_ignores_keys() {
    let mut tab_bar = TabBarComponent::new();
    assert!(matches!(tab_bar.handle_key_events(key(KeyCode::Tab)), Action::None));
}
