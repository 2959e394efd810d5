//! Bottom navigation bar listing the three converters.

use crate::ui::core::{actions::Action, Component, Tab};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Tabs},
    Frame,
};

pub struct TabBarComponent {
    pub active: Tab,
}

impl Default for TabBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBarComponent {
    pub fn new() -> Self {
        Self { active: Tab::default() }
    }

    pub fn update_data(&mut self, active: Tab) {
        self.active = active;
    }
}

impl Component for TabBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Tab switching is handled by the global keymap
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| Line::from(Span::raw(format!(" {} ", tab.title()))))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));

        f.render_widget(tabs, rect);
    }
}
