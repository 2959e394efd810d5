//! Shoe size converter tab.

use crate::constants::SHOE_SIZE_NOTE;
use crate::shoe::{format_size, ShoeSizeState, SizeSystem, SHOE_SIZES};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Magenta;

pub struct ShoeTabComponent {
    pub state: ShoeSizeState,
}

impl Default for ShoeTabComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoeTabComponent {
    pub fn new() -> Self {
        Self {
            state: ShoeSizeState::default(),
        }
    }

    pub fn update_data(&mut self, state: ShoeSizeState) {
        self.state = state;
    }

    fn system_selector(&self) -> Line<'static> {
        let spans: Vec<Span> = SizeSystem::ALL
            .iter()
            .map(|system| {
                let style = if *system == self.state.active_system() {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!("  {}  ", system.label()), style)
            })
            .collect();
        Line::from(spans)
    }

    fn size_strip(&self) -> Line<'static> {
        let system = self.state.active_system();
        let mut spans = Vec::with_capacity(SHOE_SIZES.len());
        for (index, row) in SHOE_SIZES.iter().enumerate() {
            let style = if index == self.state.selected_index() {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", format_size(row.value(system))), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn render_equivalents(&self, f: &mut Frame, rect: Rect) {
        let others = self.state.other_systems();
        let constraints: Vec<Constraint> = others
            .iter()
            .map(|_| Constraint::Ratio(1, others.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rect);

        let row = self.state.selected_row();
        for (system, area) in others.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", system.label()))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::DarkGray));
            let value = Paragraph::new(format_size(row.value(*system)))
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(value, *area);
        }
    }
}

impl Component for ShoeTabComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => Action::NextShoeSize,
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousShoeSize,
            KeyCode::Char('s') => Action::CycleShoeSystem,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(2),
                Constraint::Length(1),
            ])
            .split(rect);

        f.render_widget(
            Paragraph::new(self.system_selector()).alignment(Alignment::Center),
            chunks[0],
        );

        let selected = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format_size(self.state.active_value()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} Size", self.state.active_system().label()),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        );
        f.render_widget(selected, chunks[1]);

        let strip = Paragraph::new(self.size_strip())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Select Size ")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(strip, chunks[2]);

        self.render_equivalents(f, chunks[3]);

        let note = Paragraph::new(SHOE_SIZE_NOTE)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        f.render_widget(note, chunks[4]);

        let hints = Paragraph::new("←/→: size • s: size system")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[5]);
    }
}
