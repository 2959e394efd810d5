//! Timezone converter tab.
//!
//! Shows the home city with the chosen wall-clock time, followed by one card
//! per target city with its local time, offset difference and day rollover.

use crate::constants::{INVALID_DATETIME, NO_TARGET_CITIES, TARGET_CARD_HEIGHT, TIME_FORMAT};
use crate::timezone::{city_name, ConversionResult, TimezoneState};
use crate::timezone::resolver::{format_day_delta, format_offset_delta};
use crate::ui::core::{actions::Action, Component, DialogType, ZonePickerMode};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

/// Height of the home city card
const SOURCE_CARD_HEIGHT: u16 = 6;

pub struct TimezoneTabComponent {
    pub state: Option<TimezoneState>,
    selected_target: usize,
}

impl Default for TimezoneTabComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneTabComponent {
    pub fn new() -> Self {
        Self {
            state: None,
            selected_target: 0,
        }
    }

    pub fn update_data(&mut self, state: TimezoneState) {
        let count = state.targets.len();
        self.selected_target = self.selected_target.min(count.saturating_sub(1));
        self.state = Some(state);
    }

    pub fn selected_target(&self) -> usize {
        self.selected_target
    }

    fn target_count(&self) -> usize {
        self.state.as_ref().map(|s| s.targets.len()).unwrap_or(0)
    }

    fn selected_zone(&self) -> Option<String> {
        self.state
            .as_ref()
            .and_then(|s| s.targets.get(self.selected_target))
            .map(str::to_string)
    }

    fn render_source_card(&self, f: &mut Frame, rect: Rect, state: &TimezoneState) {
        let (time_label, date_label) = state.source_labels();
        let (abbreviation, long_name) = match state.source_instant() {
            Ok(instant) => crate::timezone::catalog::names_at(instant.timezone(), &instant),
            Err(_) => (String::new(), String::new()),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    city_name(&state.source_zone),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", abbreviation), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(Span::styled(long_name, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                time_label,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(date_label, Style::default().fg(Color::Gray))),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" From ")
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::Cyan));

        f.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn render_target_card(
        &self,
        f: &mut Frame,
        rect: Rect,
        zone: &str,
        result: Option<&ConversionResult>,
        selected: bool,
    ) {
        let (left, right) = match result {
            Some(result) => {
                let day_delta = format_day_delta(result.day_delta);
                let day_color = if result.day_delta > 0 { Color::Green } else { Color::Red };
                let mut date_spans = vec![Span::styled(result.date_label(), Style::default().fg(Color::Gray))];
                if !day_delta.is_empty() {
                    date_spans.push(Span::raw(" "));
                    date_spans.push(Span::styled(
                        day_delta,
                        Style::default().fg(day_color).add_modifier(Modifier::BOLD),
                    ));
                }

                (
                    vec![
                        Line::from(Span::styled(
                            city_name(zone),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(
                            format!("{} • {}", result.long_name, format_offset_delta(result.offset_delta_minutes)),
                            Style::default().fg(Color::DarkGray),
                        )),
                    ],
                    vec![
                        Line::from(Span::styled(
                            result.local.format(TIME_FORMAT).to_string(),
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(date_spans),
                    ],
                )
            }
            None => (
                vec![Line::from(Span::styled(
                    city_name(zone),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))],
                vec![Line::from(Span::styled(INVALID_DATETIME, Style::default().fg(Color::Red)))],
            ),
        };

        let border_color = if selected { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        f.render_widget(Paragraph::new(left), halves[0]);
        f.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
    }

    fn render_targets(&self, f: &mut Frame, rect: Rect, state: &TimezoneState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(" To ")
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if state.targets.is_empty() {
            let empty = Paragraph::new(NO_TARGET_CITIES)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        // A bad source date or time invalidates every card
        let results = state.resolve().ok();

        let visible = (inner.height / TARGET_CARD_HEIGHT).max(1) as usize;
        let first = self.selected_target.saturating_sub(visible.saturating_sub(1));

        for (slot, (index, zone)) in state.targets.as_slice().iter().enumerate().skip(first).take(visible).enumerate() {
            let card = Rect::new(
                inner.x,
                inner.y + slot as u16 * TARGET_CARD_HEIGHT,
                inner.width,
                TARGET_CARD_HEIGHT.min(inner.height.saturating_sub(slot as u16 * TARGET_CARD_HEIGHT)),
            );
            let result = results.as_ref().and_then(|r| r.get(index));
            self.render_target_card(f, card, zone, result, index == self.selected_target);
        }
    }
}

impl Component for TimezoneTabComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('f') => Action::ShowDialog(DialogType::ZonePicker(ZonePickerMode::Home)),
            KeyCode::Char('a') => Action::ShowDialog(DialogType::ZonePicker(ZonePickerMode::Target)),
            KeyCode::Char('t') => Action::ShowDialog(DialogType::DateTimePicker),
            KeyCode::Char('n') => Action::ResetDateTime,
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_zone() {
                Some(zone) => Action::RemoveTargetZone(zone),
                None => Action::None,
            },
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected_target + 1 < self.target_count() {
                    self.selected_target += 1;
                }
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_target = self.selected_target.saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(state) = self.state.clone() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SOURCE_CARD_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(rect);

        self.render_source_card(f, chunks[0], &state);
        self.render_targets(f, chunks[1], &state);

        let hints = Paragraph::new("f: home city • a: add city • d: remove • t: adjust time • n: now")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[2]);
    }
}
