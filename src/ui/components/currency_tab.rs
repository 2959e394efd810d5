//! Currency converter tab.
//!
//! Amount entry, the converted result, the current rate and a trend chart of
//! the selected range.

use crate::constants::LOADING_TREND;
use crate::currency::{format_rate, CurrencyEntry, CurrencyState, TimeRange};
use crate::ui::core::{actions::Action, Component, CurrencySide, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        block::BorderType,
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

const ACCENT: Color = Color::Green;

pub struct CurrencyTabComponent {
    pub state: CurrencyState,
}

impl Default for CurrencyTabComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyTabComponent {
    pub fn new() -> Self {
        Self {
            state: CurrencyState::default(),
        }
    }

    pub fn update_data(&mut self, state: CurrencyState) {
        self.state = state;
    }

    fn currency_label(code: &str, info: Option<&CurrencyEntry>) -> String {
        match info {
            Some(info) => format!("{} {}  {}", info.flag, code, info.name),
            None => code.to_string(),
        }
    }

    fn render_pair(&self, f: &mut Frame, rect: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rect);

        let sides = [
            (" From (f) ", self.state.base(), self.state.base_info()),
            (" To (t) ", self.state.target(), self.state.target_info()),
        ];

        for ((title, code, info), area) in sides.into_iter().zip(halves.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::DarkGray));
            let label = Paragraph::new(Self::currency_label(code, info))
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(label, *area);
        }
    }

    fn render_amount(&self, f: &mut Frame, rect: Rect) {
        let symbol = self.state.base_info().map(|c| c.symbol).unwrap_or_default();
        let line = Line::from(vec![
            Span::styled(format!("{} ", symbol), Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.state.amount().to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Amount ")
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(ACCENT));

        f.render_widget(Paragraph::new(line).block(block), rect);
    }

    fn render_result(&self, f: &mut Frame, rect: Rect) {
        let symbol = self.state.target_info().map(|c| c.symbol).unwrap_or_default();
        let lines = vec![
            Line::from(Span::styled(
                format!("{}{}", symbol, self.state.formatted_result()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.state.rate_line(), Style::default().fg(Color::DarkGray))),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Converted Amount ")
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(ACCENT));

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(block),
            rect,
        );
    }

    fn range_title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Market Trends  ", Style::default().fg(Color::White))];
        for range in TimeRange::ALL {
            let style = if range == self.state.range() {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ", range.label()), style));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn render_chart(&self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.range_title())
            .border_style(Style::default().fg(Color::DarkGray));

        let points = self.state.chart_points();
        if points.is_empty() {
            let message = if self.state.is_history_loading() {
                LOADING_TREND
            } else {
                "Not enough data for a trend"
            };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(placeholder, rect);
            return;
        }

        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        // Chart points put y = 0 at the top, the canvas puts it at the bottom
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| {
                for pair in points.windows(2) {
                    ctx.draw(&CanvasLine::new(
                        pair[0].x,
                        100.0 - pair[0].y,
                        pair[1].x,
                        100.0 - pair[1].y,
                        ACCENT,
                    ));
                }
            });
        f.render_widget(canvas, rows[0]);

        if let Some((min, max)) = self.state.history_bounds() {
            let history = self.state.history();
            let span = match (history.first(), history.last()) {
                (Some(first), Some(last)) => format!("{} → {}", first.date, last.date),
                _ => String::new(),
            };
            let footer = Paragraph::new(format!(
                "low {} • high {} • {}",
                format_rate(min),
                format_rate(max),
                span
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
            f.render_widget(footer, rows[1]);
        }
    }
}

impl Component for CurrencyTabComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Action::AmountInput(c),
            KeyCode::Backspace => Action::AmountBackspace,
            KeyCode::Delete => Action::ClearAmount,
            KeyCode::Char('f') => Action::ShowDialog(DialogType::CurrencyPicker(CurrencySide::Base)),
            KeyCode::Char('t') => Action::ShowDialog(DialogType::CurrencyPicker(CurrencySide::Target)),
            KeyCode::Char('s') => Action::SwapCurrencies,
            KeyCode::Char('r') => Action::CycleRange,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(rect);

        self.render_pair(f, chunks[0]);
        self.render_amount(f, chunks[1]);
        self.render_result(f, chunks[2]);
        self.render_chart(f, chunks[3]);

        let hints = Paragraph::new("0-9 . ⌫: amount • f/t: currencies • s: swap • r: range")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[4]);
    }
}
