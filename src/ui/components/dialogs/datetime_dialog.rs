//! Date and time adjustment for the home city.

use super::common::{self, shortcuts};
use crate::constants::TITLE_DATETIME_PICKER;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

pub struct DateTimeView<'a> {
    pub date: &'a str,
    pub time: &'a str,
    /// Formatted `(time, long date)` of the source instant
    pub labels: (String, String),
    /// Minute digits typed so far
    pub minute_buffer: &'a str,
}

pub fn render_datetime_dialog(f: &mut Frame, area: Rect, view: &DateTimeView) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 14, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(TITLE_DATETIME_PICKER, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let (time_label, date_label) = &view.labels;
    let summary = Paragraph::new(format!("{}\n{}", time_label, date_label))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    f.render_widget(summary, rows[0]);

    f.render_widget(
        common::create_selection_paragraph(format!("◀  {}  ▶", view.date), "Date ←/→"),
        rows[1],
    );

    let minute_hint = if view.minute_buffer.is_empty() {
        String::new()
    } else {
        format!("   :{}_", view.minute_buffer)
    };
    f.render_widget(
        common::create_selection_paragraph(format!("{}{}", view.time, minute_hint), "Time ↑/↓ hour, +/- 5 min"),
        rows[2],
    );

    let hint = Paragraph::new("Type two digits and Enter to set the minute • n: now")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, rows[3]);

    let instructions = common::create_instructions_paragraph(&[shortcuts::ESC_DONE]);
    f.render_widget(instructions, rows[5]);
}
