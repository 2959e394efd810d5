use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub const HELP_CONTENT: &str = r"
CONVERTIST - Time zones, currencies and shoe sizes
==================================================

NAVIGATION
----------
Tab         Next tab
Shift+Tab   Previous tab
Esc         Close dialog
q / Ctrl+C  Quit application

TIMEZONE
--------
f           Change home city
a           Add target city
d / Del     Remove selected city
j/k ↑↓      Select target city
t           Adjust date and time
n           Reset to the current time

DATE & TIME PICKER
------------------
←/→         Previous / next day
↑/↓         Hour forward / back
+/-         Five minutes forward / back
00-59 Enter Set the minute

CURRENCY
--------
0-9 .       Edit amount
Backspace   Delete last character
Del         Clear amount
f           Choose source currency
t           Choose target currency
s           Swap currencies
r           Cycle trend range (1D, 5D, 6M)

SHOE SIZE
---------
←/→ h/l     Smaller / larger size
s           Cycle size system (US, UK, EU, CM)

PICKERS
-------
type        Filter (city, zone, abbreviation such as IST or PST)
↑/↓         Move selection
Enter       Choose

GENERAL
-------
?           Toggle this help
G           Show logs

Press 'Esc' or '?' to close this help panel
";

fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        dialog_area.x + margin_x,
        dialog_area.y + margin_y,
        dialog_area.width.saturating_sub(margin_x * 2),
        dialog_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }

    clamped_offset
}

/// Render the help text; returns the scroll offset clamped to the last page.
pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    render_scrollable_text(
        f,
        area,
        "📖 Help - Press 'Esc' or '?' to close",
        HELP_CONTENT,
        scroll_offset,
        scrollbar_state,
    )
}

/// Render the log lines; returns the scroll offset clamped to the last page.
pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let logs = match logger {
        Some(logger) => logger.get_logs(),
        None => vec!["No logger available".to_string()],
    };

    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_text(
        f,
        area,
        DIALOG_TITLE_DEBUG_LOGS,
        &logs_content,
        scroll_offset,
        scrollbar_state,
    )
}
