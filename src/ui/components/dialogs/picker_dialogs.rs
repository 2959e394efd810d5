//! Searchable list pickers for cities and currencies.

use super::common::{self, shortcuts};
use crate::constants::NO_RESULTS;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// One selectable line of a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub primary: String,
    pub secondary: String,
}

pub struct PickerView<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub input: &'a str,
    pub rows: &'a [PickerRow],
    pub selected: usize,
    pub accent: Color,
}

pub fn render_picker_dialog(f: &mut Frame, area: Rect, view: &PickerView, scrollbar: &mut ScrollbarHelper) {
    let (width, height) = LayoutManager::picker_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(view.title, view.accent);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(common::create_input_paragraph(view.input, view.placeholder), chunks[0]);

    if view.rows.is_empty() {
        let empty = Paragraph::new(NO_RESULTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = view
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        row.primary.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", row.secondary), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(chunks[1], items.len());
        scrollbar.update_state(items.len(), view.selected, Some(chunks[1].height as usize));

        let list = List::new(items)
            .highlight_style(Style::default().fg(view.accent).add_modifier(Modifier::REVERSED))
            .highlight_symbol("› ");
        let mut list_state = ListState::default();
        list_state.select(Some(view.selected));

        f.render_stateful_widget(list, list_area, &mut list_state);
        scrollbar.render(f, scrollbar_area);
    }

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ARROWS_MOVE,
        shortcuts::SEPARATOR,
        shortcuts::ENTER_SELECT,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[2]);
}
