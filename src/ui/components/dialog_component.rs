//! Modal dialog component.
//!
//! Hosts the city and currency pickers, the date/time picker, the help panel
//! and the logs viewer. Only one dialog is visible at a time and it receives
//! every key press while open.

use crate::constants::{
    TITLE_BASE_PICKER, TITLE_HOME_PICKER, TITLE_TARGET_CURRENCY_PICKER, TITLE_TARGET_PICKER,
};
use crate::currency::filter_currencies;
use crate::logger::Logger;
use crate::timezone::{all_timezones, search, TimezoneState};
use crate::ui::components::dialogs::{
    datetime_dialog, picker_dialogs, system_dialogs, DateTimeView, PickerRow, PickerView,
};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, CurrencySide, DialogType, ZonePickerMode},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

/// Lines moved by PageUp/PageDown in scrollable dialogs
const PAGE_SIZE: usize = 10;

/// Modal dialog component that handles picker and system dialogs.
///
/// # Dialog Types
/// - **Zone picker** - search the time zone catalog for a home or target city
/// - **Currency picker** - filter the currency table by code or name
/// - **Date/time picker** - step the home city's date and time
/// - **Help** and **Logs** - scrollable text panels
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub selected_index: usize,
    pub minute_buffer: String,
    // Scrolling support for long content dialogs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    list_scrollbar: ScrollbarHelper,
    timezone: Option<TimezoneState>,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            selected_index: 0,
            minute_buffer: String::new(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            list_scrollbar: ScrollbarHelper::new(),
            timezone: None,
            logger: None,
        }
    }

    /// Keep the date/time picker in step with the timezone tab
    pub fn update_data(&mut self, timezone: TimezoneState) {
        self.timezone = Some(timezone);
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Rows of the open picker for the current query
    pub fn picker_rows(&self) -> Vec<PickerRow> {
        match self.dialog_type {
            Some(DialogType::ZonePicker(_)) => search(all_timezones(), &self.input_buffer)
                .into_iter()
                .map(|entry| PickerRow {
                    primary: entry.city.clone(),
                    secondary: format!("{} • {}", entry.abbreviation, entry.zone),
                })
                .collect(),
            Some(DialogType::CurrencyPicker(_)) => filter_currencies(&self.input_buffer)
                .into_iter()
                .map(|currency| PickerRow {
                    primary: format!("{} {}", currency.flag, currency.code),
                    secondary: currency.name.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn picker_result_count(&self) -> usize {
        match self.dialog_type {
            Some(DialogType::ZonePicker(_)) => search(all_timezones(), &self.input_buffer).len(),
            Some(DialogType::CurrencyPicker(_)) => filter_currencies(&self.input_buffer).len(),
            _ => 0,
        }
    }

    fn handle_picker_submit(&mut self) -> Action {
        let action = match self.dialog_type {
            Some(DialogType::ZonePicker(mode)) => {
                let results = search(all_timezones(), &self.input_buffer);
                match results.get(self.selected_index) {
                    Some(entry) => match mode {
                        ZonePickerMode::Home => Action::SetHomeZone(entry.zone.clone()),
                        ZonePickerMode::Target => Action::AddTargetZone(entry.zone.clone()),
                    },
                    None => return Action::None,
                }
            }
            Some(DialogType::CurrencyPicker(side)) => {
                let results = filter_currencies(&self.input_buffer);
                match results.get(self.selected_index) {
                    Some(currency) => match side {
                        CurrencySide::Base => Action::SetBaseCurrency(currency.code.to_string()),
                        CurrencySide::Target => Action::SetTargetCurrency(currency.code.to_string()),
                    },
                    None => return Action::None,
                }
            }
            _ => return Action::None,
        };

        self.clear_dialog();
        action
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_picker_submit(),
            KeyCode::Down => {
                if self.selected_index + 1 < self.picker_result_count() {
                    self.selected_index += 1;
                }
                Action::None
            }
            KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
                Action::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.selected_index = 0;
                Action::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.selected_index = 0;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_datetime_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter if self.minute_buffer.is_empty() => Action::HideDialog,
            KeyCode::Enter => {
                let minute = self.minute_buffer.parse::<u32>().ok();
                self.minute_buffer.clear();
                match minute {
                    Some(minute) => Action::SetMinute(minute),
                    None => Action::None,
                }
            }
            KeyCode::Left => Action::AdjustDate(-1),
            KeyCode::Right => Action::AdjustDate(1),
            KeyCode::Up => Action::AdjustTime { hours: 1, minutes: 0 },
            KeyCode::Down => Action::AdjustTime { hours: -1, minutes: 0 },
            KeyCode::Char('+') | KeyCode::Char('=') => Action::AdjustTime { hours: 0, minutes: 5 },
            KeyCode::Char('-') => Action::AdjustTime { hours: 0, minutes: -5 },
            KeyCode::Char('n') => Action::ResetDateTime,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.minute_buffer.len() < 2 {
                    self.minute_buffer.push(c);
                }
                Action::None
            }
            KeyCode::Backspace => {
                self.minute_buffer.pop();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent, close_keys: &[char]) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Char(c) if close_keys.contains(&c) => Action::HideDialog,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_back(1);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(PAGE_SIZE);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_back(PAGE_SIZE);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_back(usize::MAX);
                Action::None
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                self.scroll_by(usize::MAX);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn scroll_by(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_back(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.selected_index = 0;
        self.minute_buffer.clear();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn render_picker(&mut self, f: &mut Frame, rect: Rect, title: &str, placeholder: &str, accent: Color) {
        let rows = self.picker_rows();
        let view = PickerView {
            title,
            placeholder,
            input: &self.input_buffer,
            rows: &rows,
            selected: self.selected_index.min(rows.len().saturating_sub(1)),
            accent,
        };
        picker_dialogs::render_picker_dialog(f, rect, &view, &mut self.list_scrollbar);
    }

    fn render_datetime_picker(&self, f: &mut Frame, rect: Rect) {
        let Some(timezone) = &self.timezone else {
            return;
        };
        let view = DateTimeView {
            date: &timezone.source_date,
            time: &timezone.source_time,
            labels: timezone.source_labels(),
            minute_buffer: &self.minute_buffer,
        };
        datetime_dialog::render_datetime_dialog(f, rect, &view);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match &self.dialog_type {
            Some(DialogType::ZonePicker(_)) | Some(DialogType::CurrencyPicker(_)) => self.handle_picker_key(key),
            Some(DialogType::DateTimePicker) => self.handle_datetime_key(key),
            Some(DialogType::Help) => self.handle_scroll_key(key, &['?', 'q']),
            Some(DialogType::Logs) => self.handle_scroll_key(key, &['G', 'q']),
            None => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        let zone_placeholder = "City or time zone (e.g. IST, London)";
        let currency_placeholder = "Currency code or name";

        match dialog_type {
            DialogType::ZonePicker(ZonePickerMode::Home) => {
                self.render_picker(f, rect, TITLE_HOME_PICKER, zone_placeholder, Color::Cyan);
            }
            DialogType::ZonePicker(ZonePickerMode::Target) => {
                self.render_picker(f, rect, TITLE_TARGET_PICKER, zone_placeholder, Color::Cyan);
            }
            DialogType::CurrencyPicker(CurrencySide::Base) => {
                self.render_picker(f, rect, TITLE_BASE_PICKER, currency_placeholder, Color::Green);
            }
            DialogType::CurrencyPicker(CurrencySide::Target) => {
                self.render_picker(f, rect, TITLE_TARGET_CURRENCY_PICKER, currency_placeholder, Color::Green);
            }
            DialogType::DateTimePicker => self.render_datetime_picker(f, rect),
            DialogType::Help => {
                self.scroll_offset =
                    system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                self.scroll_offset = system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    self.logger.as_ref(),
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
        }
    }
}
