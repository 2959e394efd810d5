use crate::config::Config;
use crate::currency::{ApplyOutcome, CurrencyState, FetchKind, RateFeed};
use crate::logger::Logger;
use crate::shoe::ShoeSizeState;
use crate::timezone::{TargetZones, TimezoneState};
use crate::ui::components::{
    CurrencyTabComponent, DialogComponent, ShoeTabComponent, TabBarComponent, TimezoneTabComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Tab},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub active_tab: Tab,
    pub timezone: TimezoneState,
    pub currency: CurrencyState,
    pub shoe: ShoeSizeState,
}

impl AppState {
    /// Startup state from the configured defaults, with the clock set to now
    pub fn from_config(config: &Config) -> Self {
        let targets = TargetZones::from_zones(config.timezone.target_zones.iter().cloned());
        let currency = &config.currency;

        Self {
            active_tab: config.ui.default_tab.into(),
            timezone: TimezoneState::starting_now(config.timezone.home_zone.clone(), targets),
            currency: CurrencyState::new(
                currency.base.to_uppercase(),
                currency.target.to_uppercase(),
                currency.amount.clone(),
                currency.default_range,
            ),
            shoe: ShoeSizeState::new(),
        }
    }
}

pub struct AppComponent {
    // Component composition
    tab_bar: TabBarComponent,
    timezone_tab: TimezoneTabComponent,
    currency_tab: CurrencyTabComponent,
    shoe_tab: ShoeTabComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    feed: Arc<dyn RateFeed>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, feed: Arc<dyn RateFeed>) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            tab_bar: TabBarComponent::new(),
            timezone_tab: TimezoneTabComponent::new(),
            currency_tab: CurrencyTabComponent::new(),
            shoe_tab: ShoeTabComponent::new(),
            dialog,
            state: AppState::from_config(config),
            feed,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while any exchange-rate request is still running
    pub fn is_busy(&self) -> bool {
        self.task_manager.is_fetching()
    }

    /// Whether a dialog currently owns the keyboard
    pub fn dialog_open(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Fetch the rate snapshot and trend for the configured pair on startup
    pub fn trigger_initial_fetch(&mut self) {
        self.logger.log(format!(
            "AppComponent: Initial fetch for {}/{}",
            self.state.currency.base(),
            self.state.currency.target()
        ));
        self.start_fetches(vec![FetchKind::Rates, FetchKind::History]);
    }

    fn start_fetches(&mut self, kinds: Vec<FetchKind>) {
        let today = Local::now().date_naive();

        for kind in kinds {
            let ticket = self.state.currency.begin_fetch(kind, today);
            let task_id = match kind {
                FetchKind::Rates => self.task_manager.spawn_rates_fetch(Arc::clone(&self.feed), ticket),
                FetchKind::History => self.task_manager.spawn_history_fetch(Arc::clone(&self.feed), ticket),
            };
            self.logger.log(format!("Background: Started {:?} fetch (task {})", kind, task_id));
        }
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.tab_bar.update_data(self.state.active_tab);
        self.timezone_tab.update_data(self.state.timezone.clone());
        self.currency_tab.update_data(self.state.currency.clone());
        self.shoe_tab.update_data(self.state.shoe);
        self.dialog.update_data(self.state.timezone.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PreviousTab,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    fn active_component(&mut self) -> &mut dyn Component {
        match self.state.active_tab {
            Tab::Timezone => &mut self.timezone_tab,
            Tab::Currency => &mut self.currency_tab,
            Tab::Shoe => &mut self.shoe_tab,
        }
    }

    /// Apply an action to the application state. Returns `Action::Quit` when
    /// the application should exit, `Action::None` otherwise.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::SwitchTab(tab) => self.state.active_tab = tab,
            Action::NextTab => self.state.active_tab = self.state.active_tab.next(),
            Action::PreviousTab => self.state.active_tab = self.state.active_tab.previous(),

            Action::SetHomeZone(zone) => {
                self.logger.log(format!("Timezone: home city set to {}", zone));
                self.state.timezone.set_source_zone(zone);
            }
            Action::AddTargetZone(zone) => {
                if self.state.timezone.add_target(zone.clone()) {
                    self.logger.log(format!("Timezone: added {}", zone));
                } else {
                    self.logger.log(format!("Timezone: {} is already listed", zone));
                }
            }
            Action::RemoveTargetZone(zone) => {
                if self.state.timezone.remove_target(&zone) {
                    self.logger.log(format!("Timezone: removed {}", zone));
                }
            }
            Action::AdjustDate(days) => self.state.timezone.adjust_date(days),
            Action::AdjustTime { hours, minutes } => self.state.timezone.adjust_time(hours, minutes),
            Action::SetMinute(minute) => {
                if !self.state.timezone.set_minute(minute) {
                    self.logger.log(format!("Timezone: ignored minute {}", minute));
                }
            }
            Action::ResetDateTime => self.state.timezone.reset_to_now(),

            Action::AmountInput(c) => {
                self.state.currency.push_amount_char(c);
            }
            Action::AmountBackspace => self.state.currency.pop_amount_char(),
            Action::ClearAmount => self.state.currency.set_amount(""),
            Action::SetBaseCurrency(code) => {
                self.logger.log(format!("Currency: base set to {}", code));
                let kinds = self.state.currency.set_base(code);
                self.start_fetches(kinds);
            }
            Action::SetTargetCurrency(code) => {
                self.logger.log(format!("Currency: target set to {}", code));
                let kinds = self.state.currency.set_target(code);
                self.start_fetches(kinds);
            }
            Action::SwapCurrencies => {
                let kinds = self.state.currency.swap();
                self.start_fetches(kinds);
            }
            Action::CycleRange => {
                let kinds = self.state.currency.cycle_range();
                self.logger.log(format!("Currency: trend range {}", self.state.currency.range()));
                self.start_fetches(kinds);
            }
            Action::RatesLoaded { ticket, result } => {
                let outcome = self.state.currency.apply_rates(&ticket, result);
                self.log_fetch_outcome("rates", ticket.generation, outcome);
            }
            Action::HistoryLoaded { ticket, result } => {
                let outcome = self.state.currency.apply_history(&ticket, result);
                self.log_fetch_outcome("history", ticket.generation, outcome);
            }

            Action::NextShoeSize => self.state.shoe.select_next(),
            Action::PreviousShoeSize => self.state.shoe.select_previous(),
            Action::CycleShoeSystem => self.state.shoe.cycle_system(),

            Action::Quit => {
                self.should_quit = true;
                return Action::Quit;
            }

            // Dialog visibility is owned by the dialog component
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }

        Action::None
    }

    fn log_fetch_outcome(&self, what: &str, generation: u64, outcome: ApplyOutcome) {
        match outcome {
            ApplyOutcome::Applied => self.logger.log(format!("Background: {} #{} applied", what, generation)),
            ApplyOutcome::Stale => self
                .logger
                .log(format!("Background: {} #{} discarded (stale)", what, generation)),
            ApplyOutcome::Failed => self
                .logger
                .log(format!("Background: {} #{} failed, keeping previous data", what, generation)),
        }
    }

    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    // Then the active tab, and finally global keys
                    let tab_action = self.active_component().handle_key_events(key);

                    if !matches!(tab_action, Action::None) {
                        tab_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Route an action through the component hierarchy and apply it
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Routing goes through handle_event
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dialog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (content, tab_bar) = LayoutManager::main_layout(rect);

        self.active_component().render(f, content);
        self.tab_bar.render(f, tab_bar);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
