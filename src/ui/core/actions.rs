use crate::config::StartTab;
use crate::currency::{ExchangeRateSnapshot, FeedError, FetchTicket, RateHistoryPoint};

/// Top-level screens, shown in the tab bar in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timezone,
    Currency,
    Shoe,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Timezone, Tab::Currency, Tab::Shoe];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Timezone => "Timezone",
            Tab::Currency => "Currency",
            Tab::Shoe => "Shoe Size",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Timezone => 0,
            Tab::Currency => 1,
            Tab::Shoe => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Timezone => Tab::Currency,
            Tab::Currency => Tab::Shoe,
            Tab::Shoe => Tab::Timezone,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Timezone => Tab::Shoe,
            Tab::Currency => Tab::Timezone,
            Tab::Shoe => Tab::Currency,
        }
    }
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Timezone => Tab::Timezone,
            StartTab::Currency => Tab::Currency,
            StartTab::Shoe => Tab::Shoe,
        }
    }
}

/// What a zone picked in the city picker is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZonePickerMode {
    Home,
    Target,
}

/// Which side of the conversion a picked currency replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySide {
    Base,
    Target,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchTab(Tab),
    NextTab,
    PreviousTab,

    // Timezone operations
    SetHomeZone(String),
    AddTargetZone(String),
    RemoveTargetZone(String),
    AdjustDate(i64),
    AdjustTime {
        hours: i64,
        minutes: i64,
    },
    SetMinute(u32),
    ResetDateTime,

    // Currency operations
    AmountInput(char),
    AmountBackspace,
    ClearAmount,
    SetBaseCurrency(String),
    SetTargetCurrency(String),
    SwapCurrencies,
    CycleRange,
    RatesLoaded {
        ticket: FetchTicket,
        result: Result<ExchangeRateSnapshot, FeedError>,
    },
    HistoryLoaded {
        ticket: FetchTicket,
        result: Result<Vec<RateHistoryPoint>, FeedError>,
    },

    // Shoe size operations
    NextShoeSize,
    PreviousShoeSize,
    CycleShoeSystem,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    ZonePicker(ZonePickerMode),
    CurrencyPicker(CurrencySide),
    DateTimePicker,
    Help,
    Logs,
}
