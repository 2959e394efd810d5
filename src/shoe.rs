//! Shoe size lookup across sizing systems.
//!
//! Sizes are a fixed table; picking a value in one system selects the whole
//! row, so the other three systems follow. There is no interpolation between
//! rows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeSystem {
    #[default]
    Us,
    Uk,
    Eu,
    Cm,
}

impl SizeSystem {
    pub const ALL: [SizeSystem; 4] = [SizeSystem::Us, SizeSystem::Uk, SizeSystem::Eu, SizeSystem::Cm];

    pub fn label(self) -> &'static str {
        match self {
            SizeSystem::Us => "US",
            SizeSystem::Uk => "UK",
            SizeSystem::Eu => "EU",
            SizeSystem::Cm => "CM",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SizeSystem::Us => SizeSystem::Uk,
            SizeSystem::Uk => SizeSystem::Eu,
            SizeSystem::Eu => SizeSystem::Cm,
            SizeSystem::Cm => SizeSystem::Us,
        }
    }
}

impl fmt::Display for SizeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(SizeSystem::Us),
            "uk" => Ok(SizeSystem::Uk),
            "eu" => Ok(SizeSystem::Eu),
            "cm" => Ok(SizeSystem::Cm),
            other => Err(format!("unknown size system '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoeSizeRow {
    pub us: f64,
    pub uk: f64,
    pub eu: f64,
    pub cm: f64,
}

impl ShoeSizeRow {
    const fn new(us: f64, uk: f64, eu: f64, cm: f64) -> Self {
        Self { us, uk, eu, cm }
    }

    pub fn value(&self, system: SizeSystem) -> f64 {
        match system {
            SizeSystem::Us => self.us,
            SizeSystem::Uk => self.uk,
            SizeSystem::Eu => self.eu,
            SizeSystem::Cm => self.cm,
        }
    }
}

/// Ordered smallest to largest.
pub static SHOE_SIZES: [ShoeSizeRow; 12] = [
    ShoeSizeRow::new(6.0, 5.5, 39.0, 24.0),
    ShoeSizeRow::new(6.5, 6.0, 39.5, 24.5),
    ShoeSizeRow::new(7.0, 6.5, 40.0, 25.0),
    ShoeSizeRow::new(7.5, 7.0, 40.5, 25.5),
    ShoeSizeRow::new(8.0, 7.5, 41.0, 26.0),
    ShoeSizeRow::new(8.5, 8.0, 42.0, 26.5),
    ShoeSizeRow::new(9.0, 8.5, 42.5, 27.0),
    ShoeSizeRow::new(9.5, 9.0, 43.0, 27.5),
    ShoeSizeRow::new(10.0, 9.5, 44.0, 28.0),
    ShoeSizeRow::new(10.5, 10.0, 44.5, 28.5),
    ShoeSizeRow::new(11.0, 10.5, 45.0, 29.0),
    ShoeSizeRow::new(12.0, 11.5, 46.0, 30.0),
];

/// Row initially selected (US 8).
pub const DEFAULT_ROW: usize = 4;

/// Index of the row whose `system` column equals `value` exactly.
pub fn index_of(system: SizeSystem, value: f64) -> Option<usize> {
    SHOE_SIZES.iter().position(|row| row.value(system) == value)
}

/// The row whose `system` column equals `value` exactly.
pub fn select_by_value(system: SizeSystem, value: f64) -> Option<&'static ShoeSizeRow> {
    index_of(system, value).map(|index| &SHOE_SIZES[index])
}

/// `8`, `7.5`
pub fn format_size(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Selected row and the system it is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoeSizeState {
    selected_index: usize,
    active_system: SizeSystem,
}

impl Default for ShoeSizeState {
    fn default() -> Self {
        Self {
            selected_index: DEFAULT_ROW,
            active_system: SizeSystem::default(),
        }
    }
}

impl ShoeSizeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn active_system(&self) -> SizeSystem {
        self.active_system
    }

    pub fn selected_row(&self) -> &'static ShoeSizeRow {
        &SHOE_SIZES[self.selected_index]
    }

    /// Value of the selected row in the active system.
    pub fn active_value(&self) -> f64 {
        self.selected_row().value(self.active_system)
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < SHOE_SIZES.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < SHOE_SIZES.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    /// Select the row matching `value` in `system`. Unknown values leave the
    /// selection unchanged.
    pub fn select_by_value(&mut self, system: SizeSystem, value: f64) -> bool {
        match index_of(system, value) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => false,
        }
    }

    pub fn set_system(&mut self, system: SizeSystem) {
        self.active_system = system;
    }

    pub fn cycle_system(&mut self) {
        self.active_system = self.active_system.next();
    }

    /// The three systems not currently active, in display order.
    pub fn other_systems(&self) -> Vec<SizeSystem> {
        SizeSystem::ALL
            .into_iter()
            .filter(|system| *system != self.active_system)
            .collect()
    }
}
