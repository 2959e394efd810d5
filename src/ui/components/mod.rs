//! Reusable UI components

pub mod currency_tab;
pub mod dialog_component;
pub mod dialogs;
pub mod scrollbar_helper;
pub mod shoe_tab;
pub mod tab_bar;
pub mod timezone_tab;

// Component exports
pub use currency_tab::CurrencyTabComponent;
pub use dialog_component::DialogComponent;
pub use shoe_tab::ShoeTabComponent;
pub use tab_bar::TabBarComponent;
pub use timezone_tab::TimezoneTabComponent;
