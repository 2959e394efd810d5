#[path = "components/currency_tab.rs"]
mod currency_tab;

#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/shoe_tab.rs"]
mod shoe_tab;

#[path = "components/tab_bar.rs"]
mod tab_bar;

#[path = "components/timezone_tab.rs"]
mod timezone_tab;
