//! Dialog rendering helpers used by the dialog component

pub mod common;
pub mod datetime_dialog;
pub mod picker_dialogs;
pub mod system_dialogs;

pub use datetime_dialog::DateTimeView;
pub use picker_dialogs::{PickerRow, PickerView};
