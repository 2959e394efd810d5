//! Core UI functionality for the Convertist application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, component abstractions, actions and background task
//! management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`task_manager`] - Background exchange-rate fetches
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn key presses
//!    into [`Action`]s
//! 2. **Actions** are applied to the application state by the app component
//! 3. **Events** are produced by the [`EventHandler`]
//! 4. **Fetches** run on the [`TaskManager`] and come back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, CurrencySide, DialogType, Tab, ZonePickerMode};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
