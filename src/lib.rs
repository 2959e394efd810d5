//! Convertist - A terminal converter for time zones, currencies and shoe sizes
//!
//! This library provides the conversion logic behind the three tabs of the
//! Convertist TUI together with the Ratatui interface that drives them.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`timezone`] - Zone catalog, search and wall-clock conversion
//! * [`currency`] - Currency table, rate feed and trend history
//! * [`shoe`] - Shoe size equivalence table
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Currency catalog, conversion, rate feed and trend history
pub mod currency;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Shoe size conversion table
pub mod shoe;

/// Time zone catalog, search and conversion
pub mod timezone;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
