//! Scrollbar helper utilities for components with scrollable content.
//!
//! This module provides reusable scrollbar functionality shared by the picker
//! lists so that scrollbar behavior and styling stay consistent.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Helper for managing scrollbar state and rendering for scrollable components.
///
/// This struct encapsulates all scrollbar-related functionality including:
/// - Determining when a scrollbar is needed
/// - Calculating layout areas (content + scrollbar)
/// - Managing scrollbar state
/// - Rendering the scrollbar widget
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    /// Create a new scrollbar helper with default state.
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_items` - Total number of items in the scrollable content
    /// * `current_position` - Current selected/visible position (0-based index)
    /// * `viewport_height` - Optional viewport height for better scrollbar sizing
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: Option<usize>) {
        self.state = self.state.content_length(total_items).position(current_position);

        if let Some(height) = viewport_height {
            self.state = self.state.viewport_content_length(height);
        }
    }

    /// Check if a scrollbar is needed based on content size and available space.
    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split an unbordered area into content and an optional one-column
    /// scrollbar on the right.
    ///
    /// # Returns
    /// A tuple of (content_area, optional_scrollbar_area)
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(total_items, rect.height as usize) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            width: 1,
            ..rect
        };
        (content_area, Some(scrollbar_area))
    }

    /// Render the scrollbar widget if a scrollbar area is provided.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    /// Get an immutable reference to the internal scrollbar state.
    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
