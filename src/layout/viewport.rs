//! Viewport state: scroll position, visible size and where the grid sits on the page.

use super::GridLayout;
use crate::types::Offset;

/// Viewport state - represents the visible area of the grid
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Horizontal scroll position in grid coordinates
    pub scroll_x: f32,
    /// Vertical scroll position in grid coordinates
    pub scroll_y: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Zoom scale factor (1.0 = 100%)
    pub scale: f32,
    /// Page offset of the grid container's top-left corner
    pub origin: Offset,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
            scale: 1.0,
            origin: Offset::default(),
        }
    }

    /// Get visible scrollable row range (inclusive) based on current scroll position.
    pub fn visible_rows(&self, layout: &GridLayout) -> (u32, u32) {
        let frozen_height = layout.frozen_rows_height();
        let scrollable_height = (self.height / self.scale - frozen_height).max(0.0);
        let top = self.scroll_y.max(frozen_height);

        let start = layout.row_at_y(top).unwrap_or(layout.max_row);
        let end = layout
            .row_at_y(top + scrollable_height)
            .unwrap_or(layout.max_row);
        (start.min(layout.max_row), end.min(layout.max_row))
    }

    /// Get visible scrollable column range (inclusive) based on current scroll position.
    pub fn visible_cols(&self, layout: &GridLayout) -> (u32, u32) {
        let frozen_width = layout.frozen_cols_width();
        let scrollable_width = (self.width / self.scale - frozen_width).max(0.0);
        let left = self.scroll_x.max(frozen_width);

        let start = layout.col_at_x(left).unwrap_or(layout.max_col);
        let end = layout
            .col_at_x(left + scrollable_width)
            .unwrap_or(layout.max_col);
        (start.min(layout.max_col), end.min(layout.max_col))
    }

    /// Convert grid coordinates of the cell at (row, col) to container-local
    /// coordinates, accounting for frozen panes.
    ///
    /// Frozen cells render at their natural position. Scrollable cells render at
    /// `frozen_size + (pos - scroll) * scale`, where scroll starts at the frozen boundary.
    pub fn to_screen_frozen(
        &self,
        x: f32,
        y: f32,
        row: u32,
        col: u32,
        layout: &GridLayout,
    ) -> (f32, f32) {
        let screen_x = if col < layout.frozen_cols {
            x * self.scale
        } else {
            layout.frozen_cols_width() * self.scale + (x - self.scroll_x) * self.scale
        };

        let screen_y = if row < layout.frozen_rows {
            y * self.scale
        } else {
            layout.frozen_rows_height() * self.scale + (y - self.scroll_y) * self.scale
        };

        (screen_x, screen_y)
    }

    /// Clamp scroll position to valid range.
    ///
    /// Scroll starts at the frozen boundary and stops once the last content is visible.
    pub fn clamp_scroll(&mut self, layout: &GridLayout) {
        let frozen_width = layout.frozen_cols_width();
        let frozen_height = layout.frozen_rows_height();

        let scrollable_width = layout.total_width() - frozen_width;
        let scrollable_height = layout.total_height() - frozen_height;
        let content_width = self.width / self.scale - frozen_width;
        let content_height = self.height / self.scale - frozen_height;

        let max_x = frozen_width + (scrollable_width - content_width).max(0.0);
        let max_y = frozen_height + (scrollable_height - content_height).max(0.0);

        self.scroll_x = self.scroll_x.clamp(frozen_width, max_x);
        self.scroll_y = self.scroll_y.clamp(frozen_height, max_y);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, layout: &GridLayout) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(layout);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: f32, y: f32, layout: &GridLayout) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(layout);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
