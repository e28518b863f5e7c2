//! Pre-computed column/row positions for a grid.
//!
//! Positions are computed once so cell rectangles and hit testing are
//! O(1) / O(log n) during a render cycle.

use std::collections::{HashMap, HashSet};

/// Default column width in pixels
pub const DEFAULT_COL_WIDTH: f32 = 64.0;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Pre-computed layout data for a grid
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Cumulative column positions (`col_positions[i]` = x of column i's left edge)
    pub col_positions: Vec<f32>,
    /// Cumulative row positions (`row_positions[i]` = y of row i's top edge)
    pub row_positions: Vec<f32>,
    /// Maximum row index
    pub max_row: u32,
    /// Maximum column index
    pub max_col: u32,
    /// Number of frozen rows (0 = no frozen rows)
    pub frozen_rows: u32,
    /// Number of frozen columns (0 = no frozen columns)
    pub frozen_cols: u32,
}

/// Rectangle of a cell in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

fn cumulative(count: u32, size_of: impl Fn(u32) -> f32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count as usize + 2);
    let mut at: f32 = 0.0;
    for i in 0..=count {
        positions.push(at);
        at += size_of(i);
    }
    positions.push(at); // Final edge
    positions
}

impl GridLayout {
    /// Create a layout from per-index sizes.
    ///
    /// Columns/rows missing from the maps use the defaults; hidden ones get size 0.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        max_row: u32,
        max_col: u32,
        col_widths: &HashMap<u32, f32>,
        row_heights: &HashMap<u32, f32>,
        hidden_cols: &HashSet<u32>,
        hidden_rows: &HashSet<u32>,
        frozen_rows: u32,
        frozen_cols: u32,
    ) -> Self {
        let col_positions = cumulative(max_col, |col| {
            if hidden_cols.contains(&col) {
                0.0
            } else {
                col_widths.get(&col).copied().unwrap_or(DEFAULT_COL_WIDTH)
            }
        });
        let row_positions = cumulative(max_row, |row| {
            if hidden_rows.contains(&row) {
                0.0
            } else {
                row_heights.get(&row).copied().unwrap_or(DEFAULT_ROW_HEIGHT)
            }
        });

        Self {
            col_positions,
            row_positions,
            max_row,
            max_col,
            frozen_rows: frozen_rows.min(max_row.saturating_add(1)),
            frozen_cols: frozen_cols.min(max_col.saturating_add(1)),
        }
    }

    /// A grid where every column and row has the same size.
    pub fn uniform(rows: u32, cols: u32, col_width: f32, row_height: f32) -> Self {
        let max_row = rows.saturating_sub(1);
        let max_col = cols.saturating_sub(1);
        Self {
            col_positions: cumulative(max_col, |_| col_width),
            row_positions: cumulative(max_row, |_| row_height),
            max_row,
            max_col,
            frozen_rows: 0,
            frozen_cols: 0,
        }
    }

    /// Freeze the first `rows` rows and `cols` columns.
    #[must_use]
    pub fn with_frozen(mut self, rows: u32, cols: u32) -> Self {
        self.frozen_rows = rows.min(self.max_row.saturating_add(1));
        self.frozen_cols = cols.min(self.max_col.saturating_add(1));
        self
    }

    fn position(positions: &[f32], index: u32) -> Option<f32> {
        positions.get(index as usize).copied()
    }

    /// Left edge of `col`, or `None` if out of range.
    pub fn col_x(&self, col: u32) -> Option<f32> {
        Self::position(&self.col_positions, col)
    }

    /// Top edge of `row`, or `None` if out of range.
    pub fn row_y(&self, row: u32) -> Option<f32> {
        Self::position(&self.row_positions, row)
    }

    /// Rectangle of the cell at (row, col), or `None` outside the grid.
    pub fn cell_rect(&self, row: u32, col: u32) -> Option<CellRect> {
        if row > self.max_row || col > self.max_col {
            return None;
        }
        let x = self.col_x(col)?;
        let y = self.row_y(row)?;
        let x2 = self.col_x(col + 1)?;
        let y2 = self.row_y(row + 1)?;
        Some(CellRect {
            x,
            y,
            width: x2 - x,
            height: y2 - y,
        })
    }

    /// Width of the frozen columns
    pub fn frozen_cols_width(&self) -> f32 {
        self.col_x(self.frozen_cols).unwrap_or(0.0)
    }

    /// Height of the frozen rows
    pub fn frozen_rows_height(&self) -> f32 {
        self.row_y(self.frozen_rows).unwrap_or(0.0)
    }

    pub fn total_width(&self) -> f32 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    pub fn total_height(&self) -> f32 {
        self.row_positions.last().copied().unwrap_or(0.0)
    }

    /// Row containing grid y, via binary search.
    pub fn row_at_y(&self, y: f32) -> Option<u32> {
        Self::index_at(&self.row_positions, y, self.max_row)
    }

    /// Column containing grid x, via binary search.
    pub fn col_at_x(&self, x: f32) -> Option<u32> {
        Self::index_at(&self.col_positions, x, self.max_col)
    }

    fn index_at(positions: &[f32], at: f32, max: u32) -> Option<u32> {
        if at < 0.0 || positions.len() < 2 {
            return None;
        }
        let idx = positions.partition_point(|&p| p <= at);
        let idx = u32::try_from(idx.checked_sub(1)?).ok()?;
        (idx <= max).then_some(idx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn uniform_positions_accumulate() {
        let layout = GridLayout::uniform(3, 2, 50.0, 20.0);
        assert_eq!(layout.col_positions, vec![0.0, 50.0, 100.0]);
        assert_eq!(layout.row_positions, vec![0.0, 20.0, 40.0, 60.0]);
        assert_eq!(layout.total_width(), 100.0);
    }

    #[test]
    fn hidden_columns_have_zero_width() {
        let hidden: HashSet<u32> = [1].into_iter().collect();
        let layout = GridLayout::new(
            2,
            2,
            &HashMap::new(),
            &HashMap::new(),
            &hidden,
            &HashSet::new(),
            0,
            0,
        );
        let rect = layout.cell_rect(0, 1).unwrap();
        assert_eq!(rect.width, 0.0);
        assert_eq!(layout.cell_rect(0, 2).unwrap().x, DEFAULT_COL_WIDTH);
    }

    #[test]
    fn cell_rect_outside_grid_is_none() {
        let layout = GridLayout::uniform(2, 2, 10.0, 10.0);
        assert!(layout.cell_rect(2, 0).is_none());
        assert!(layout.cell_rect(0, 5).is_none());
    }

    #[test]
    fn hit_testing_finds_containing_cell() {
        let layout = GridLayout::uniform(10, 10, 50.0, 20.0);
        assert_eq!(layout.row_at_y(0.0), Some(0));
        assert_eq!(layout.row_at_y(39.9), Some(1));
        assert_eq!(layout.col_at_x(120.0), Some(2));
        assert_eq!(layout.col_at_x(-1.0), None);
        assert_eq!(layout.col_at_x(10_000.0), None);
    }

    #[test]
    fn frozen_sizes_follow_positions() {
        let layout = GridLayout::uniform(10, 10, 50.0, 20.0).with_frozen(2, 1);
        assert_eq!(layout.frozen_rows_height(), 40.0);
        assert_eq!(layout.frozen_cols_width(), 50.0);
    }
}
