use serde::{Deserialize, Serialize};

/// Zero-based address of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellAddr {
    pub row: u32,
    pub col: u32,
}

impl CellAddr {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Type of selection range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionType {
    /// Standard cell selection (default)
    #[default]
    CellRange,
    /// Entire row(s) selected
    RowRange,
    /// Entire column(s) selected
    ColumnRange,
    /// All cells selected (corner click)
    All,
}

/// A rectangular selection. Open-ended ranges use `u32::MAX` and are
/// clamped against the grid when turned into border requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub selection_type: SelectionType,
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl Selection {
    /// Create a new cell range selection
    pub fn cell_range(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            selection_type: SelectionType::CellRange,
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// A single-cell selection.
    pub fn cell(row: u32, col: u32) -> Self {
        Self::cell_range(row, col, row, col)
    }

    /// Create a row range selection
    pub fn row_range(start_row: u32, end_row: u32) -> Self {
        Self {
            selection_type: SelectionType::RowRange,
            start_row,
            start_col: 0,
            end_row,
            end_col: u32::MAX,
        }
    }

    /// Create a column range selection
    pub fn column_range(start_col: u32, end_col: u32) -> Self {
        Self {
            selection_type: SelectionType::ColumnRange,
            start_row: 0,
            start_col,
            end_row: u32::MAX,
            end_col,
        }
    }

    /// Create a select-all selection
    pub fn all() -> Self {
        Self {
            selection_type: SelectionType::All,
            start_row: 0,
            start_col: 0,
            end_row: u32::MAX,
            end_col: u32::MAX,
        }
    }

    /// Get normalized bounds (min_row, min_col, max_row, max_col)
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.start_row.min(self.end_row),
            self.start_col.min(self.end_col),
            self.start_row.max(self.end_row),
            self.start_col.max(self.end_col),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_normalize_reversed_drag() {
        let sel = Selection::cell_range(5, 4, 1, 2);
        assert_eq!(sel.bounds(), (1, 2, 5, 4));
    }

    #[test]
    fn row_range_spans_all_columns() {
        let sel = Selection::row_range(3, 2);
        assert_eq!(sel.bounds(), (2, 0, 3, u32::MAX));
        assert_eq!(sel.selection_type, SelectionType::RowRange);
    }
}
