//! Border requests for selections and frozen-pane separators.
//!
//! A selection that crosses a frozen boundary is drawn as up to four
//! requests, one per pane. Only the selection's outer edges are drawn, so the
//! seams where panes meet stay invisible. Scrollable ranges are clamped to the
//! visible rows/columns; an edge cut off by the clamp is suppressed too.

use crate::layout::{GridLayout, Viewport};
use crate::types::{BorderRequest, CellAddr, Selection, StrokeStyle};

type Span = (u32, u32);

/// Split `min..=max` into its frozen part and its visible scrollable part.
fn split_span(min: u32, max: u32, frozen: u32, visible: Span) -> (Option<Span>, Option<Span>) {
    let frozen_span = if frozen > 0 {
        let end = max.min(frozen - 1);
        (min <= end).then_some((min, end))
    } else {
        None
    };

    let start = min.max(frozen).max(visible.0);
    let end = max.min(visible.1);
    let scroll_span = (max >= frozen && start <= end).then_some((start, end));

    (frozen_span, scroll_span)
}

/// Requests outlining `selection`, split across frozen panes.
pub fn selection_requests<'s>(
    selection: &Selection,
    layout: &GridLayout,
    viewport: &Viewport,
    style: &'s StrokeStyle,
) -> Vec<BorderRequest<'s, CellAddr>> {
    let (min_row, min_col, max_row, max_col) = selection.bounds();
    let max_row = max_row.min(layout.max_row);
    let max_col = max_col.min(layout.max_col);
    if min_row > max_row || min_col > max_col {
        return Vec::new();
    }

    let (frozen_rows, scroll_rows) = split_span(
        min_row,
        max_row,
        layout.frozen_rows,
        viewport.visible_rows(layout),
    );
    let (frozen_cols, scroll_cols) = split_span(
        min_col,
        max_col,
        layout.frozen_cols,
        viewport.visible_cols(layout),
    );

    let mut requests = Vec::new();
    for rows in [frozen_rows, scroll_rows].into_iter().flatten() {
        for cols in [frozen_cols, scroll_cols].into_iter().flatten() {
            let (row_start, row_end) = rows;
            let (col_start, col_end) = cols;
            requests.push(
                BorderRequest::new(
                    style,
                    CellAddr::new(row_start, col_start),
                    CellAddr::new(row_end, col_end),
                )
                .with_edges(
                    row_start == min_row,
                    col_end == max_col,
                    row_end == max_row,
                    col_start == min_col,
                ),
            );
        }
    }
    requests
}

/// Separator lines below the last frozen row and right of the last frozen column,
/// spanning the visible part of the grid.
pub fn frozen_divider_requests<'s>(
    layout: &GridLayout,
    viewport: &Viewport,
    style: &'s StrokeStyle,
) -> Vec<BorderRequest<'s, CellAddr>> {
    let mut requests = Vec::new();

    if layout.frozen_rows > 0 {
        let row = layout.frozen_rows - 1;
        let (_, last_col) = viewport.visible_cols(layout);
        requests.push(
            BorderRequest::new(style, CellAddr::new(row, 0), CellAddr::new(row, last_col))
                .with_edges(false, false, true, false),
        );
    }

    if layout.frozen_cols > 0 {
        let col = layout.frozen_cols - 1;
        let (_, last_row) = viewport.visible_rows(layout);
        requests.push(
            BorderRequest::new(style, CellAddr::new(0, col), CellAddr::new(last_row, col))
                .with_edges(false, true, false, false),
        );
    }

    requests
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn viewport(layout: &GridLayout) -> Viewport {
        let mut viewport = Viewport::new();
        viewport.resize(400.0, 200.0);
        viewport.clamp_scroll(layout);
        viewport
    }

    #[test]
    fn plain_selection_is_one_request_with_all_edges() {
        let layout = GridLayout::uniform(50, 20, 50.0, 20.0);
        let style = StrokeStyle::highlight(1, "#4b89ff");
        let requests = selection_requests(
            &Selection::cell_range(3, 1, 1, 2),
            &layout,
            &viewport(&layout),
            &style,
        );
        assert_eq!(requests.len(), 1);
        let r = &requests[0];
        assert_eq!((r.top_left, r.bottom_right), (CellAddr::new(1, 1), CellAddr::new(3, 2)));
        assert!(r.has_top && r.has_right && r.has_bottom && r.has_left);
    }

    #[test]
    fn selection_across_frozen_rows_hides_the_seam() {
        let layout = GridLayout::uniform(50, 20, 50.0, 20.0).with_frozen(2, 0);
        let style = StrokeStyle::highlight(1, "#4b89ff");
        let requests = selection_requests(
            &Selection::cell_range(0, 0, 4, 1),
            &layout,
            &viewport(&layout),
            &style,
        );
        assert_eq!(requests.len(), 2);

        let frozen = &requests[0];
        assert_eq!(frozen.bottom_right, CellAddr::new(1, 1));
        assert!(frozen.has_top && !frozen.has_bottom);

        let scroll = &requests[1];
        assert_eq!(scroll.top_left, CellAddr::new(2, 0));
        assert!(!scroll.has_top && scroll.has_bottom);
    }

    #[test]
    fn selection_across_both_panes_yields_four_quadrants() {
        let layout = GridLayout::uniform(50, 20, 50.0, 20.0).with_frozen(1, 1);
        let style = StrokeStyle::highlight(1, "#4b89ff");
        let requests = selection_requests(
            &Selection::cell_range(0, 0, 3, 3),
            &layout,
            &viewport(&layout),
            &style,
        );
        assert_eq!(requests.len(), 4);
        let edges = requests
            .iter()
            .filter(|r| r.has_top || r.has_right || r.has_bottom || r.has_left)
            .count();
        assert_eq!(edges, 4);
        assert!(requests[0].has_top && requests[0].has_left);
        assert!(!requests[0].has_right && !requests[0].has_bottom);
        assert!(requests[3].has_right && requests[3].has_bottom);
    }

    #[test]
    fn whole_column_selection_is_clamped_to_visible_rows() {
        let layout = GridLayout::uniform(1000, 20, 50.0, 20.0);
        let style = StrokeStyle::highlight(1, "#4b89ff");
        let requests = selection_requests(
            &Selection::column_range(2, 2),
            &layout,
            &viewport(&layout),
            &style,
        );
        assert_eq!(requests.len(), 1);
        let r = &requests[0];
        assert_eq!(r.top_left, CellAddr::new(0, 2));
        assert_eq!(r.bottom_right, CellAddr::new(10, 2));
        assert!(r.has_top && !r.has_bottom);
    }

    #[test]
    fn scrolled_out_selection_has_no_requests() {
        let layout = GridLayout::uniform(1000, 20, 50.0, 20.0);
        let mut vp = viewport(&layout);
        vp.set_scroll(0.0, 2000.0, &layout);
        let style = StrokeStyle::highlight(1, "#4b89ff");
        let requests = selection_requests(&Selection::cell(3, 3), &layout, &vp, &style);
        assert!(requests.is_empty());
    }

    #[test]
    fn dividers_follow_frozen_panes() {
        let layout = GridLayout::uniform(50, 20, 50.0, 20.0).with_frozen(2, 1);
        let style = StrokeStyle::plain(1, "#BABABA");
        let requests = frozen_divider_requests(&layout, &viewport(&layout), &style);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].top_left, CellAddr::new(1, 0));
        assert!(requests[0].has_bottom && !requests[0].has_top);
        assert_eq!(requests[1].top_left, CellAddr::new(0, 0));
        assert!(requests[1].has_right && !requests[1].has_left);

        let unfrozen = GridLayout::uniform(50, 20, 50.0, 20.0);
        assert!(frozen_divider_requests(&unfrozen, &viewport(&unfrozen), &style).is_empty());
    }
}
