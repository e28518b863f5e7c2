use super::{Edge, StrokeStyle};

/// One instruction to draw up to four edges around a rectangular cell region.
///
/// `C` is whatever handle the geometry source uses to identify a cell
/// (a DOM element, a `(row, col)` address, ...). `top_left` and
/// `bottom_right` may be the same cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderRequest<'s, C> {
    pub style: &'s StrokeStyle,
    pub top_left: C,
    pub bottom_right: C,
    pub has_top: bool,
    pub has_right: bool,
    pub has_bottom: bool,
    pub has_left: bool,
}

impl<'s, C> BorderRequest<'s, C> {
    /// A request for a region with all four edges present.
    pub fn new(style: &'s StrokeStyle, top_left: C, bottom_right: C) -> Self {
        Self {
            style,
            top_left,
            bottom_right,
            has_top: true,
            has_right: true,
            has_bottom: true,
            has_left: true,
        }
    }

    /// Set which edges are present, in CSS order (top, right, bottom, left).
    #[must_use]
    pub fn with_edges(mut self, top: bool, right: bool, bottom: bool, left: bool) -> Self {
        self.has_top = top;
        self.has_right = right;
        self.has_bottom = bottom;
        self.has_left = left;
        self
    }

    pub fn has_edge(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.has_top,
            Edge::Right => self.has_right,
            Edge::Bottom => self.has_bottom,
            Edge::Left => self.has_left,
        }
    }

    /// Whether `edge` will produce a segment: present on the request and not hidden by the style.
    pub fn draws_edge(&self, edge: Edge) -> bool {
        self.has_edge(edge) && self.style.shows_edge(edge)
    }

    /// Index of the path group this request lands in.
    pub fn priority(&self) -> usize {
        self.style.layer().index()
    }
}

impl<'s, C: Clone> BorderRequest<'s, C> {
    /// A request around a single cell.
    pub fn single(style: &'s StrokeStyle, cell: C) -> Self {
        Self::new(style, cell.clone(), cell)
    }
}
