//! Geometry collaborators for the border engine.
//!
//! This module handles:
//! - The [`GeometrySource`] read-side contract the engine measures through
//! - Pre-computed grid positions ([`GridLayout`]) and scroll state ([`Viewport`])
//! - [`GridGeometry`], a virtualized-grid geometry source built on the two

mod grid_layout;
mod viewport;

pub use grid_layout::{CellRect, GridLayout, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT};
pub use viewport::Viewport;

use crate::error::{BorderError, Result};
use crate::types::{CellAddr, Offset, Size};

/// Read-only geometry queries used during the read phase of a render cycle.
///
/// Every method is a layout read. The engine calls them all before it
/// touches the drawing surface.
pub trait GeometrySource {
    /// The element borders are positioned relative to.
    type Anchor: ?Sized;
    /// A handle to one cell.
    type Cell: PartialEq;

    /// Page offset of the anchor element.
    fn anchor_offset(&self, anchor: &Self::Anchor) -> Result<Offset>;

    /// Page offset of a cell's top-left corner.
    fn cell_offset(&self, cell: &Self::Cell) -> Result<Offset>;

    /// Outer width/height of a cell.
    fn cell_size(&self, cell: &Self::Cell) -> Result<Size>;
}

/// Marker for the grid container, the anchor of a [`GridGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridContainer;

/// Geometry of a scrolled grid with frozen panes, addressed by [`CellAddr`].
#[derive(Debug, Clone, Copy)]
pub struct GridGeometry<'a> {
    pub layout: &'a GridLayout,
    pub viewport: &'a Viewport,
}

impl<'a> GridGeometry<'a> {
    pub fn new(layout: &'a GridLayout, viewport: &'a Viewport) -> Self {
        Self { layout, viewport }
    }

    fn rect(&self, cell: CellAddr) -> Result<crate::layout::CellRect> {
        self.layout.cell_rect(cell.row, cell.col).ok_or_else(|| {
            BorderError::Geometry(format!(
                "cell ({}, {}) is outside the grid",
                cell.row, cell.col
            ))
        })
    }
}

impl GeometrySource for GridGeometry<'_> {
    type Anchor = GridContainer;
    type Cell = CellAddr;

    fn anchor_offset(&self, _anchor: &GridContainer) -> Result<Offset> {
        Ok(self.viewport.origin)
    }

    fn cell_offset(&self, cell: &CellAddr) -> Result<Offset> {
        let rect = self.rect(*cell)?;
        let (sx, sy) = self
            .viewport
            .to_screen_frozen(rect.x, rect.y, cell.row, cell.col, self.layout);
        let origin = self.viewport.origin;
        Ok(Offset::new(
            origin.left + f64::from(sx),
            origin.top + f64::from(sy),
        ))
    }

    fn cell_size(&self, cell: &CellAddr) -> Result<Size> {
        let rect = self.rect(*cell)?;
        let scale = self.viewport.scale;
        Ok(Size::new(
            f64::from(rect.width * scale),
            f64::from(rect.height * scale),
        ))
    }
}
