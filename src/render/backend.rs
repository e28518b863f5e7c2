//! Drawing surface trait for pluggable overlay implementations.
//!
//! This module defines the write side of a render cycle. The engine only
//! calls these methods after every geometry read has completed, so an
//! implementation is free to invalidate layout.

use crate::error::Result;
use crate::types::{PathCommand, StrokeKey};

/// A retained-mode 2D surface that can show stroked paths in layered groups.
pub trait DrawingSurface {
    /// Handle to one group's sub-element (e.g. an SVG `<g>`).
    type Group;

    /// Create a new group stacked above every existing group.
    fn create_group(&mut self) -> Result<Self::Group>;

    /// Set the surface's visible bounding box.
    ///
    /// Must not write anything when the size is unchanged.
    fn resize(&mut self, width: f64, height: f64) -> Result<()>;

    /// Replace the group's content with one stroked path per `(styles[i], commands[i])`,
    /// in order. Elements for styles no longer present must be removed.
    fn paint(
        &mut self,
        group: &mut Self::Group,
        styles: &[StrokeKey],
        commands: &[PathCommand],
    ) -> Result<()>;

    /// Current surface width
    fn width(&self) -> f64;

    /// Current surface height
    fn height(&self) -> f64;
}

/// Whether two pixel sizes are the same, without float `==`.
pub(crate) fn same_px(a: f64, b: f64) -> bool {
    a.total_cmp(&b).is_eq()
}
