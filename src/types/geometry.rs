use serde::{Deserialize, Serialize};

/// Page offset of an element (`{left, top}`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Outer width/height of an element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned line in surface-local pixels.
///
/// The engine always builds lines with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// True when both ends share a y coordinate.
    pub fn is_horizontal(&self) -> bool {
        self.y1.total_cmp(&self.y2).is_eq()
    }

    /// True when both ends share an x coordinate.
    pub fn is_vertical(&self) -> bool {
        self.x1.total_cmp(&self.x2).is_eq()
    }
}

/// Minimal surface size that contains every drawn line
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderExtent {
    pub width: f64,
    pub height: f64,
}

impl RenderExtent {
    /// Grow to cover `width`/`height`; never shrinks.
    pub fn include(&mut self, width: f64, height: f64) {
        if width > self.width {
            self.width = width;
        }
        if height > self.height {
            self.height = height;
        }
    }
}

/// An optimized path description for one stroke (SVG path data).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PathCommand(String);

impl PathCommand {
    pub fn new(d: impl Into<String>) -> Self {
        Self(d.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PathCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
