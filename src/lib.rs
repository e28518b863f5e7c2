//! gridborders - border overlay renderer for virtualized grids
//!
//! Draws selection highlights, custom cell borders and frozen-pane separators
//! as a handful of SVG paths instead of thousands of per-cell elements:
//! - Per-cell border requests are merged into one path per stroke and layer
//! - Highlight layers always paint above plain borders
//! - All geometry reads finish before the first surface write (no layout thrashing)
//! - Works against the live DOM (wasm32) or an in-memory SVG document
//!
//! # Usage (Rust)
//!
//! ```
//! use gridborders::layout::{GridContainer, GridGeometry, GridLayout, Viewport};
//! use gridborders::render::{BorderRenderer, SvgSurface};
//! use gridborders::types::{BorderRequest, CellAddr, StrokeStyle};
//!
//! let layout = GridLayout::uniform(100, 26, 50.0, 20.0);
//! let viewport = Viewport::new();
//! let style = StrokeStyle::current(2, "#4b89ff");
//! let requests = [BorderRequest::single(&style, CellAddr::new(3, 2))];
//!
//! let mut renderer = BorderRenderer::new(SvgSurface::new());
//! renderer
//!     .render(&GridGeometry::new(&layout, &viewport), &GridContainer, &requests)
//!     .unwrap();
//! assert_eq!(renderer.surface().groups().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod types;

#[cfg(target_arch = "wasm32")]
mod overlay;

use wasm_bindgen::prelude::*;

pub use config::BorderRendererConfig;
pub use error::{BorderError, Result};
pub use render::{BorderRenderer, DrawingSurface};

#[cfg(target_arch = "wasm32")]
pub use overlay::BorderOverlay;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
