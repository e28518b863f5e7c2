//! Border rendering engine with pluggable drawing surfaces.
//!
//! This module provides:
//! - The [`BorderRenderer`] orchestrator and its path group registry
//! - The line clipper and path optimizer it feeds each stroke through
//! - The [`DrawingSurface`] trait, an in-memory SVG surface and (on wasm32) a DOM one
//! - Request builders for selections and frozen-pane separators

pub mod backend;
pub mod clip;
pub mod engine;
pub mod groups;
pub mod optimize;
pub mod selection;
pub mod svg;

#[cfg(target_arch = "wasm32")]
pub mod dom;

// Re-export commonly used types
pub use backend::DrawingSurface;
pub use clip::adjust_lines_to_view_box;
pub use engine::{region_box, BorderRenderer, RegionBox};
pub use groups::{PathGroup, PathGroupRegistry};
pub use optimize::optimize_path;
pub use selection::{frozen_divider_requests, selection_requests};
pub use svg::{SvgGroupId, SvgPath, SvgSurface, SVG_NS};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomGeometry, DomPathGroup, DomSvgSurface};
