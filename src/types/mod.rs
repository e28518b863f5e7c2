//! Data types for border requests and their geometry.

mod geometry;
mod request;
mod selection;
mod style;

pub use geometry::*;
pub use request::*;
pub use selection::*;
pub use style::*;
