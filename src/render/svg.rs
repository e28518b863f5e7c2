//! Retained in-memory SVG surface.
//!
//! Holds the same structure the DOM surface builds (one `<g>` per group, one
//! `<path>` per stroke) and serializes it with quick-xml. Useful for
//! server-side rendering, snapshots and tests.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use super::backend::{same_px, DrawingSurface};
use crate::config::DEFAULT_Z_INDEX;
use crate::error::{BorderError, Result};
use crate::types::{PathCommand, StrokeKey};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One painted path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgPath {
    pub stroke: StrokeKey,
    pub d: PathCommand,
}

/// Index of a group inside an [`SvgSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgGroupId(pub usize);

/// In-memory SVG document
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    z_index: i32,
    groups: Vec<Vec<SvgPath>>,
    resize_writes: usize,
    paint_writes: usize,
}

impl SvgSurface {
    /// A zero-sized surface with no groups.
    pub fn new() -> Self {
        Self::with_z_index(DEFAULT_Z_INDEX)
    }

    pub fn with_z_index(z_index: i32) -> Self {
        Self {
            z_index,
            ..Self::default()
        }
    }

    /// Paths of every group, in paint order.
    pub fn groups(&self) -> &[Vec<SvgPath>] {
        &self.groups
    }

    pub fn group(&self, id: SvgGroupId) -> Option<&[SvgPath]> {
        self.groups.get(id.0).map(Vec::as_slice)
    }

    /// Number of resizes that actually changed the size.
    pub fn resize_writes(&self) -> usize {
        self.resize_writes
    }

    /// Number of paint calls received.
    pub fn paint_writes(&self) -> usize {
        self.paint_writes
    }

    /// Serialize the surface as a standalone `<svg>` element.
    ///
    /// # Errors
    /// Returns [`BorderError::Svg`] if the writer fails.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        let width = self.width.to_string();
        let height = self.height.to_string();
        let view_box = format!("0 0 {width} {height}");
        let style = format!(
            "position:absolute;top:0;left:0;width:{width}px;height:{height}px;z-index:{}",
            self.z_index
        );
        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NS));
        svg.push_attribute(("width", width.as_str()));
        svg.push_attribute(("height", height.as_str()));
        svg.push_attribute(("viewBox", view_box.as_str()));
        svg.push_attribute(("style", style.as_str()));
        svg.push_attribute(("pointer-events", "none"));
        writer.write_event(Event::Start(svg))?;

        for paths in &self.groups {
            writer.write_event(Event::Start(BytesStart::new("g")))?;
            for path in paths {
                let stroke_width = path.stroke.width.to_string();
                let mut el = BytesStart::new("path");
                el.push_attribute(("d", path.d.as_str()));
                el.push_attribute(("stroke", path.stroke.color.as_str()));
                el.push_attribute(("stroke-width", stroke_width.as_str()));
                el.push_attribute(("stroke-linecap", "square"));
                el.push_attribute(("fill", "none"));
                writer.write_event(Event::Empty(el))?;
            }
            writer.write_event(Event::End(BytesEnd::new("g")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;
        String::from_utf8(writer.into_inner()).map_err(|e| BorderError::Svg(e.to_string()))
    }
}

impl DrawingSurface for SvgSurface {
    type Group = SvgGroupId;

    fn create_group(&mut self) -> Result<SvgGroupId> {
        self.groups.push(Vec::new());
        Ok(SvgGroupId(self.groups.len() - 1))
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        if same_px(self.width, width) && same_px(self.height, height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.resize_writes += 1;
        Ok(())
    }

    fn paint(
        &mut self,
        group: &mut SvgGroupId,
        styles: &[StrokeKey],
        commands: &[PathCommand],
    ) -> Result<()> {
        let paths = self
            .groups
            .get_mut(group.0)
            .ok_or_else(|| BorderError::Surface(format!("unknown group {}", group.0)))?;
        paths.clear();
        paths.extend(styles.iter().zip(commands).map(|(stroke, d)| SvgPath {
            stroke: stroke.clone(),
            d: d.clone(),
        }));
        self.paint_writes += 1;
        Ok(())
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}
