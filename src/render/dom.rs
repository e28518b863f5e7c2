//! Live DOM adapters (wasm32 only).
//!
//! [`DomSvgSurface`] draws into an absolutely positioned `<svg>` attached to
//! the grid container. [`DomGeometry`] measures elements through the usual
//! `getBoundingClientRect` + window scroll page offset.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, SvgElement};

use super::backend::{same_px, DrawingSurface};
use super::svg::SVG_NS;
use crate::error::{BorderError, Result};
use crate::layout::GeometrySource;
use crate::types::{Offset, PathCommand, Size, StrokeKey};

/// One `<g>` plus the `<path>` elements it currently holds.
pub struct DomPathGroup {
    element: Element,
    paths: Vec<Element>,
}

/// An `<svg>` overlay inside the grid container
pub struct DomSvgSurface {
    document: Document,
    svg: SvgElement,
    width: f64,
    height: f64,
}

impl DomSvgSurface {
    /// Create a zero-sized overlay at the container's top-left, ignoring pointer events.
    pub fn new(container: &Element, z_index: i32) -> Result<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| BorderError::Surface("container has no owner document".into()))?;
        let svg = document
            .create_element_ns(Some(SVG_NS), "svg")?
            .dyn_into::<SvgElement>()
            .map_err(|_| BorderError::Surface("created element is not an SVG element".into()))?;

        let style = svg.style();
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("width", "0")?;
        style.set_property("height", "0")?;
        style.set_property("position", "absolute")?;
        style.set_property("z-index", &z_index.to_string())?;
        svg.set_attribute("pointer-events", "none")?;
        container.append_child(&svg)?;

        Ok(Self {
            document,
            svg,
            width: 0.0,
            height: 0.0,
        })
    }

    pub fn element(&self) -> &SvgElement {
        &self.svg
    }

    fn create_path(&self, parent: &Element) -> Result<Element> {
        let path = self.document.create_element_ns(Some(SVG_NS), "path")?;
        path.set_attribute("fill", "none")?;
        path.set_attribute("stroke-linecap", "square")?;
        parent.append_child(&path)?;
        Ok(path)
    }
}

impl DrawingSurface for DomSvgSurface {
    type Group = DomPathGroup;

    fn create_group(&mut self) -> Result<DomPathGroup> {
        let element = self.document.create_element_ns(Some(SVG_NS), "g")?;
        self.svg.append_child(&element)?;
        Ok(DomPathGroup {
            element,
            paths: Vec::new(),
        })
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        if same_px(self.width, width) && same_px(self.height, height) {
            return Ok(());
        }
        let style = self.svg.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;
        self.svg
            .set_attribute("viewBox", &format!("0 0 {width} {height}"))?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn paint(
        &mut self,
        group: &mut DomPathGroup,
        styles: &[StrokeKey],
        commands: &[PathCommand],
    ) -> Result<()> {
        let wanted = styles.len().min(commands.len());
        while group.paths.len() < wanted {
            let path = self.create_path(&group.element)?;
            group.paths.push(path);
        }
        for stale in group.paths.drain(wanted..) {
            stale.remove();
        }

        for ((path, stroke), command) in group.paths.iter().zip(styles).zip(commands) {
            path.set_attribute("d", command.as_str())?;
            path.set_attribute("stroke", &stroke.color)?;
            path.set_attribute("stroke-width", &stroke.width.to_string())?;
        }
        Ok(())
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// Measures live DOM elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomGeometry;

impl DomGeometry {
    fn page_offset(element: &Element) -> Result<Offset> {
        if !element.is_connected() {
            return Err(BorderError::Geometry("element is detached".into()));
        }
        let window =
            web_sys::window().ok_or_else(|| BorderError::Geometry("no window".into()))?;
        let rect = element.get_bounding_client_rect();
        let scroll_x = window.scroll_x().map_err(|e| BorderError::Geometry(format!("{e:?}")))?;
        let scroll_y = window.scroll_y().map_err(|e| BorderError::Geometry(format!("{e:?}")))?;
        Ok(Offset::new(rect.left() + scroll_x, rect.top() + scroll_y))
    }
}

impl GeometrySource for DomGeometry {
    type Anchor = Element;
    type Cell = Element;

    fn anchor_offset(&self, anchor: &Element) -> Result<Offset> {
        Self::page_offset(anchor)
    }

    fn cell_offset(&self, cell: &Element) -> Result<Offset> {
        Self::page_offset(cell)
    }

    fn cell_size(&self, cell: &Element) -> Result<Size> {
        if let Some(html) = cell.dyn_ref::<HtmlElement>() {
            return Ok(Size::new(
                f64::from(html.offset_width()),
                f64::from(html.offset_height()),
            ));
        }
        let rect = cell.get_bounding_client_rect();
        Ok(Size::new(rect.width(), rect.height()))
    }
}
