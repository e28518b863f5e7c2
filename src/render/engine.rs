//! The border rendering engine.
//!
//! One [`BorderRenderer::render`] call is one cycle. It runs in two phases:
//!
//! 1. Read: the anchor offset and every cell's offset/size are measured and
//!    turned into line segments, bucketed by priority and stroke. Commands
//!    and the render extent are derived from those lines (pure work).
//! 2. Write: missing group elements are created, the surface is resized once,
//!    then each group is painted once in ascending priority.
//!
//! No geometry query happens after the first surface write.

use tracing::{debug, debug_span, trace};

use super::backend::DrawingSurface;
use super::groups::PathGroupRegistry;
use crate::config::BorderRendererConfig;
use crate::error::Result;
use crate::layout::GeometrySource;
use crate::types::{
    BorderRequest, Edge, LineSegment, Offset, RenderExtent, StrokeKind,
};

/// Corners of a request's region in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RegionBox {
    /// Nothing visible can come from a region entirely on the negative side of an axis.
    pub fn is_offscreen(&self) -> bool {
        (self.x1 < 0.0 && self.x2 < 0.0) || (self.y1 < 0.0 && self.y2 < 0.0)
    }

    /// The segment for one edge of the box.
    pub fn edge(&self, edge: Edge) -> LineSegment {
        let Self { x1, y1, x2, y2 } = *self;
        match edge {
            Edge::Top => LineSegment::new(x1, y1, x2, y1),
            Edge::Right => LineSegment::new(x2, y1, x2, y2),
            Edge::Bottom => LineSegment::new(x1, y2, x2, y2),
            Edge::Left => LineSegment::new(x1, y1, x1, y2),
        }
    }
}

/// Measure a request and translate it into surface-local coordinates.
///
/// Returns `None` for regions that lie entirely off the negative side of an axis.
pub fn region_box<G: GeometrySource>(
    geometry: &G,
    origin: Offset,
    config: &BorderRendererConfig,
    request: &BorderRequest<'_, G::Cell>,
) -> Result<Option<RegionBox>> {
    let first = geometry.cell_offset(&request.top_left)?;
    let last = if request.top_left == request.bottom_right {
        first
    } else {
        geometry.cell_offset(&request.bottom_right)?
    };
    let last_size = geometry.cell_size(&request.bottom_right)?;

    let dx = config.overlap_bias - origin.left;
    let dy = config.overlap_bias - origin.top;
    let mut region = RegionBox {
        x1: first.left + dx,
        y1: first.top + dy,
        x2: last.left + last_size.width + dx,
        y2: last.top + last_size.height + dy,
    };

    if request.style.kind == StrokeKind::CurrentHighlight {
        region.x1 += config.current_inset;
        region.y1 += config.current_inset;
    }

    if region.is_offscreen() {
        return Ok(None);
    }
    Ok(Some(region))
}

/// Renders batches of border requests onto a [`DrawingSurface`].
pub struct BorderRenderer<S: DrawingSurface> {
    surface: S,
    registry: PathGroupRegistry<S::Group>,
    config: BorderRendererConfig,
    extent: RenderExtent,
}

impl<S: DrawingSurface> BorderRenderer<S> {
    /// Create a renderer with the default tuning.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, BorderRendererConfig::default())
    }

    pub fn with_config(surface: S, config: BorderRendererConfig) -> Self {
        Self {
            surface,
            registry: PathGroupRegistry::new(),
            config,
            extent: RenderExtent::default(),
        }
    }

    /// Run one render cycle.
    ///
    /// Requests are drawn relative to `anchor`. Faults from the geometry
    /// source or the surface are returned unchanged; a geometry fault leaves
    /// the surface untouched.
    pub fn render<G: GeometrySource>(
        &mut self,
        geometry: &G,
        anchor: &G::Anchor,
        requests: &[BorderRequest<'_, G::Cell>],
    ) -> Result<()> {
        let _span = debug_span!("border_render", requests = requests.len()).entered();

        // Read phase
        let origin = geometry.anchor_offset(anchor)?;
        self.registry.reset();
        if let Some(max_priority) = requests.iter().map(BorderRequest::priority).max() {
            self.registry.ensure_groups(max_priority);
        }

        let mut skipped = 0usize;
        for request in requests {
            let Some(region) = region_box(geometry, origin, &self.config, request)? else {
                trace!(priority = request.priority(), "skipping off-screen region");
                skipped += 1;
                continue;
            };
            let group = self.registry.ensure_group(request.priority());
            for edge in Edge::ALL {
                if request.draws_edge(edge) {
                    group.push_line(request.style.stroke_for(edge), region.edge(edge));
                }
            }
        }
        self.extent = self.registry.build_commands(self.config.safety_margin);

        // Write phase
        let surface = &mut self.surface;
        self.registry.attach_handles(|| surface.create_group())?;
        surface.resize(self.extent.width, self.extent.height)?;
        self.registry
            .for_each_attached(|group, styles, commands| surface.paint(group, styles, commands))?;

        debug!(
            groups = self.registry.len(),
            skipped,
            width = self.extent.width,
            height = self.extent.height,
            "border render complete"
        );
        Ok(())
    }

    /// Extent computed by the last cycle.
    pub fn extent(&self) -> RenderExtent {
        self.extent
    }

    pub fn registry(&self) -> &PathGroupRegistry<S::Group> {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &BorderRendererConfig {
        &self.config
    }

    /// Hand the surface back, dropping all group state.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{Size, StrokeStyle};

    struct Fixed;

    impl GeometrySource for Fixed {
        type Anchor = ();
        type Cell = (f64, f64);

        fn anchor_offset(&self, _anchor: &()) -> Result<Offset> {
            Ok(Offset::new(0.0, 0.0))
        }

        fn cell_offset(&self, cell: &(f64, f64)) -> Result<Offset> {
            Ok(Offset::new(cell.0, cell.1))
        }

        fn cell_size(&self, _cell: &(f64, f64)) -> Result<Size> {
            Ok(Size::new(50.0, 20.0))
        }
    }

    #[test]
    fn region_applies_overlap_bias() {
        let style = StrokeStyle::plain(1, "black");
        let request = BorderRequest::single(&style, (10.0, 20.0));
        let region = region_box(&Fixed, Offset::default(), &BorderRendererConfig::default(), &request)
            .unwrap()
            .unwrap();
        assert_eq!(
            region,
            RegionBox {
                x1: 9.0,
                y1: 19.0,
                x2: 59.0,
                y2: 39.0
            }
        );
    }

    #[test]
    fn current_highlight_insets_top_left_only() {
        let style = StrokeStyle::current(2, "#4b89ff");
        let request = BorderRequest::single(&style, (10.0, 20.0));
        let region = region_box(&Fixed, Offset::default(), &BorderRendererConfig::default(), &request)
            .unwrap()
            .unwrap();
        assert_eq!((region.x1, region.y1), (10.0, 20.0));
        assert_eq!((region.x2, region.y2), (59.0, 39.0));
    }

    #[test]
    fn region_left_of_origin_is_skipped() {
        let style = StrokeStyle::plain(1, "black");
        let request = BorderRequest::single(&style, (10.0, 20.0));
        let region = region_box(
            &Fixed,
            Offset::new(100.0, 0.0),
            &BorderRendererConfig::default(),
            &request,
        )
        .unwrap();
        assert!(region.is_none());
    }

    #[test]
    fn region_straddling_origin_is_kept() {
        let region = RegionBox {
            x1: -5.0,
            y1: -5.0,
            x2: 10.0,
            y2: 10.0,
        };
        assert!(!region.is_offscreen());
        assert_eq!(region.edge(Edge::Left), LineSegment::new(-5.0, -5.0, -5.0, 10.0));
    }
}
