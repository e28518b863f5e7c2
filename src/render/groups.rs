//! Path groups: one per priority layer, reused across render cycles.
//!
//! A group buckets its lines by stroke during the read phase and derives one
//! optimized command per stroke before the write phase. The surface handle
//! (`H`) is attached lazily, in the write phase, so building groups never
//! touches the drawing surface.

use indexmap::IndexMap;

use super::clip::adjust_lines_to_view_box;
use super::optimize::optimize_path;
use crate::types::{LineSegment, PathCommand, RenderExtent, StrokeKey};

/// The lines and derived commands for one priority layer
#[derive(Debug)]
pub struct PathGroup<H> {
    priority: usize,
    lines: IndexMap<StrokeKey, Vec<LineSegment>>,
    styles: Vec<StrokeKey>,
    commands: Vec<PathCommand>,
    handle: Option<H>,
}

impl<H> PathGroup<H> {
    fn new(priority: usize) -> Self {
        Self {
            priority,
            lines: IndexMap::new(),
            styles: Vec::new(),
            commands: Vec::new(),
            handle: None,
        }
    }

    pub fn priority(&self) -> usize {
        self.priority
    }

    /// Drop this cycle's lines. Commands stay until the next [`Self::build_commands`].
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    /// Append a line to the bucket for `stroke`, creating the bucket on first use.
    pub fn push_line(&mut self, stroke: StrokeKey, line: LineSegment) {
        self.lines.entry(stroke).or_default().push(line);
    }

    /// Stroke buckets in first-use order.
    pub fn lines(&self) -> &IndexMap<StrokeKey, Vec<LineSegment>> {
        &self.lines
    }

    pub fn lines_for(&self, stroke: &StrokeKey) -> Option<&[LineSegment]> {
        self.lines.get(stroke).map(Vec::as_slice)
    }

    pub fn segment_count(&self) -> usize {
        self.lines.values().map(Vec::len).sum()
    }

    /// Strokes of the derived commands, in paint order.
    pub fn styles(&self) -> &[StrokeKey] {
        &self.styles
    }

    /// Derived commands, parallel to [`Self::styles`].
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Derive one optimized command per stroke bucket and grow `extent` to
    /// cover every bucket's furthest reach plus `margin`.
    pub fn build_commands(&mut self, extent: &mut RenderExtent, margin: f64) {
        self.styles.clear();
        self.commands.clear();

        for (stroke, lines) in &self.lines {
            let adjusted =
                adjust_lines_to_view_box(stroke.width, lines, f64::INFINITY, f64::INFINITY);
            self.commands.push(optimize_path(&adjusted));
            self.styles.push(stroke.clone());

            let reach_x = lines.iter().fold(0.0_f64, |acc, l| acc.max(l.x2));
            let reach_y = lines.iter().fold(0.0_f64, |acc, l| acc.max(l.y2));
            extent.include(reach_x + margin, reach_y + margin);
        }
    }
}

/// Priority-indexed arena of path groups.
///
/// Groups `0..len` always exist contiguously; once created a group is never
/// removed, so paint order (ascending index) stays stable.
#[derive(Debug)]
pub struct PathGroupRegistry<H> {
    groups: Vec<PathGroup<H>>,
}

impl<H> Default for PathGroupRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> PathGroupRegistry<H> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Clear every group's lines for a new cycle.
    pub fn reset(&mut self) {
        for group in &mut self.groups {
            group.reset();
        }
    }

    /// Materialize groups `0..=max_priority` in one pass.
    pub fn ensure_groups(&mut self, max_priority: usize) {
        let next = self.groups.len();
        self.groups
            .extend((next..=max_priority).map(PathGroup::new));
    }

    /// The group at `priority`, creating it and any lower groups first.
    #[allow(clippy::indexing_slicing)] // ensure_groups guarantees len > priority
    pub fn ensure_group(&mut self, priority: usize) -> &mut PathGroup<H> {
        self.ensure_groups(priority);
        &mut self.groups[priority]
    }

    pub fn get(&self, priority: usize) -> Option<&PathGroup<H>> {
        self.groups.get(priority)
    }

    /// Groups in ascending priority (paint) order.
    pub fn iter(&self) -> impl Iterator<Item = &PathGroup<H>> {
        self.groups.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PathGroup<H>> {
        self.groups.iter_mut()
    }

    /// Rebuild every group's commands; returns the extent they need.
    pub fn build_commands(&mut self, margin: f64) -> RenderExtent {
        let mut extent = RenderExtent::default();
        for group in &mut self.groups {
            group.build_commands(&mut extent, margin);
        }
        extent
    }

    /// Attach surface handles to groups that do not have one yet, in ascending order.
    pub fn attach_handles<E>(
        &mut self,
        mut create: impl FnMut() -> Result<H, E>,
    ) -> Result<usize, E> {
        let mut created = 0;
        for group in &mut self.groups {
            if group.handle.is_none() {
                group.handle = Some(create()?);
                created += 1;
            }
        }
        Ok(created)
    }

    /// Visit every group that has a handle, in ascending priority order.
    pub fn for_each_attached<E>(
        &mut self,
        mut visit: impl FnMut(&mut H, &[StrokeKey], &[PathCommand]) -> Result<(), E>,
    ) -> Result<(), E> {
        for group in &mut self.groups {
            if let Some(handle) = group.handle.as_mut() {
                visit(handle, &group.styles, &group.commands)?;
            }
        }
        Ok(())
    }
}
