//! Common test utilities: a scripted geometry source and a recording surface.
//!
//! Both share one event log so tests can assert on the exact interleaving of
//! layout reads and surface writes within a render cycle.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gridborders::error::{BorderError, Result};
use gridborders::layout::GeometrySource;
use gridborders::render::DrawingSurface;
use gridborders::types::{Offset, PathCommand, Size, StrokeKey};

/// Something that happened during a render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ReadAnchor,
    ReadOffset(&'static str),
    ReadSize(&'static str),
    CreateGroup(usize),
    Resize(f64, f64),
    Paint(usize, Vec<String>),
}

impl Event {
    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Event::ReadAnchor | Event::ReadOffset(_) | Event::ReadSize(_)
        )
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Event::Resize(..) | Event::Paint(..))
    }
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Cells named by string, each with a fixed page offset and size.
pub struct ScriptedGeometry {
    pub anchor: Offset,
    pub cells: HashMap<&'static str, (Offset, Size)>,
    pub log: Log,
}

impl ScriptedGeometry {
    pub fn new(log: &Log) -> Self {
        Self {
            anchor: Offset::default(),
            cells: HashMap::new(),
            log: Rc::clone(log),
        }
    }

    #[must_use]
    pub fn anchor_at(mut self, left: f64, top: f64) -> Self {
        self.anchor = Offset::new(left, top);
        self
    }

    /// Add a cell at page (left, top) with the given outer size.
    #[must_use]
    pub fn cell(mut self, name: &'static str, left: f64, top: f64, width: f64, height: f64) -> Self {
        self.cells
            .insert(name, (Offset::new(left, top), Size::new(width, height)));
        self
    }

    fn lookup(&self, name: &'static str) -> Result<(Offset, Size)> {
        self.cells
            .get(name)
            .copied()
            .ok_or_else(|| BorderError::Geometry(format!("{name} is detached")))
    }

    pub fn reads_of(&self, name: &'static str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::ReadOffset(n) | Event::ReadSize(n) if *n == name))
            .count()
    }
}

impl GeometrySource for ScriptedGeometry {
    type Anchor = ();
    type Cell = &'static str;

    fn anchor_offset(&self, _anchor: &()) -> Result<Offset> {
        self.log.borrow_mut().push(Event::ReadAnchor);
        Ok(self.anchor)
    }

    fn cell_offset(&self, cell: &&'static str) -> Result<Offset> {
        self.log.borrow_mut().push(Event::ReadOffset(*cell));
        Ok(self.lookup(*cell)?.0)
    }

    fn cell_size(&self, cell: &&'static str) -> Result<Size> {
        self.log.borrow_mut().push(Event::ReadSize(*cell));
        Ok(self.lookup(*cell)?.1)
    }
}

/// A surface that records every write and keeps the last painted content.
pub struct RecordingSurface {
    pub log: Log,
    pub groups: Vec<Vec<(String, String)>>,
    width: f64,
    height: f64,
}

impl RecordingSurface {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
            groups: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }
}

impl DrawingSurface for RecordingSurface {
    type Group = usize;

    fn create_group(&mut self) -> Result<usize> {
        self.groups.push(Vec::new());
        let id = self.groups.len() - 1;
        self.log.borrow_mut().push(Event::CreateGroup(id));
        Ok(id)
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.log.borrow_mut().push(Event::Resize(width, height));
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn paint(
        &mut self,
        group: &mut usize,
        styles: &[StrokeKey],
        commands: &[PathCommand],
    ) -> Result<()> {
        let content: Vec<(String, String)> = styles
            .iter()
            .zip(commands)
            .map(|(s, c)| (s.to_string(), c.to_string()))
            .collect();
        self.log.borrow_mut().push(Event::Paint(
            *group,
            content.iter().map(|(s, _)| s.clone()).collect(),
        ));
        self.groups[*group] = content;
        Ok(())
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// Assert that no read in `log` comes after the first write.
pub fn assert_reads_before_writes(log: &Log) {
    let events = log.borrow();
    let first_write = events.iter().position(Event::is_write);
    let last_read = events.iter().rposition(Event::is_read);
    if let (Some(write), Some(read)) = (first_write, last_read) {
        assert!(
            read < write,
            "read at {read} after first write at {write}: {events:?}"
        );
    }
}
