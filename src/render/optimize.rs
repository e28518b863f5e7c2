//! Line geometry optimizer.
//!
//! Collapses a set of same-stroke lines into the fewest SVG path operations:
//! collinear horizontal lines that touch or overlap become one `H` run,
//! vertical ones one `V` run. Output is deterministic for identical input.

use std::cmp::Ordering;

use crate::types::{LineSegment, PathCommand};

/// A run along one axis: fixed coordinate plus a span on the other axis.
#[derive(Debug, Clone, Copy)]
struct Run {
    at: f64,
    start: f64,
    end: f64,
}

impl Run {
    fn new(at: f64, a: f64, b: f64) -> Self {
        Self {
            at,
            start: a.min(b),
            end: a.max(b),
        }
    }
}

fn cmp_runs(a: &Run, b: &Run) -> Ordering {
    a.at.total_cmp(&b.at)
        .then(a.start.total_cmp(&b.start))
        .then(a.end.total_cmp(&b.end))
}

/// Sort runs and merge those on the same line whose spans touch or overlap.
fn merge_runs(mut runs: Vec<Run>) -> Vec<Run> {
    runs.sort_by(cmp_runs);

    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(last) if last.at.total_cmp(&run.at).is_eq() && run.start <= last.end => {
                last.end = last.end.max(run.end);
            }
            _ => merged.push(run),
        }
    }
    merged
}

/// Shortest decimal form; never prints `-0`.
fn num(v: f64) -> String {
    format!("{}", v + 0.0)
}

/// Optimize one stroke's lines into a single path command.
pub fn optimize_path(lines: &[LineSegment]) -> PathCommand {
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    let mut other = Vec::new();

    for line in lines {
        if line.is_horizontal() {
            horizontal.push(Run::new(line.y1, line.x1, line.x2));
        } else if line.is_vertical() {
            vertical.push(Run::new(line.x1, line.y1, line.y2));
        } else {
            other.push(*line);
        }
    }

    let mut parts: Vec<String> = Vec::with_capacity(lines.len());
    for run in merge_runs(horizontal) {
        parts.push(format!(
            "M {} {} H {}",
            num(run.start),
            num(run.at),
            num(run.end)
        ));
    }
    for run in merge_runs(vertical) {
        parts.push(format!(
            "M {} {} V {}",
            num(run.at),
            num(run.start),
            num(run.end)
        ));
    }
    for line in other {
        parts.push(format!(
            "M {} {} L {} {}",
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2)
        ));
    }

    PathCommand::new(parts.join(" "))
}
