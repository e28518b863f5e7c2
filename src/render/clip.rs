//! Viewport clipper: normalizes lines to a surface of a given size.
//!
//! Odd stroke widths are shifted by half a pixel on the perpendicular axis so
//! they land on whole device pixels. Lines are then kept inside the surface:
//! the perpendicular coordinate is clamped so the stroke's half width does not
//! spill past an edge, and the line's ends are clamped to the surface on its
//! own axis. The engine calls this with infinite bounds, where only the
//! near-edge clamps have any effect.

use crate::types::LineSegment;

fn crisp_offset(width: u32) -> f64 {
    if width % 2 == 1 {
        0.5
    } else {
        0.0
    }
}

/// Keep a stroke centred at `at` with half width `half` inside `[0, max]`.
fn clamp_stroke(at: f64, half: f64, max: f64) -> f64 {
    if at > max - half {
        (max - half).max(half)
    } else if at < half {
        half
    } else {
        at
    }
}

fn clamp_end(at: f64, max: f64) -> f64 {
    at.max(0.0).min(max)
}

/// Adjust `lines` drawn with stroke `width` to a `max_width` x `max_height` surface.
pub fn adjust_lines_to_view_box(
    width: u32,
    lines: &[LineSegment],
    max_width: f64,
    max_height: f64,
) -> Vec<LineSegment> {
    let offset = crisp_offset(width);
    let half = f64::from(width) / 2.0;

    lines
        .iter()
        .map(|line| {
            if line.is_horizontal() {
                let y = clamp_stroke(line.y1 + offset, half, max_height);
                LineSegment::new(
                    clamp_end(line.x1, max_width),
                    y,
                    clamp_end(line.x2, max_width),
                    y,
                )
            } else if line.is_vertical() {
                let x = clamp_stroke(line.x1 + offset, half, max_width);
                LineSegment::new(
                    x,
                    clamp_end(line.y1, max_height),
                    x,
                    clamp_end(line.y2, max_height),
                )
            } else {
                *line
            }
        })
        .collect()
}
