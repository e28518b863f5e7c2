use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback stroke width when neither the edge nor the style sets one.
pub const DEFAULT_STROKE_WIDTH: u32 = 1;

/// Fallback stroke color when neither the edge nor the style sets one.
pub const DEFAULT_STROKE_COLOR: &str = "black";

/// What a border is for. Resolved once when the style is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrokeKind {
    /// Custom or area borders drawn on the cell boundary.
    #[default]
    Plain,
    /// The current-cell highlight, nested one pixel inside the cell.
    CurrentHighlight,
}

/// Paint layer of a border. Highlights always paint above base borders.
///
/// Serialized as the number `0` or `1`; any other value is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Plain and custom cell borders.
    #[default]
    Base,
    /// Interactive highlights: current cell, selection area.
    Highlight,
}

impl Priority {
    /// Index of the path group this layer paints into.
    pub const fn index(self) -> usize {
        match self {
            Priority::Base => 0,
            Priority::Highlight => 1,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Base),
            1 => Ok(Priority::Highlight),
            other => Err(format!("priority must be 0 or 1, got {other}")),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Base => 0,
            Priority::Highlight => 1,
        }
    }
}

/// One side of a rectangular region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in paint order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Per-edge override of a [`StrokeStyle`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOverride {
    #[serde(default)]
    pub hide: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EdgeOverride {
    /// An override that suppresses the edge.
    pub fn hidden() -> Self {
        Self {
            hide: true,
            ..Self::default()
        }
    }

    /// An override that restyles the edge.
    pub fn stroke(width: u32, color: impl Into<String>) -> Self {
        Self {
            hide: false,
            width: Some(width),
            color: Some(color.into()),
        }
    }
}

/// Stroke description shared by every edge of a border request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    #[serde(default)]
    pub kind: StrokeKind,
    /// Paint layer. Ignored for the current-cell highlight, see [`Self::layer`].
    #[serde(default)]
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<EdgeOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<EdgeOverride>,
}

impl StrokeStyle {
    /// A base-layer border, e.g. a custom cell border.
    pub fn plain(width: u32, color: impl Into<String>) -> Self {
        Self {
            width: Some(width),
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// A highlight-layer border such as a selection area outline.
    pub fn highlight(width: u32, color: impl Into<String>) -> Self {
        Self {
            priority: Priority::Highlight,
            ..Self::plain(width, color)
        }
    }

    /// The current-cell highlight.
    pub fn current(width: u32, color: impl Into<String>) -> Self {
        Self {
            kind: StrokeKind::CurrentHighlight,
            ..Self::highlight(width, color)
        }
    }

    /// The layer this style paints in. The current-cell highlight is always
    /// a highlight, whatever `priority` says.
    pub fn layer(&self) -> Priority {
        match self.kind {
            StrokeKind::CurrentHighlight => Priority::Highlight,
            StrokeKind::Plain => self.priority,
        }
    }

    /// Replace the override for one edge.
    #[must_use]
    pub fn with_edge(mut self, edge: Edge, value: EdgeOverride) -> Self {
        *self.edge_slot(edge) = Some(value);
        self
    }

    /// The override for `edge`, if any.
    pub fn edge(&self, edge: Edge) -> Option<&EdgeOverride> {
        match edge {
            Edge::Top => self.top.as_ref(),
            Edge::Right => self.right.as_ref(),
            Edge::Bottom => self.bottom.as_ref(),
            Edge::Left => self.left.as_ref(),
        }
    }

    fn edge_slot(&mut self, edge: Edge) -> &mut Option<EdgeOverride> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    /// Whether the style lets `edge` be drawn at all.
    pub fn shows_edge(&self, edge: Edge) -> bool {
        !self.edge(edge).is_some_and(|o| o.hide)
    }

    /// Resolve the stroke for `edge`: edge override, then style default, then `1px black`.
    pub fn stroke_for(&self, edge: Edge) -> StrokeKey {
        let over = self.edge(edge);
        let width = over
            .and_then(|o| o.width)
            .or(self.width)
            .unwrap_or(DEFAULT_STROKE_WIDTH);
        let color = over
            .and_then(|o| o.color.as_deref())
            .or(self.color.as_deref())
            .unwrap_or(DEFAULT_STROKE_COLOR);
        StrokeKey::new(width, color)
    }
}

/// Canonical identity of one visually distinct line appearance.
///
/// Displays as `"{width}px {color}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeKey {
    pub width: u32,
    pub color: String,
}

impl StrokeKey {
    pub fn new(width: u32, color: impl Into<String>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }
}

impl fmt::Display for StrokeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.width, self.color)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn stroke_falls_back_to_one_pixel_black() {
        let style = StrokeStyle::default();
        assert_eq!(style.stroke_for(Edge::Top).to_string(), "1px black");
    }

    #[test]
    fn edge_override_wins_over_style_default() {
        let style = StrokeStyle::plain(2, "red").with_edge(Edge::Left, EdgeOverride::stroke(3, "blue"));
        assert_eq!(style.stroke_for(Edge::Left).to_string(), "3px blue");
        assert_eq!(style.stroke_for(Edge::Right).to_string(), "2px red");
    }

    #[test]
    fn partial_override_falls_through_per_field() {
        let style = StrokeStyle::plain(2, "red").with_edge(
            Edge::Top,
            EdgeOverride {
                width: Some(4),
                ..EdgeOverride::default()
            },
        );
        assert_eq!(style.stroke_for(Edge::Top), StrokeKey::new(4, "red"));
    }

    #[test]
    fn hidden_edge_is_not_shown() {
        let style = StrokeStyle::plain(1, "red").with_edge(Edge::Bottom, EdgeOverride::hidden());
        assert!(!style.shows_edge(Edge::Bottom));
        assert!(style.shows_edge(Edge::Top));
    }

    #[test]
    fn style_deserializes_from_camel_case_json() {
        let style: StrokeStyle = serde_json::from_str(
            r##"{"kind":"currentHighlight","priority":1,"width":2,"color":"#4b89ff","left":{"hide":true}}"##,
        )
        .unwrap();
        assert_eq!(style.kind, StrokeKind::CurrentHighlight);
        assert_eq!(style.priority, Priority::Highlight);
        assert!(!style.shows_edge(Edge::Left));
        assert_eq!(style.stroke_for(Edge::Top).to_string(), "2px #4b89ff");
    }

    #[test]
    fn current_highlight_without_priority_still_paints_on_top() {
        let style: StrokeStyle =
            serde_json::from_str(r##"{"kind":"currentHighlight","width":2,"color":"#4b89ff"}"##)
                .unwrap();
        assert_eq!(style.priority, Priority::Base);
        assert_eq!(style.layer(), Priority::Highlight);
    }

    #[test]
    fn out_of_range_priority_is_rejected() {
        for json in [r#"{"priority":2}"#, r#"{"priority":18446744073709551615}"#, r#"{"priority":-1}"#] {
            assert!(serde_json::from_str::<StrokeStyle>(json).is_err(), "{json}");
        }
        let style: StrokeStyle = serde_json::from_str(r#"{"priority":1}"#).unwrap();
        assert_eq!(style.layer(), Priority::Highlight);
    }

    #[test]
    fn priority_serializes_as_a_number() {
        let json = serde_json::to_string(&StrokeStyle::highlight(1, "blue")).unwrap();
        assert!(json.contains(r#""priority":1"#), "{json}");
    }
}
