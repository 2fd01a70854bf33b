use crate::ir::EventKind;

/// Tooltip payload carried on an event bar. Presentation (hover markup,
/// `<title>` elements) belongs to the rendering adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub kind: EventKind,
    pub title: String,
    pub date: String,
    pub author: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub description: String,
}

/// One renderer-agnostic drawing instruction. Coordinates are CSS pixels in
/// the chart surface's own space, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    AxisLine {
        x: f32,
        y: f32,
        width: f32,
    },
    AxisTick {
        x: f32,
        y: f32,
        label: String,
    },
    CategoryHeader {
        text: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    EventBar {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
        border_color: String,
        detail: EventDetail,
    },
    EventLabel {
        text: String,
        x: f32,
        y: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTitle {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Output of one layout pass: an ordered primitive list plus the canvas size
/// the renderer must provide. The height grows with content and never clips.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: Option<ChartTitle>,
    pub primitives: Vec<DrawPrimitive>,
    pub width: f32,
    pub height: f32,
}
