use crate::layout::{DrawPrimitive, Layout};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON snapshot of a layout pass, grouped by primitive kind. Used by the
/// CLI's `--dumpLayout` flag for debugging geometry without reading SVG.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub title: Option<String>,
    pub axis_ticks: Vec<TickDump>,
    pub category_headers: Vec<HeaderDump>,
    pub bars: Vec<BarDump>,
    pub labels: Vec<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct TickDump {
    pub x: f32,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct HeaderDump {
    pub text: String,
    pub y: f32,
}

#[derive(Debug, Serialize)]
pub struct BarDump {
    pub title: String,
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub border_color: String,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub text: String,
    pub y: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let mut axis_ticks = Vec::new();
        let mut category_headers = Vec::new();
        let mut bars = Vec::new();
        let mut labels = Vec::new();

        for primitive in &layout.primitives {
            match primitive {
                DrawPrimitive::AxisLine { .. } => {}
                DrawPrimitive::AxisTick { x, label, .. } => axis_ticks.push(TickDump {
                    x: *x,
                    label: label.clone(),
                }),
                DrawPrimitive::CategoryHeader { text, y, .. } => {
                    category_headers.push(HeaderDump {
                        text: text.clone(),
                        y: *y,
                    })
                }
                DrawPrimitive::EventBar {
                    x,
                    y,
                    width,
                    height,
                    color,
                    border_color,
                    detail,
                } => bars.push(BarDump {
                    title: detail.title.clone(),
                    kind: format!("{:?}", detail.kind),
                    x: *x,
                    y: *y,
                    width: *width,
                    height: *height,
                    color: color.clone(),
                    border_color: border_color.clone(),
                }),
                DrawPrimitive::EventLabel { text, y, .. } => labels.push(LabelDump {
                    text: text.clone(),
                    y: *y,
                }),
            }
        }

        LayoutDump {
            width: layout.width,
            height: layout.height,
            title: layout.title.as_ref().map(|t| t.text.clone()),
            axis_ticks,
            category_headers,
            bars,
            labels,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
