use crate::layout::{DrawPrimitive, EventDetail, Layout};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const BAR_RADIUS: f32 = 3.0;
const BAR_OPACITY: f32 = 0.8;
const TICK_HALF_HEIGHT: f32 = 5.0;

/// Renders a computed layout to a standalone SVG document. Every `EventBar`
/// carries a `<title>` child so hovering shows the event's detail without any
/// script support.
pub fn render_svg(layout: &Layout, theme: &Theme) -> String {
    let width = layout.width.max(200.0);
    let height = layout.height.max(100.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" rx=\"6\" ry=\"6\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        theme.background, theme.panel_border
    ));

    if let Some(title) = &layout.title {
        let baseline = title.y + theme.title_font_size;
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{baseline:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            title.x,
            theme.font_family,
            theme.title_font_size,
            theme.text_color,
            escape_xml(&title.text)
        ));
    }

    for primitive in &layout.primitives {
        match primitive {
            DrawPrimitive::AxisLine { x, y, width } => {
                svg.push_str(&format!(
                    "<line x1=\"{x:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
                    x + width,
                    theme.axis_color
                ));
            }
            DrawPrimitive::AxisTick { x, y, label } => {
                svg.push_str(&format!(
                    "<line x1=\"{x:.2}\" y1=\"{:.2}\" x2=\"{x:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"2\"/>",
                    y - TICK_HALF_HEIGHT,
                    y + TICK_HALF_HEIGHT,
                    theme.axis_color
                ));
                svg.push_str(&format!(
                    "<text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                    y + 10.0 + theme.tick_font_size,
                    theme.font_family,
                    theme.tick_font_size,
                    theme.muted_text_color,
                    escape_xml(label)
                ));
            }
            DrawPrimitive::CategoryHeader {
                text,
                x,
                y,
                width,
                height,
            } => {
                svg.push_str(&format!(
                    "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"3\" ry=\"3\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
                    theme.category_fill, theme.category_border
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
                    x + 10.0,
                    y + height / 2.0 + theme.header_font_size / 2.0 - 1.0,
                    theme.font_family,
                    theme.header_font_size,
                    theme.text_color,
                    escape_xml(text)
                ));
            }
            DrawPrimitive::EventBar {
                x,
                y,
                width,
                height,
                color,
                border_color,
                detail,
            } => {
                svg.push_str(&format!(
                    "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" rx=\"{BAR_RADIUS}\" ry=\"{BAR_RADIUS}\" fill=\"{color}\" fill-opacity=\"{BAR_OPACITY}\" stroke=\"{border_color}\" stroke-width=\"1\">",
                ));
                svg.push_str(&format!(
                    "<title>{}</title>",
                    escape_xml(&tooltip_text(detail))
                ));
                svg.push_str("</rect>");
            }
            DrawPrimitive::EventLabel { text, x, y } => {
                svg.push_str(&format!(
                    "<text x=\"{x:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                    y + theme.font_size,
                    theme.font_family,
                    theme.font_size,
                    theme.text_color,
                    escape_xml(text)
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Centered single-message surface, used for the empty-dataset state and for
/// load failures. Same panel styling as the chart itself.
pub fn render_message_svg(message: &str, theme: &Theme, width: f32, height: f32) -> String {
    let width = width.max(200.0);
    let height = height.max(100.0);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" rx=\"6\" ry=\"6\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        theme.background, theme.panel_border
    ));
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        width / 2.0,
        height / 2.0,
        theme.font_family,
        theme.header_font_size,
        theme.muted_text_color,
        escape_xml(message)
    ));
    svg.push_str("</svg>");
    svg
}

fn tooltip_text(detail: &EventDetail) -> String {
    let mut lines = vec![detail.title.clone(), format!("Date: {}", detail.date)];
    if let Some(author) = &detail.author {
        lines.push(format!("Author: {author}"));
    }
    if let Some(priority) = &detail.priority {
        lines.push(format!("Priority: {priority}"));
    }
    if let Some(status) = &detail.status {
        lines.push(format!("Status: {status}"));
    }
    if let Some(assigned_to) = &detail.assigned_to {
        lines.push(format!("Assigned to: {assigned_to}"));
    }
    if !detail.description.is_empty() {
        lines.push(detail.description.clone());
    }
    lines.join("\n")
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{svg}");
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, width: f32, height: f32) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size =
        usvg::Size::from_wh(width, height).unwrap_or(usvg::Size::from_wh(800.0, 400.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportConfig;
    use crate::ir::{EventKind, ThesisInfo, TimelineDataset, TimelineEvent};
    use crate::layout::compute_layout;

    fn sample_dataset() -> TimelineDataset {
        TimelineDataset {
            thesis: ThesisInfo {
                id: 1,
                title: "Coral & Reef".to_string(),
            },
            categories: vec!["Updates".to_string()],
            events: vec![TimelineEvent {
                id: Some(10),
                start: 0,
                end: 86_400_000 * 14,
                kind: EventKind::StudentUpdate,
                category: Some("Updates".to_string()),
                title: "Week <1>".to_string(),
                description: "Literature survey".to_string(),
                author: Some("Mina".to_string()),
                priority: None,
                status: None,
                assigned_to: None,
            }],
        }
    }

    #[test]
    fn render_svg_basic() {
        let theme = Theme::supervise_default();
        let layout = compute_layout(
            &sample_dataset(),
            &theme,
            &ViewportConfig::default(),
            1200.0,
        )
        .expect("layout");
        let svg = render_svg(&layout, &theme);
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        // thesis title escaped into the header
        assert!(svg.contains("Timeline: Coral &amp; Reef"));
        // tooltip carried on the bar
        assert!(svg.contains("<title>"));
        assert!(svg.contains("Author: Mina"));
        assert!(svg.contains("Week &lt;1&gt;"));
    }

    #[test]
    fn message_svg_is_selfcontained() {
        let svg = render_message_svg(
            "No timeline data available",
            &Theme::supervise_default(),
            800.0,
            400.0,
        );
        assert!(svg.contains("No timeline data available"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn escapes_xml_metacharacters() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
