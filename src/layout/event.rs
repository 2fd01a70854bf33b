use super::axis::format_numeric_date;
use super::types::{DrawPrimitive, EventDetail};
use super::{LABEL_INSET, ONE_DAY_MS};
use crate::config::ViewportConfig;
use crate::ir::TimelineEvent;
use crate::text_metrics;
use crate::theme::{Theme, darken_color};

const BORDER_DARKEN: f32 = 0.2;
const LABEL_PAD_RIGHT: f32 = 5.0;

/// Positions a single event: a bar on the time axis plus its gutter label.
///
/// Two independent minimums keep degenerate events visible: the duration is
/// floored at one day before scaling, and the resulting pixel width is
/// floored at `min_bar_width`.
pub(super) fn layout_event(
    event: &TimelineEvent,
    start_time: i64,
    time_range: i64,
    viewport: &ViewportConfig,
    available_width: f32,
    y: f32,
    theme: &Theme,
) -> (DrawPrimitive, DrawPrimitive) {
    let duration = (event.end - event.start).max(ONE_DAY_MS);
    let x = viewport.margin_left
        + (event.start - start_time) as f32 / time_range as f32 * available_width;
    let width =
        (duration as f32 / time_range as f32 * available_width).max(viewport.min_bar_width);

    let color = theme.event_color(event.kind).to_string();
    let border_color = darken_color(&color, BORDER_DARKEN);

    let bar = DrawPrimitive::EventBar {
        x,
        y,
        width,
        height: viewport.bar_height,
        color,
        border_color,
        detail: EventDetail {
            kind: event.kind,
            title: event.title.clone(),
            date: format_numeric_date(event.start),
            author: event.author.clone(),
            priority: event.priority.clone(),
            status: event.status.clone(),
            assigned_to: event.assigned_to.clone(),
            description: event.description.clone(),
        },
    };

    let max_label_width = viewport.margin_left - 2.0 * LABEL_INSET - LABEL_PAD_RIGHT;
    let label = DrawPrimitive::EventLabel {
        text: truncate_label(&event.title, max_label_width, theme),
        x: LABEL_INSET,
        y: y + 2.0,
    };

    (bar, label)
}

/// Shortens `text` with a trailing ellipsis to fit the label gutter. When no
/// font is resolvable the text passes through untouched; clipping is then the
/// renderer's problem.
fn truncate_label(text: &str, max_width: f32, theme: &Theme) -> String {
    let Some(full_width) = text_metrics::measure_text_width(text, theme.font_size, &theme.font_family)
    else {
        return text.to_string();
    };
    if full_width <= max_width {
        return text.to_string();
    }

    let mut kept = String::new();
    for ch in text.chars() {
        let candidate = format!("{kept}{ch}\u{2026}");
        match text_metrics::measure_text_width(&candidate, theme.font_size, &theme.font_family) {
            Some(width) if width > max_width => break,
            _ => kept.push(ch),
        }
    }
    kept.push('\u{2026}');
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::EventKind;

    fn event(start: i64, end: i64, kind: EventKind) -> TimelineEvent {
        TimelineEvent {
            id: None,
            start,
            end,
            kind,
            category: None,
            title: "Checkpoint".to_string(),
            description: String::new(),
            author: None,
            priority: None,
            status: None,
            assigned_to: None,
        }
    }

    #[test]
    fn zero_duration_event_gets_one_day_floor() {
        let viewport = ViewportConfig::default();
        let theme = Theme::supervise_default();
        let range = 100 * ONE_DAY_MS;
        let (bar, _) = layout_event(
            &event(0, 0, EventKind::SupervisorFeedback),
            0,
            range,
            &viewport,
            1000.0,
            90.0,
            &theme,
        );
        match bar {
            DrawPrimitive::EventBar { width, .. } => {
                assert!(width >= viewport.min_bar_width);
                assert!(width >= ONE_DAY_MS as f32 / range as f32 * 1000.0);
            }
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn inverted_range_is_clamped_not_negative() {
        let viewport = ViewportConfig::default();
        let theme = Theme::supervise_default();
        let (bar, _) = layout_event(
            &event(5 * ONE_DAY_MS, ONE_DAY_MS, EventKind::StudentUpdate),
            0,
            10 * ONE_DAY_MS,
            &viewport,
            500.0,
            90.0,
            &theme,
        );
        match bar {
            DrawPrimitive::EventBar { width, .. } => assert!(width > 0.0),
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn pixel_floor_applies_on_huge_ranges() {
        let viewport = ViewportConfig::default();
        let theme = Theme::supervise_default();
        // ten years of range; a one-day event would be a fraction of a pixel
        let (bar, _) = layout_event(
            &event(0, ONE_DAY_MS, EventKind::TodoPending),
            0,
            3650 * ONE_DAY_MS,
            &viewport,
            1000.0,
            90.0,
            &theme,
        );
        match bar {
            DrawPrimitive::EventBar { width, .. } => assert_eq!(width, viewport.min_bar_width),
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_falls_back_to_neutral_color() {
        let viewport = ViewportConfig::default();
        let theme = Theme::supervise_default();
        let (bar, _) = layout_event(
            &event(0, ONE_DAY_MS, EventKind::Unknown),
            0,
            10 * ONE_DAY_MS,
            &viewport,
            500.0,
            90.0,
            &theme,
        );
        match bar {
            DrawPrimitive::EventBar {
                color,
                border_color,
                ..
            } => {
                assert_eq!(color, theme.fallback_color);
                assert_ne!(border_color, color);
            }
            other => panic!("expected a bar, got {other:?}"),
        }
    }
}
