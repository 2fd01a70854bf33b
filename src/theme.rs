use crate::ir::EventKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    /// Base size for event labels; ticks, category headers and the chart
    /// title derive from the sizes below.
    pub font_size: f32,
    pub tick_font_size: f32,
    pub header_font_size: f32,
    pub title_font_size: f32,
    pub background: String,
    pub panel_border: String,
    pub axis_color: String,
    pub text_color: String,
    pub muted_text_color: String,
    pub category_fill: String,
    pub category_border: String,
    pub milestone_color: String,
    pub student_update_color: String,
    pub supervisor_feedback_color: String,
    pub todo_pending_color: String,
    pub todo_completed_color: String,
    pub todo_cancelled_color: String,
    pub status_change_color: String,
    pub fallback_color: String,
}

impl Theme {
    /// The supervision app's stock palette (Bootstrap-derived).
    pub fn supervise_default() -> Self {
        Self {
            font_family: "Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 11.0,
            tick_font_size: 10.0,
            header_font_size: 12.0,
            title_font_size: 16.0,
            background: "#f8f9fa".to_string(),
            panel_border: "#dee2e6".to_string(),
            axis_color: "#6c757d".to_string(),
            text_color: "#495057".to_string(),
            muted_text_color: "#6c757d".to_string(),
            category_fill: "#e9ecef".to_string(),
            category_border: "#ced4da".to_string(),
            milestone_color: "#6f42c1".to_string(),
            student_update_color: "#28a745".to_string(),
            supervisor_feedback_color: "#007bff".to_string(),
            todo_pending_color: "#ffc107".to_string(),
            todo_completed_color: "#20c997".to_string(),
            todo_cancelled_color: "#dc3545".to_string(),
            status_change_color: "#17a2b8".to_string(),
            fallback_color: "#6c757d".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            tick_font_size: 10.0,
            header_font_size: 12.0,
            title_font_size: 15.0,
            background: "#ffffff".to_string(),
            panel_border: "#d7e0f0".to_string(),
            axis_color: "#7a8aa6".to_string(),
            text_color: "#1c2430".to_string(),
            muted_text_color: "#7a8aa6".to_string(),
            category_fill: "#eef2f8".to_string(),
            category_border: "#c7d2e5".to_string(),
            milestone_color: "#6366f1".to_string(),
            student_update_color: "#10b981".to_string(),
            supervisor_feedback_color: "#0ea5e9".to_string(),
            todo_pending_color: "#f59e0b".to_string(),
            todo_completed_color: "#14b8a6".to_string(),
            todo_cancelled_color: "#ef4444".to_string(),
            status_change_color: "#06b6d4".to_string(),
            fallback_color: "#94a3b8".to_string(),
        }
    }

    pub fn event_color(&self, kind: EventKind) -> &str {
        match kind {
            EventKind::ThesisMilestone => &self.milestone_color,
            EventKind::StudentUpdate => &self.student_update_color,
            EventKind::SupervisorFeedback => &self.supervisor_feedback_color,
            EventKind::TodoPending => &self.todo_pending_color,
            EventKind::TodoCompleted => &self.todo_completed_color,
            EventKind::TodoCancelled => &self.todo_cancelled_color,
            EventKind::StatusChange => &self.status_change_color,
            EventKind::Unknown => &self.fallback_color,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::supervise_default()
    }
}

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern"));
static RGB_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})").expect("rgb color pattern")
});

/// Accepts `#rgb`, `#rrggbb` and `rgb()`/`rgba()` color strings.
pub fn parse_color_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim();
    if let Some(caps) = HEX_COLOR.captures(color) {
        let digits = &caps[1];
        return if digits.len() == 3 {
            let channel = |i: usize| {
                u8::from_str_radix(&digits[i..i + 1], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some((channel(0)?, channel(1)?, channel(2)?))
        } else {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        };
    }
    if let Some(caps) = RGB_COLOR.captures(color) {
        let channel = |i: usize| caps[i].parse::<u16>().ok().filter(|v| *v <= 255);
        return Some((channel(1)? as u8, channel(2)? as u8, channel(3)? as u8));
    }
    None
}

/// Scales each RGB channel towards black by `amount` (0.0..=1.0). Strings the
/// parser does not recognize come back unchanged, so a malformed theme value
/// degrades to an invisible border rather than a render failure.
pub fn darken_color(color: &str, amount: f32) -> String {
    let Some((r, g, b)) = parse_color_to_rgb(color) else {
        return color.to_string();
    };
    let factor = (1.0 - amount).clamp(0.0, 1.0);
    let scale = |channel: u8| (channel as f32 * factor).round() as u8;
    format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(parse_color_to_rgb("#28a745"), Some((0x28, 0xa7, 0x45)));
        assert_eq!(parse_color_to_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_color_to_rgb("rgb(40, 167, 69)"), Some((40, 167, 69)));
        assert_eq!(parse_color_to_rgb("rgba(1,2,3,0.5)"), Some((1, 2, 3)));
        assert_eq!(parse_color_to_rgb("cornflowerblue"), None);
        assert_eq!(parse_color_to_rgb("rgb(300,0,0)"), None);
    }

    #[test]
    fn darkens_towards_black() {
        assert_eq!(darken_color("#ffffff", 0.2), "#cccccc");
        assert_eq!(darken_color("#000000", 0.2), "#000000");
        // unparseable input is passed through untouched
        assert_eq!(darken_color("papayawhip", 0.2), "papayawhip");
    }

    #[test]
    fn every_kind_resolves_to_a_color() {
        let theme = Theme::supervise_default();
        for kind in [
            EventKind::ThesisMilestone,
            EventKind::StudentUpdate,
            EventKind::SupervisorFeedback,
            EventKind::TodoPending,
            EventKind::TodoCompleted,
            EventKind::TodoCancelled,
            EventKind::StatusChange,
            EventKind::Unknown,
        ] {
            assert!(parse_color_to_rgb(theme.event_color(kind)).is_some());
        }
    }
}
