use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed drawing-surface parameters. The chart width is not part of this
/// struct: it is measured at render time (CLI `--width`, or the host
/// container) and handed to the layout engine per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub height: f32,
    pub bar_height: f32,
    pub bar_spacing: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub min_bar_width: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            height: 400.0,
            bar_height: 20.0,
            bar_spacing: 5.0,
            margin_left: 200.0,
            margin_top: 50.0,
            margin_bottom: 50.0,
            min_bar_width: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 400.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub viewport: ViewportConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    panel_border: Option<String>,
    axis_color: Option<String>,
    text_color: Option<String>,
    muted_text_color: Option<String>,
    category_fill: Option<String>,
    category_border: Option<String>,
    milestone_color: Option<String>,
    student_update_color: Option<String>,
    supervisor_feedback_color: Option<String>,
    todo_pending_color: Option<String>,
    todo_completed_color: Option<String>,
    todo_cancelled_color: Option<String>,
    status_change_color: Option<String>,
    fallback_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportOverrides {
    height: Option<f32>,
    bar_height: Option<f32>,
    bar_spacing: Option<f32>,
    margin_left: Option<f32>,
    margin_top: Option<f32>,
    margin_bottom: Option<f32>,
    min_bar_width: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    viewport: Option<ViewportOverrides>,
}

/// Loads configuration: built-in defaults, then an optional JSON5 file with a
/// `theme` preset name, camelCase `themeVariables` overrides, and `viewport`
/// overrides, merged field by field.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "default" || theme_name == "supervise" {
            config.theme = Theme::supervise_default();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.panel_border {
            config.theme.panel_border = v;
        }
        if let Some(v) = vars.axis_color {
            config.theme.axis_color = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.muted_text_color {
            config.theme.muted_text_color = v;
        }
        if let Some(v) = vars.category_fill {
            config.theme.category_fill = v;
        }
        if let Some(v) = vars.category_border {
            config.theme.category_border = v;
        }
        if let Some(v) = vars.milestone_color {
            config.theme.milestone_color = v;
        }
        if let Some(v) = vars.student_update_color {
            config.theme.student_update_color = v;
        }
        if let Some(v) = vars.supervisor_feedback_color {
            config.theme.supervisor_feedback_color = v;
        }
        if let Some(v) = vars.todo_pending_color {
            config.theme.todo_pending_color = v;
        }
        if let Some(v) = vars.todo_completed_color {
            config.theme.todo_completed_color = v;
        }
        if let Some(v) = vars.todo_cancelled_color {
            config.theme.todo_cancelled_color = v;
        }
        if let Some(v) = vars.fallback_color {
            config.theme.fallback_color = v;
        }
        if let Some(v) = vars.status_change_color {
            config.theme.status_change_color = v;
        }
    }

    if let Some(viewport) = parsed.viewport {
        if let Some(v) = viewport.height {
            config.viewport.height = v;
        }
        if let Some(v) = viewport.bar_height {
            config.viewport.bar_height = v;
        }
        if let Some(v) = viewport.bar_spacing {
            config.viewport.bar_spacing = v;
        }
        if let Some(v) = viewport.margin_left {
            config.viewport.margin_left = v;
        }
        if let Some(v) = viewport.margin_top {
            config.viewport.margin_top = v;
        }
        if let Some(v) = viewport.margin_bottom {
            config.viewport.margin_bottom = v;
        }
        if let Some(v) = viewport.min_bar_width {
            config.viewport.min_bar_width = v;
        }
    }

    Ok(config)
}
