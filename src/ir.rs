use serde::{Deserialize, Serialize};

/// Display class of a timeline event. Wire tags are the snake_case names
/// produced by the supervision backend; anything else lands on `Unknown`
/// and renders with the theme's fallback color instead of failing the parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ThesisMilestone,
    StudentUpdate,
    SupervisorFeedback,
    TodoPending,
    TodoCompleted,
    TodoCancelled,
    StatusChange,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One plotted item. `start`/`end` are epoch milliseconds; `end >= start` is
/// not required — the layout engine clamps degenerate ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(default)]
    pub id: Option<i64>,
    pub start: i64,
    pub end: i64,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    #[serde(default)]
    pub category: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThesisInfo {
    pub id: i64,
    pub title: String,
}

/// Render input: one thesis, its declared category order, and the events to
/// plot. `categories` defines the vertical ordering of lanes; categories
/// present in the data but not declared here are appended after the declared
/// ones, in first-encountered order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineDataset {
    pub thesis: ThesisInfo,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}
