mod axis;
mod event;
pub(crate) mod types;

pub use types::*;

use crate::config::ViewportConfig;
use crate::ir::{TimelineDataset, TimelineEvent};
use crate::theme::Theme;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

pub(crate) const ONE_DAY_MS: i64 = 86_400_000;
pub(crate) const LABEL_INSET: f32 = 10.0;

/// Events with no category land in this lane.
pub const DEFAULT_CATEGORY: &str = "Other";

// Right-hand breathing room between the last bar and the chart edge.
const RIGHT_GUTTER: f32 = 50.0;
// Vertical room under the axis line for its tick labels.
const AXIS_BAND_HEIGHT: f32 = 40.0;
const CATEGORY_HEADER_HEIGHT: f32 = 25.0;
const CATEGORY_HEADER_STEP: f32 = 30.0;
const CATEGORY_GAP: f32 = 10.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Nothing to plot. Non-fatal: the caller shows an empty-state message
    /// instead of a chart.
    #[error("timeline dataset contains no events")]
    EmptyDataset,
}

/// Overall time span of the dataset: earliest start to latest end. Must be
/// checked before any scaling math, since an empty list has no range.
pub fn compute_time_range(events: &[TimelineEvent]) -> Result<(i64, i64), LayoutError> {
    if events.is_empty() {
        return Err(LayoutError::EmptyDataset);
    }
    let start = events.iter().map(|e| e.start).min().unwrap_or(0);
    let end = events.iter().map(|e| e.end).max().unwrap_or(0);
    Ok((start, end))
}

/// Partitions events into category lanes, preserving encounter order within
/// each lane. Lanes declared in `category_order` come first, in declared
/// order; lanes present only in the data follow in first-encountered order.
/// Lanes with no events are dropped entirely.
pub fn group_by_category<'a>(
    events: &'a [TimelineEvent],
    category_order: &[String],
) -> Vec<(String, Vec<&'a TimelineEvent>)> {
    let mut groups: HashMap<&str, Vec<&TimelineEvent>> = HashMap::new();
    let mut encountered: Vec<&str> = Vec::new();
    for event in events {
        let category = event.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        match groups.entry(category) {
            Entry::Vacant(slot) => {
                encountered.push(category);
                slot.insert(vec![event]);
            }
            Entry::Occupied(mut slot) => slot.get_mut().push(event),
        }
    }

    let mut ordered = Vec::with_capacity(encountered.len());
    for name in category_order {
        if let Some(lane) = groups.remove(name.as_str()) {
            ordered.push((name.clone(), lane));
        }
    }
    for name in encountered {
        if let Some(lane) = groups.remove(name) {
            ordered.push((name.to_string(), lane));
        }
    }
    ordered
}

/// The full layout pass: `dataset + viewport -> geometry`. Pure and
/// synchronous; identical inputs yield identical primitives.
pub fn compute_layout(
    dataset: &TimelineDataset,
    theme: &Theme,
    viewport: &ViewportConfig,
    total_width: f32,
) -> Result<Layout, LayoutError> {
    let (start_time, end_time) = compute_time_range(&dataset.events)?;
    // A single instantaneous event collapses the range (and all-inverted
    // events can even turn it negative); normalize to one day instead of
    // dividing by zero.
    let raw_range = end_time - start_time;
    let time_range = if raw_range <= 0 { ONE_DAY_MS } else { raw_range };
    let available_width = (total_width - viewport.margin_left - RIGHT_GUTTER).max(0.0);

    let mut primitives = axis::build_axis(start_time, end_time, viewport, available_width);

    let mut y = viewport.margin_top + AXIS_BAND_HEIGHT;
    for (category, events) in group_by_category(&dataset.events, &dataset.categories) {
        primitives.push(DrawPrimitive::CategoryHeader {
            text: category,
            x: LABEL_INSET,
            y,
            width: viewport.margin_left - 2.0 * LABEL_INSET,
            height: CATEGORY_HEADER_HEIGHT,
        });
        y += CATEGORY_HEADER_STEP;

        for item in events {
            let (bar, label) = event::layout_event(
                item,
                start_time,
                time_range,
                viewport,
                available_width,
                y,
                theme,
            );
            primitives.push(bar);
            primitives.push(label);
            y += viewport.bar_height + viewport.bar_spacing;
        }
        y += CATEGORY_GAP;
    }

    let height = (y + viewport.margin_bottom).max(viewport.height);
    let title = Some(ChartTitle {
        text: format!("Timeline: {}", dataset.thesis.title),
        x: LABEL_INSET,
        y: LABEL_INSET,
    });

    Ok(Layout {
        title,
        primitives,
        width: total_width,
        height,
    })
}
