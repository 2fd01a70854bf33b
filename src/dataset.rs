use crate::ir::TimelineDataset;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid timeline JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the JSON document served for one thesis into a [`TimelineDataset`].
///
/// Shape errors (missing `thesis`, non-numeric timestamps) surface as
/// [`DatasetError::Json`]. Unrecognized event `type` tags are not errors;
/// they deserialize to [`crate::ir::EventKind::Unknown`] and render with the
/// fallback color.
pub fn parse_dataset(input: &str) -> Result<TimelineDataset, DatasetError> {
    Ok(serde_json::from_str(input)?)
}
