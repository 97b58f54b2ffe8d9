//! Reading calendar JSON documents back.

use std::path::Path;

use bore_calendar::Calendar;
use tracing::debug;

use crate::error::IoError;

/// Loads a calendar previously written by [`JsonSink`](crate::JsonSink).
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it cannot be read, or [`IoError::Json`] if it is not
/// a calendar document.
pub fn read_calendar(path: &Path) -> Result<Calendar, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let calendar: Calendar = serde_json::from_str(&text)?;
    debug!(path = %path.display(), entries = calendar.len(), "calendar loaded");
    Ok(calendar)
}
