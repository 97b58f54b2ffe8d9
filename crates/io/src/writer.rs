//! Writing generated calendars as JSON documents.

use std::path::{Path, PathBuf};

use bore_calendar::{Calendar, YearLabels};
use tracing::info;

use crate::error::IoError;

/// Layout options for calendar JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Indent the document with two spaces, one key per line.
    pretty: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl WriterConfig {
    /// Sets whether the output is indented.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns `true` if the output is indented.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Destination for a generated calendar.
pub trait MappingSink {
    /// Persists `calendar` and returns where it was written.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`] if encoding or writing fails.
    fn write(&self, calendar: &Calendar, years: YearLabels) -> Result<PathBuf, IoError>;
}

#[derive(Debug, Clone)]
enum Target {
    Dir(PathBuf),
    File(PathBuf),
}

/// Writes calendars as UTF-8 JSON objects keyed by ISO date.
///
/// Non-ASCII labels are written as-is, not escaped.
#[derive(Debug, Clone)]
pub struct JsonSink {
    target: Target,
    config: WriterConfig,
}

impl JsonSink {
    /// Writes into `dir` as `{bore_year}.json`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::Dir(dir.into()),
            config: WriterConfig::default(),
        }
    }

    /// Writes to exactly `path`.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Target::File(path.into()),
            config: WriterConfig::default(),
        }
    }

    /// Sets the layout options.
    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the path a calendar for `years` would be written to.
    pub fn path_for(&self, years: YearLabels) -> PathBuf {
        match &self.target {
            Target::Dir(dir) => dir.join(default_file_name(years)),
            Target::File(path) => path.clone(),
        }
    }
}

impl MappingSink for JsonSink {
    fn write(&self, calendar: &Calendar, years: YearLabels) -> Result<PathBuf, IoError> {
        let path = self.path_for(years);
        let json = to_json(calendar, &self.config)?;
        write_file(&path, &json)?;
        info!(path = %path.display(), entries = calendar.len(), "calendar written");
        Ok(path)
    }
}

/// Returns the conventional file name for a year's calendar, `{bore}.json`.
pub fn default_file_name(years: YearLabels) -> String {
    format!("{}.json", years.bore())
}

/// Encodes a calendar as JSON text.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization fails.
pub fn to_json(calendar: &Calendar, config: &WriterConfig) -> Result<String, IoError> {
    let json = if config.pretty {
        serde_json::to_string_pretty(calendar)?
    } else {
        serde_json::to_string(calendar)?
    };
    Ok(json)
}

fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    std::fs::write(path, contents).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
