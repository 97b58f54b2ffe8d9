//! # bore-io
//!
//! The mapping sink for generated calendars: writes the date-keyed
//! [`Calendar`](bore_calendar::Calendar) as a JSON document named after the
//! bore year, and reads such documents back for lookups.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::read_calendar;
pub use writer::{JsonSink, MappingSink, WriterConfig, default_file_name, to_json};
