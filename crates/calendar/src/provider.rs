//! The event provider seam and the start-of-month marker provider.

use chrono::NaiveDate;

use crate::annotation::{Annotation, Category};
use crate::cycle::CycleSchedule;

/// Facts about a generation run that providers may need before lookups start.
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    /// Name of the designated first month, if the table has one.
    pub first_month: Option<&'a str>,
    /// Counting-cycle schedule of the run; empty without a first month.
    pub schedule: &'a CycleSchedule,
}

/// Priority weight of start-of-month markers.
pub const NEW_MOON_PRIORITY: u8 = 3;

/// A source of candidate annotations for single dates.
///
/// Providers are queried once per generated date with the bore month name,
/// the 1-based day within that month and the Gregorian date. Lookups must be
/// free of side effects; an empty vector is the normal "nothing here" answer.
pub trait EventProvider {
    /// Returns the candidate annotations for one date.
    fn events_for(&self, month: &str, day: u32, date: NaiveDate) -> Vec<Annotation>;

    /// Called once before each generation run, ahead of any lookup.
    ///
    /// The default implementation ignores the context.
    fn prepare(&mut self, _run: &RunContext<'_>) {}
}

/// Marks the first day of every month except the designated first month.
///
/// The first month is taken from the run context when used by the
/// generator.
#[derive(Debug, Clone, Default)]
pub struct NewMoonProvider {
    first_month: Option<String>,
}

impl NewMoonProvider {
    /// Display name of the marker.
    pub const NAME: &'static str = "New month";

    /// Creates the provider. `first_month` is the month that never gets a
    /// marker; `None` marks every month.
    pub fn new(first_month: Option<String>) -> Self {
        Self { first_month }
    }
}

impl EventProvider for NewMoonProvider {
    fn events_for(&self, month: &str, day: u32, _date: NaiveDate) -> Vec<Annotation> {
        if day != 1 || self.first_month.as_deref() == Some(month) {
            return Vec::new();
        }
        vec![Annotation::new(
            Self::NAME,
            format!("Beginning of month {month}"),
            Category::NewMoon,
            NEW_MOON_PRIORITY,
        )]
    }

    fn prepare(&mut self, run: &RunContext<'_>) {
        self.first_month = run.first_month.map(str::to_string);
    }
}
