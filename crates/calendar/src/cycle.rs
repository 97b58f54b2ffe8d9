//! The 50-day counting cycle (Omer) and its provider.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::annotation::{Annotation, Category};
use crate::error::CalendarError;
use crate::provider::{EventProvider, RunContext};

/// Number of days in the counting cycle.
pub const CYCLE_LENGTH: u32 = 50;

/// Days from the first day of the first month to the cycle's day 1.
pub const CYCLE_ANCHOR_OFFSET: u64 = 20;

/// Priority weight of cycle-day annotations.
pub const CYCLE_PRIORITY: u8 = 5;

/// Priority weight of festivals, including the culminating one.
pub const FESTIVAL_PRIORITY: u8 = 10;

/// Mapping from each date of the counting cycle to its 1-based day number.
///
/// Either empty (no anchor was found) or exactly [`CYCLE_LENGTH`]
/// consecutive dates numbered `1..=50`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSchedule {
    days: BTreeMap<NaiveDate, u32>,
}

impl CycleSchedule {
    /// Builds the schedule with `anchor` as day 1.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if the cycle would run past
    /// the last representable date.
    pub fn compute(anchor: NaiveDate) -> Result<Self, CalendarError> {
        let mut days = BTreeMap::new();
        for day in 1..=CYCLE_LENGTH {
            let date = anchor
                .checked_add_days(Days::new(u64::from(day - 1)))
                .ok_or_else(|| CalendarError::DateOutOfRange {
                    reason: format!("cycle day {day} after {anchor}"),
                })?;
            days.insert(date, day);
        }
        Ok(Self { days })
    }

    /// Returns the empty schedule used when no anchor month exists.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the cycle day of `date`, if it falls inside the cycle.
    pub fn day_of(&self, date: NaiveDate) -> Option<u32> {
        self.days.get(&date).copied()
    }

    /// Returns the date of day 1.
    pub fn first(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// Returns the date of the last day.
    pub fn last(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    /// Iterates over `(date, day)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.days.iter().map(|(d, n)| (*d, *n))
    }

    /// Returns the number of dates in the schedule.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Labels used for cycle annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleLabels {
    /// Event name of an ordinary cycle day.
    pub day_name: String,
    /// Event name of the festival on the last cycle day.
    pub culminating_name: String,
    /// Note of the festival on the last cycle day.
    pub culminating_note: String,
}

impl Default for CycleLabels {
    fn default() -> Self {
        Self {
            day_name: "Omer".to_string(),
            culminating_name: "Shavuot".to_string(),
            culminating_note: "Shavuot".to_string(),
        }
    }
}

/// Annotates every day of the counting cycle, and the culminating festival
/// on its last day.
///
/// Starts with an empty schedule; [`prepare`](EventProvider::prepare) binds
/// the schedule of each run.
#[derive(Debug, Clone, Default)]
pub struct CycleProvider {
    labels: CycleLabels,
    schedule: CycleSchedule,
}

impl CycleProvider {
    /// Creates a provider with an empty schedule.
    pub fn new(labels: CycleLabels) -> Self {
        Self {
            labels,
            schedule: CycleSchedule::empty(),
        }
    }

    /// Returns the schedule currently bound.
    pub fn schedule(&self) -> &CycleSchedule {
        &self.schedule
    }
}

impl EventProvider for CycleProvider {
    fn events_for(&self, _month: &str, _day: u32, date: NaiveDate) -> Vec<Annotation> {
        let Some(n) = self.schedule.day_of(date) else {
            return Vec::new();
        };
        let mut events = vec![Annotation::new(
            self.labels.day_name.as_str(),
            format!("{} day {n}", self.labels.day_name),
            Category::Cycle,
            CYCLE_PRIORITY,
        )];
        if n == CYCLE_LENGTH {
            events.push(Annotation::new(
                self.labels.culminating_name.as_str(),
                self.labels.culminating_note.as_str(),
                Category::Festival,
                FESTIVAL_PRIORITY,
            ));
        }
        events
    }

    fn prepare(&mut self, run: &RunContext<'_>) {
        self.schedule = run.schedule.clone();
    }
}
