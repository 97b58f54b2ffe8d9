//! Month definitions and the ordered month table of one calendar year.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Ordinal of the designated first month of the year.
pub const FIRST_MONTH_NUMBER: u8 = 1;

/// One month of the bore calendar.
///
/// `start` is the Gregorian date on which the new moon was sighted. The
/// month itself begins on the following day, since the calendar day starts
/// at sunset; the generator applies that shift, not this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDefinition {
    name: String,
    start: NaiveDate,
    duration_days: u32,
    number: u8,
    yehudim_name: String,
}

impl MonthDefinition {
    /// Creates a month definition.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthDefinition`] if the name is blank,
    /// the duration is zero or the ordinal is zero.
    pub fn new(
        name: impl Into<String>,
        start: NaiveDate,
        duration_days: u32,
        number: u8,
        yehudim_name: impl Into<String>,
    ) -> Result<Self, CalendarError> {
        let name = name.into();
        let invalid = |reason: &str| CalendarError::InvalidMonthDefinition {
            name: name.clone(),
            reason: reason.to_string(),
        };
        if name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if duration_days == 0 {
            return Err(invalid("duration_days must be greater than 0"));
        }
        if number == 0 {
            return Err(invalid("month number is 1-based"));
        }
        Ok(Self {
            name,
            start,
            duration_days,
            number,
            yehudim_name: yehudim_name.into(),
        })
    }

    /// Returns the bore month name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the Gregorian date of the new-moon sighting.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the number of days in the month.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Returns the 1-based position of the month in the year.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Returns the month name used by the yehudim calendar.
    pub fn yehudim_name(&self) -> &str {
        &self.yehudim_name
    }

    /// Returns `true` if this is the designated first month of the year.
    pub fn is_first(&self) -> bool {
        self.number == FIRST_MONTH_NUMBER
    }
}

/// Builds a Gregorian date, reporting impossible triples as an error.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] for dates such as February 30.
pub fn gregorian_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Ordered list of the months of one calendar year.
///
/// Names and ordinals are unique within a table, so at most one month is
/// the designated first month. Day ranges of consecutive months are
/// not checked here; the generator rejects overlaps while expanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthTable {
    months: Vec<MonthDefinition>,
}

impl MonthTable {
    /// Creates a table, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DuplicateMonth`] if two definitions share a
    /// name, or [`CalendarError::DuplicateMonthNumber`] if they share an
    /// ordinal.
    pub fn new(months: Vec<MonthDefinition>) -> Result<Self, CalendarError> {
        if let Some(dup) = first_duplicate(&months) {
            return Err(CalendarError::DuplicateMonth {
                name: dup.to_string(),
            });
        }
        if let Some((number, name, previous)) = first_duplicate_number(&months) {
            return Err(CalendarError::DuplicateMonthNumber {
                number,
                name: name.to_string(),
                previous: previous.to_string(),
            });
        }
        Ok(Self { months })
    }

    /// Returns the designated first month, if the table has one.
    pub fn first_month(&self) -> Option<&MonthDefinition> {
        self.months.iter().find(|m| m.is_first())
    }

    /// Looks a month up by name.
    pub fn get(&self, name: &str) -> Option<&MonthDefinition> {
        self.months.iter().find(|m| m.name() == name)
    }

    /// Iterates over the months in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthDefinition> {
        self.months.iter()
    }

    /// Returns the number of months.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` if the table has no months.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Returns the sum of all month durations.
    pub fn total_days(&self) -> usize {
        self.months.iter().map(|m| m.duration_days() as usize).sum()
    }
}

fn first_duplicate(months: &[MonthDefinition]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(months.len());
    months.iter().map(|m| m.name()).find(|name| !seen.insert(*name))
}

fn first_duplicate_number(months: &[MonthDefinition]) -> Option<(u8, &str, &str)> {
    let mut seen: HashMap<u8, &str> = HashMap::with_capacity(months.len());
    months.iter().find_map(|m| {
        seen.insert(m.number(), m.name()).map(|previous| (m.number(), m.name(), previous))
    })
}

impl<'a> IntoIterator for &'a MonthTable {
    type Item = &'a MonthDefinition;
    type IntoIter = std::slice::Iter<'a, MonthDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
