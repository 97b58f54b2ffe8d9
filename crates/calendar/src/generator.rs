//! Expands a month table into a date-keyed calendar.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::annotation::Annotation;
use crate::cycle::{CYCLE_ANCHOR_OFFSET, CycleLabels, CycleProvider, CycleSchedule};
use crate::entry::{Calendar, CalendarEntry, DateLabel};
use crate::error::CalendarError;
use crate::festival::{FestivalProvider, FestivalRule};
use crate::month::{MonthDefinition, MonthTable};
use crate::provider::{EventProvider, NewMoonProvider, RunContext};
use crate::resolve::Resolver;
use crate::years::YearLabels;

/// Returns the first day of a month: the day after its new-moon sighting.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the sighting is the last
/// representable date.
pub fn month_start(month: &MonthDefinition) -> Result<NaiveDate, CalendarError> {
    add_days(month.start(), 1)
}

/// Returns day 1 of the counting cycle: the 21st day of `first_month`.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] on date overflow.
pub fn cycle_anchor(first_month: &MonthDefinition) -> Result<NaiveDate, CalendarError> {
    add_days(month_start(first_month)?, CYCLE_ANCHOR_OFFSET)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, CalendarError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| CalendarError::DateOutOfRange {
            reason: format!("{date} + {days} days"),
        })
}

/// Turns a month table into one [`CalendarEntry`] per date.
///
/// Providers are queried in registration order for every date; the
/// [`Resolver`] then merges their annotations by category. Runs are
/// independent: the counting cycle is recomputed from the table each time,
/// so generating twice from the same inputs gives equal calendars.
///
/// # Example
///
/// ```
/// use bore_calendar::{
///     CalendarGenerator, CycleLabels, MonthDefinition, MonthTable, YearLabels,
///     default_festivals, gregorian_date,
/// };
///
/// let years = YearLabels::new(2025, 6025, 5785).unwrap();
/// let aviv = MonthDefinition::new("Aviv", gregorian_date(2025, 3, 31).unwrap(), 29, 1, "Nisán")
///     .unwrap();
/// let table = MonthTable::new(vec![aviv]).unwrap();
///
/// let festivals = default_festivals();
/// let mut generator =
///     CalendarGenerator::with_default_providers(years, festivals, CycleLabels::default());
/// let calendar = generator.generate(&table).unwrap();
///
/// let first = calendar.get("2025-04-01").unwrap();
/// assert_eq!(first.primary(), "1 Aviv 6025");
/// assert_eq!(first.event(), "Rosh Hashanah");
/// ```
pub struct CalendarGenerator {
    years: YearLabels,
    resolver: Resolver,
    providers: Vec<Box<dyn EventProvider>>,
}

impl CalendarGenerator {
    /// Creates a generator with no providers.
    pub fn new(years: YearLabels, resolver: Resolver) -> Self {
        Self {
            years,
            resolver,
            providers: Vec::new(),
        }
    }

    /// Creates a generator with the festival, cycle and new-moon providers
    /// registered in that order.
    pub fn with_default_providers(
        years: YearLabels,
        festivals: Vec<FestivalRule>,
        labels: CycleLabels,
    ) -> Self {
        let resolver = Resolver::new(labels.culminating_name.as_str());
        let mut generator = Self::new(years, resolver);
        generator.register(Box::new(FestivalProvider::new(festivals)));
        generator.register(Box::new(CycleProvider::new(labels)));
        generator.register(Box::new(NewMoonProvider::default()));
        generator
    }

    /// Appends a provider; it is queried after those already registered.
    pub fn register(&mut self, provider: Box<dyn EventProvider>) {
        self.providers.push(provider);
    }

    /// Returns the number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Returns the year labels used for date labels.
    pub fn years(&self) -> YearLabels {
        self.years
    }

    /// Generates the calendar for every day of every month in `table`.
    ///
    /// A table without a first month still generates, only without the
    /// counting cycle and its culminating festival.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DuplicateDate`] if two months cover the same
    /// date, or [`CalendarError::DateOutOfRange`] on date overflow.
    #[tracing::instrument(skip_all, fields(n_months = table.len()))]
    pub fn generate(&mut self, table: &MonthTable) -> Result<Calendar, CalendarError> {
        let first = table.first_month();
        let schedule = match first {
            Some(month) => {
                let anchor = cycle_anchor(month)?;
                debug!(month = month.name(), %anchor, "counting cycle anchored");
                CycleSchedule::compute(anchor)?
            }
            None => {
                warn!("no first month in table; counting cycle disabled");
                CycleSchedule::empty()
            }
        };

        let run = RunContext {
            first_month: first.map(MonthDefinition::name),
            schedule: &schedule,
        };
        for provider in &mut self.providers {
            provider.prepare(&run);
        }

        let mut calendar = Calendar::new();
        let mut owners: HashMap<NaiveDate, &str> = HashMap::with_capacity(table.total_days());
        for month in table {
            let start = month_start(month)?;
            for offset in 0..month.duration_days() {
                let date = add_days(start, u64::from(offset))?;
                if let Some(previous) = owners.insert(date, month.name()) {
                    return Err(CalendarError::DuplicateDate {
                        date: date.to_string(),
                        month: month.name().to_string(),
                        previous: previous.to_string(),
                    });
                }
                calendar.insert(date, self.build_entry(month, offset + 1, date));
            }
            debug!(month = month.name(), %start, days = month.duration_days(), "month expanded");
        }

        info!(entries = calendar.len(), "generated calendar");
        Ok(calendar)
    }

    /// Builds the entry for one day of `month`.
    ///
    /// Queries every provider as currently prepared; call after
    /// [`generate`](Self::generate) has bound the run, or on a generator
    /// whose providers need no preparation.
    pub fn build_entry(&self, month: &MonthDefinition, day: u32, date: NaiveDate) -> CalendarEntry {
        let candidates: Vec<Annotation> = self
            .providers
            .iter()
            .flat_map(|p| p.events_for(month.name(), day, date))
            .collect();
        let resolution = self.resolver.resolve(&candidates);

        CalendarEntry::new(
            DateLabel::new(day, month.name(), self.years.bore()).to_string(),
            DateLabel::new(day, month.yehudim_name(), self.years.yehudim()).to_string(),
            resolution,
            day == 1,
            day == 1 && month.is_first(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::festival::default_festivals;
    use crate::month::gregorian_date;

    fn years() -> YearLabels {
        YearLabels::new(2025, 6025, 5785).unwrap()
    }

    fn month(name: &str, m: u32, d: u32, days: u32, number: u8, alt: &str) -> MonthDefinition {
        MonthDefinition::new(name, gregorian_date(2025, m, d).unwrap(), days, number, alt).unwrap()
    }

    fn generator() -> CalendarGenerator {
        CalendarGenerator::with_default_providers(
            years(),
            default_festivals(),
            CycleLabels::default(),
        )
    }

    #[test]
    fn month_start_is_day_after_sighting() {
        let aviv = month("Aviv", 3, 31, 29, 1, "Nisán");
        assert_eq!(month_start(&aviv).unwrap(), gregorian_date(2025, 4, 1).unwrap());
    }

    #[test]
    fn cycle_anchor_is_day_21() {
        let aviv = month("Aviv", 3, 31, 29, 1, "Nisán");
        assert_eq!(cycle_anchor(&aviv).unwrap(), gregorian_date(2025, 4, 21).unwrap());
    }

    #[test]
    fn default_provider_order() {
        assert_eq!(generator().provider_count(), 3);
    }

    #[test]
    fn labels_and_flags() {
        let table = MonthTable::new(vec![month("Aviv", 3, 31, 29, 1, "Nisán")]).unwrap();
        let cal = generator().generate(&table).unwrap();
        let e = cal.get("2025-04-02").unwrap();
        assert_eq!(e.primary(), "2 Aviv 6025");
        assert_eq!(e.alternate(), "2 Nisán 5785");
        assert!(!e.moon_visible());
        assert!(!e.first_month_confirmed());
    }

    #[test]
    fn adjacent_months_fill_without_gap() {
        let table = MonthTable::new(vec![
            month("Aviv", 3, 31, 28, 1, "Nisán"),
            month("Ziv", 4, 28, 30, 2, "Iyyar"),
        ])
        .unwrap();
        let cal = generator().generate(&table).unwrap();
        assert_eq!(cal.len(), 58);
        assert_eq!(cal.get("2025-04-28").unwrap().primary(), "28 Aviv 6025");
        let ziv = cal.get("2025-04-29").unwrap();
        assert_eq!(ziv.primary(), "1 Ziv 6025");
        assert!(ziv.moon_visible());
        assert!(!ziv.first_month_confirmed());
    }

    #[test]
    fn overlapping_months_rejected() {
        let table = MonthTable::new(vec![
            month("Aviv", 3, 31, 30, 1, "Nisán"),
            month("Ziv", 4, 28, 30, 2, "Iyyar"),
        ])
        .unwrap();
        let err = generator().generate(&table).unwrap_err();
        assert_eq!(
            err,
            CalendarError::DuplicateDate {
                date: "2025-04-29".to_string(),
                month: "Ziv".to_string(),
                previous: "Aviv".to_string(),
            }
        );
    }

    #[test]
    fn bare_generator_only_sets_labels() {
        let table = MonthTable::new(vec![month("Aviv", 3, 31, 29, 1, "Nisán")]).unwrap();
        let mut g = CalendarGenerator::new(years(), Resolver::default());
        let cal = g.generate(&table).unwrap();
        assert_eq!(cal.len(), 29);
        assert!(cal.iter().all(|(_, e)| e.event().is_empty() && e.note().is_empty()));
    }

    struct Sabbath;

    impl EventProvider for Sabbath {
        fn events_for(&self, _month: &str, _day: u32, date: NaiveDate) -> Vec<Annotation> {
            use chrono::Datelike;
            if date.weekday() == chrono::Weekday::Sat {
                vec![Annotation::new(
                    "Shabbat",
                    "Weekly rest",
                    crate::Category::Festival,
                    1,
                )]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn registered_provider_is_queried() {
        let table = MonthTable::new(vec![month("Aviv", 3, 31, 29, 1, "Nisán")]).unwrap();
        let mut g = generator();
        g.register(Box::new(Sabbath));
        let cal = g.generate(&table).unwrap();
        // 2025-04-05 is a Saturday.
        let e = cal.get("2025-04-05").unwrap();
        assert_eq!(e.event(), "Shabbat");
        assert_eq!(e.note(), "Weekly rest");
    }
}
