//! # bore-calendar
//!
//! Maps Gregorian dates onto the bore calendar: every day of every month in
//! a [`MonthTable`] becomes one [`CalendarEntry`] with bore and yehudim date
//! labels, a merged note, an event name and the new-moon flags.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["MonthTable"] -->|"first_month()"| B["cycle_anchor()"]
//!     B -->|"CycleSchedule::compute()"| C["CycleSchedule"]
//!     C -->|"prepare()"| D["EventProvider set"]
//!     A -->|"generate()"| E["(month, day, date)"]
//!     E -->|"events_for()"| D
//!     D -->|"Vec of Annotation"| F["Resolver"]
//!     F -->|"Resolution"| G["CalendarEntry"]
//!     G --> H["Calendar"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use bore_calendar::*;
//!
//! let years = YearLabels::new(2025, 6025, 5785)?;
//! let table = MonthTable::new(vec![
//!     MonthDefinition::new("Aviv", gregorian_date(2025, 3, 31)?, 28, 1, "Nisán")?,
//!     MonthDefinition::new("Ziv", gregorian_date(2025, 4, 28)?, 30, 2, "Iyyar")?,
//! ])?;
//!
//! let festivals = default_festivals();
//! let mut generator =
//!     CalendarGenerator::with_default_providers(years, festivals, CycleLabels::default());
//! let calendar = generator.generate(&table)?;
//! assert_eq!(calendar.len(), 58);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `years` | Validated year labels |
//! | `month` | Month definitions and the month table |
//! | `cycle` | 50-day counting cycle and its provider |
//! | `festival` | Fixed festival table and provider |
//! | `provider` | Provider trait and the new-moon provider |
//! | `resolve` | Pass-ordered annotation merge |
//! | `entry` | Output entries, date labels and the calendar map |
//! | `generator` | Month expansion and orchestration |
//! | `lookup` | Civil time to calendar day |
//! | `error` | Error types |

mod annotation;
mod cycle;
mod entry;
mod error;
mod festival;
mod generator;
mod lookup;
mod month;
mod provider;
mod resolve;
mod years;

pub use annotation::{Annotation, Category};
pub use cycle::{
    CYCLE_ANCHOR_OFFSET, CYCLE_LENGTH, CYCLE_PRIORITY, CycleLabels, CycleProvider, CycleSchedule,
    FESTIVAL_PRIORITY,
};
pub use entry::{Calendar, CalendarEntry, DateLabel, FIRST_MONTH_CONFIRMED, MOON_VISIBLE, iso_key};
pub use error::CalendarError;
pub use festival::{FestivalKind, FestivalProvider, FestivalRule, default_festivals};
pub use generator::{CalendarGenerator, cycle_anchor, month_start};
pub use lookup::{DEFAULT_SUNSET_HOUR, calendar_day};
pub use month::{FIRST_MONTH_NUMBER, MonthDefinition, MonthTable, gregorian_date};
pub use provider::{EventProvider, NEW_MOON_PRIORITY, NewMoonProvider, RunContext};
pub use resolve::{NOTE_SEPARATOR, Resolution, Resolver};
pub use years::{MAX_GREGORIAN_YEAR, MAX_LABEL_YEAR, YearLabels};
