//! Error types for the bore-calendar crate.

/// Error type for all fallible operations in the bore-calendar crate.
///
/// Every variant is a configuration problem detected before or during a
/// generation run. Lookup misses are not errors and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year label is outside its declared bounds.
    #[error("invalid {label} year: {value} (must be 1..={max})")]
    InvalidYear {
        /// Which label was rejected (`gregorian`, `bore` or `yehudim`).
        label: &'static str,
        /// The rejected value.
        value: i64,
        /// Inclusive upper bound for this label.
        max: i64,
    },

    /// Returned when a month definition cannot be constructed.
    #[error("invalid month definition '{name}': {reason}")]
    InvalidMonthDefinition {
        /// Name of the offending month (may be empty).
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Returned when two definitions in one table share a name.
    #[error("duplicate month name '{name}' in month table")]
    DuplicateMonth {
        /// The repeated name.
        name: String,
    },

    /// Returned when two definitions in one table share an ordinal.
    #[error("month '{name}' repeats ordinal {number} of month '{previous}'")]
    DuplicateMonthNumber {
        /// The repeated ordinal.
        number: u8,
        /// Month carrying the ordinal a second time.
        name: String,
        /// Month that carried it first.
        previous: String,
    },

    /// Returned when a Gregorian year/month/day triple is not a real date.
    #[error("invalid gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Gregorian year.
        year: i32,
        /// Gregorian month.
        month: u32,
        /// Gregorian day of month.
        day: u32,
    },

    /// Returned when date arithmetic leaves the representable range.
    #[error("date out of range: {reason}")]
    DateOutOfRange {
        /// Description of the failed computation.
        reason: String,
    },

    /// Returned when two months would emit an entry for the same date.
    #[error("date {date} of month '{month}' overlaps month '{previous}'")]
    DuplicateDate {
        /// ISO date that was produced twice.
        date: String,
        /// Month being expanded when the collision was found.
        month: String,
        /// Month that produced the date first.
        previous: String,
    },
}
