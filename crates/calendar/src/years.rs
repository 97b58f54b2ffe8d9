//! Year labels shared by the generator and the output formatting.

use crate::error::CalendarError;

/// Upper bound for the Gregorian year label.
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Upper bound for the bore and yehudim year labels.
pub const MAX_LABEL_YEAR: u32 = 99_999;

/// The three year labels of one calendar run.
///
/// Constructed once per run and validated on construction, so a value of
/// this type always holds in-range years.
///
/// # Example
///
/// ```
/// use bore_calendar::YearLabels;
///
/// let years = YearLabels::new(2025, 6025, 5785).unwrap();
/// assert_eq!(years.bore(), 6025);
/// assert!(YearLabels::new(0, 6025, 5785).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearLabels {
    gregorian: i32,
    bore: u32,
    yehudim: u32,
}

impl YearLabels {
    /// Creates validated year labels.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `gregorian` is outside
    /// 1..=9999 or `bore`/`yehudim` are outside 1..=99999.
    pub fn new(gregorian: i32, bore: u32, yehudim: u32) -> Result<Self, CalendarError> {
        if !(1..=MAX_GREGORIAN_YEAR).contains(&gregorian) {
            return Err(CalendarError::InvalidYear {
                label: "gregorian",
                value: gregorian.into(),
                max: MAX_GREGORIAN_YEAR.into(),
            });
        }
        if !(1..=MAX_LABEL_YEAR).contains(&bore) {
            return Err(CalendarError::InvalidYear {
                label: "bore",
                value: bore.into(),
                max: MAX_LABEL_YEAR.into(),
            });
        }
        if !(1..=MAX_LABEL_YEAR).contains(&yehudim) {
            return Err(CalendarError::InvalidYear {
                label: "yehudim",
                value: yehudim.into(),
                max: MAX_LABEL_YEAR.into(),
            });
        }
        Ok(Self {
            gregorian,
            bore,
            yehudim,
        })
    }

    /// Returns the Gregorian year the month anchors fall in.
    pub fn gregorian(self) -> i32 {
        self.gregorian
    }

    /// Returns the primary (bore) calendar year.
    pub fn bore(self) -> u32 {
        self.bore
    }

    /// Returns the alternate (yehudim) calendar year.
    pub fn yehudim(self) -> u32 {
        self.yehudim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let years = YearLabels::new(2025, 6025, 5785).unwrap();
        assert_eq!(years.gregorian(), 2025);
        assert_eq!(years.bore(), 6025);
        assert_eq!(years.yehudim(), 5785);
    }

    #[test]
    fn bounds_inclusive() {
        assert!(YearLabels::new(1, 1, 1).is_ok());
        assert!(YearLabels::new(9999, 99_999, 99_999).is_ok());
    }

    #[test]
    fn gregorian_out_of_range() {
        assert_eq!(
            YearLabels::new(10_000, 6025, 5785).unwrap_err(),
            CalendarError::InvalidYear {
                label: "gregorian",
                value: 10_000,
                max: 9999,
            }
        );
        assert!(YearLabels::new(0, 6025, 5785).is_err());
        assert!(YearLabels::new(-5, 6025, 5785).is_err());
    }

    #[test]
    fn bore_out_of_range() {
        assert_eq!(
            YearLabels::new(2025, 0, 5785).unwrap_err(),
            CalendarError::InvalidYear {
                label: "bore",
                value: 0,
                max: 99_999,
            }
        );
    }

    #[test]
    fn yehudim_out_of_range() {
        assert_eq!(
            YearLabels::new(2025, 6025, 100_000).unwrap_err(),
            CalendarError::InvalidYear {
                label: "yehudim",
                value: 100_000,
                max: 99_999,
            }
        );
    }
}
