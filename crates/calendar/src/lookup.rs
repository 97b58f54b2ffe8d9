//! Civil time to calendar day.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Hour at which the calendar day rolls over when no sunset time is known.
pub const DEFAULT_SUNSET_HOUR: u32 = 18;

/// Returns the calendar day in effect at a civil date and time.
///
/// Calendar days begin at sunset, so from `sunset_hour` onwards the civil
/// evening already belongs to the next day.
///
/// # Example
///
/// ```
/// use bore_calendar::calendar_day;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
/// assert_eq!(calendar_day(d.and_hms_opt(17, 59, 0).unwrap(), 18), d);
/// assert_eq!(calendar_day(d.and_hms_opt(18, 0, 0).unwrap(), 18), d.succ_opt().unwrap());
/// ```
pub fn calendar_day(civil: NaiveDateTime, sunset_hour: u32) -> NaiveDate {
    let date = civil.date();
    if civil.hour() >= sunset_hour {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 13)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn before_sunset_same_day() {
        assert_eq!(calendar_day(at(0, 0), 18), at(0, 0).date());
        assert_eq!(calendar_day(at(17, 59), 18), at(0, 0).date());
    }

    #[test]
    fn from_sunset_next_day() {
        let next = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        assert_eq!(calendar_day(at(18, 0), 18), next);
        assert_eq!(calendar_day(at(23, 59), 18), next);
    }

    #[test]
    fn sunset_hour_configurable() {
        assert_eq!(calendar_day(at(19, 30), 20), at(0, 0).date());
        assert_eq!(calendar_day(at(20, 0), 20).to_string(), "2025-04-14");
    }

    #[test]
    fn year_end_rolls_over() {
        let eve = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        assert_eq!(
            calendar_day(eve, DEFAULT_SUNSET_HOUR),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }
}
