//! Output records and the date-keyed calendar they form.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::resolve::Resolution;

/// Token written when the new moon is visible on a date.
pub const MOON_VISIBLE: &str = "visible";

/// Token written on the first day of the designated first month.
pub const FIRST_MONTH_CONFIRMED: &str = "confirmed";

/// Calendar data for one Gregorian date.
///
/// Serializes to the `{bore, yehudim, note, moon, aviv, event}` object
/// consumed by the calendar widgets, with the two flags rendered as string
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    #[serde(rename = "bore")]
    primary: String,
    #[serde(rename = "yehudim")]
    alternate: String,
    note: String,
    #[serde(
        rename = "moon",
        serialize_with = "ser_moon",
        deserialize_with = "de_moon"
    )]
    moon_visible: bool,
    #[serde(
        rename = "aviv",
        serialize_with = "ser_first_month",
        deserialize_with = "de_first_month"
    )]
    first_month_confirmed: bool,
    event: String,
}

impl CalendarEntry {
    /// Creates an entry from its labels, the resolved annotations and the
    /// two flags.
    pub fn new(
        primary: String,
        alternate: String,
        resolution: Resolution,
        moon_visible: bool,
        first_month_confirmed: bool,
    ) -> Self {
        Self {
            primary,
            alternate,
            note: resolution.note,
            moon_visible,
            first_month_confirmed,
            event: resolution.event,
        }
    }

    /// Placeholder shown when a date has no entry.
    pub fn unknown() -> Self {
        Self {
            primary: "Unknown".to_string(),
            alternate: "Unknown".to_string(),
            note: String::new(),
            moon_visible: false,
            first_month_confirmed: false,
            event: String::new(),
        }
    }

    /// Returns the bore date label, e.g. `"1 Aviv 6025"`.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Returns the yehudim date label, e.g. `"1 Nisán 5785"`.
    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    /// Returns the merged note, possibly empty.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Returns the event name, possibly empty.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Returns `true` on the first day of any month.
    pub fn moon_visible(&self) -> bool {
        self.moon_visible
    }

    /// Returns `true` on the first day of the designated first month.
    pub fn first_month_confirmed(&self) -> bool {
        self.first_month_confirmed
    }
}

fn ser_token<S: Serializer>(set: bool, token: &str, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(if set { token } else { "" })
}

fn de_token<'de, D: Deserializer<'de>>(d: D, token: &'static str) -> Result<bool, D::Error> {
    let s = String::deserialize(d)?;
    match s.as_str() {
        "" => Ok(false),
        t if t == token => Ok(true),
        other => Err(D::Error::invalid_value(Unexpected::Str(other), &token)),
    }
}

fn ser_moon<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
    ser_token(*v, MOON_VISIBLE, s)
}

fn de_moon<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    de_token(d, MOON_VISIBLE)
}

fn ser_first_month<S: Serializer>(v: &bool, s: S) -> Result<S::Ok, S::Error> {
    ser_token(*v, FIRST_MONTH_CONFIRMED, s)
}

fn de_first_month<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    de_token(d, FIRST_MONTH_CONFIRMED)
}

/// A `"{day} {month} {year}"` date label.
///
/// Month names may contain spaces (`"3rd month"`); the day is the first
/// word and the year the last.
///
/// # Example
///
/// ```
/// use bore_calendar::DateLabel;
///
/// let label = DateLabel::parse("21 3rd month 6025").unwrap();
/// assert_eq!(label.day, 21);
/// assert_eq!(label.month, "3rd month");
/// assert_eq!(label.year, 6025);
/// assert_eq!(label.to_string(), "21 3rd month 6025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabel {
    /// Day within the month.
    pub day: u32,
    /// Month name.
    pub month: String,
    /// Year label.
    pub year: u32,
}

impl DateLabel {
    /// Creates a label.
    pub fn new(day: u32, month: impl Into<String>, year: u32) -> Self {
        Self {
            day,
            month: month.into(),
            year,
        }
    }

    /// Splits a formatted label back into its parts.
    ///
    /// Returns `None` unless the label has a numeric first and last word
    /// around a non-empty month name.
    pub fn parse(label: &str) -> Option<Self> {
        let (day, rest) = label.trim().split_once(' ')?;
        let (month, year) = rest.rsplit_once(' ')?;
        let month = month.trim();
        if month.is_empty() {
            return None;
        }
        Some(Self {
            day: day.parse().ok()?,
            month: month.to_string(),
            year: year.parse().ok()?,
        })
    }
}

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Formats a date as the `YYYY-MM-DD` key used by [`Calendar`].
pub fn iso_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Generated calendar: one entry per Gregorian date, keyed by ISO date.
///
/// Keys are kept sorted, so serializing the same calendar twice yields
/// identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calendar {
    entries: BTreeMap<String, CalendarEntry>,
}

impl Calendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, date: NaiveDate, entry: CalendarEntry) {
        self.entries.insert(iso_key(date), entry);
    }

    /// Returns the entry stored under an ISO date key.
    pub fn get(&self, iso: &str) -> Option<&CalendarEntry> {
        self.entries.get(iso)
    }

    /// Returns the entry for `date`.
    pub fn get_date(&self, date: NaiveDate) -> Option<&CalendarEntry> {
        self.get(&iso_key(date))
    }

    /// Returns the entry for `calendar_day`, falling back to `civil_day`.
    ///
    /// See [`calendar_day`](crate::calendar_day) for how the two differ.
    pub fn lookup(&self, calendar_day: NaiveDate, civil_day: NaiveDate) -> Option<&CalendarEntry> {
        self.get_date(calendar_day)
            .or_else(|| self.get_date(civil_day))
    }

    /// Iterates over `(iso date, entry)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CalendarEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the calendar has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(moon: bool, first: bool) -> CalendarEntry {
        CalendarEntry::new(
            "1 Aviv 6025".to_string(),
            "1 Nisán 5785".to_string(),
            Resolution {
                note: "Beginning of the Biblical year".to_string(),
                event: "Rosh Hashanah".to_string(),
            },
            moon,
            first,
        )
    }

    #[test]
    fn serializes_tokens() {
        let json = serde_json::to_value(entry(true, true)).unwrap();
        assert_eq!(json["bore"], "1 Aviv 6025");
        assert_eq!(json["yehudim"], "1 Nisán 5785");
        assert_eq!(json["moon"], "visible");
        assert_eq!(json["aviv"], "confirmed");
        assert_eq!(json["event"], "Rosh Hashanah");

        let json = serde_json::to_value(entry(false, false)).unwrap();
        assert_eq!(json["moon"], "");
        assert_eq!(json["aviv"], "");
    }

    #[test]
    fn field_order() {
        let json = serde_json::to_string(&entry(true, false)).unwrap();
        let keys = ["bore", "yehudim", "note", "moon", "aviv", "event"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| format!("\"{k}\""))
            .map(|k| json.find(&k).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn deserializes_tokens() {
        let e: CalendarEntry = serde_json::from_str(
            r#"{"bore":"2 Ziv 6025","yehudim":"2 Iyyar 5785",
                "note":"","moon":"","aviv":"","event":""}"#,
        )
        .unwrap();
        assert_eq!(e.primary(), "2 Ziv 6025");
        assert!(!e.moon_visible());
        assert!(!e.first_month_confirmed());
    }

    #[test]
    fn rejects_unknown_token() {
        let r: Result<CalendarEntry, _> = serde_json::from_str(
            r#"{"bore":"","yehudim":"","note":"","moon":"hidden","aviv":"","event":""}"#,
        );
        assert!(r.is_err());
    }

    #[test]
    fn unknown_entry() {
        let e = CalendarEntry::unknown();
        assert_eq!(e.primary(), "Unknown");
        assert_eq!(e.alternate(), "Unknown");
        assert_eq!(e.note(), "");
        assert_eq!(e.event(), "");
    }

    #[test]
    fn date_label_parse() {
        assert_eq!(
            DateLabel::parse("1 Aviv 6025"),
            Some(DateLabel::new(1, "Aviv", 6025))
        );
        assert_eq!(
            DateLabel::parse("30 6th month 6025"),
            Some(DateLabel::new(30, "6th month", 6025))
        );
        assert_eq!(DateLabel::parse("Unknown"), None);
        assert_eq!(DateLabel::parse("1 6025"), None);
        assert_eq!(DateLabel::parse("x Aviv 6025"), None);
    }

    #[test]
    fn iso_key_pads() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert_eq!(iso_key(d), "2025-04-01");
    }

    #[test]
    fn calendar_lookup_falls_back() {
        let mut cal = Calendar::new();
        let civil = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let next = civil.succ_opt().unwrap();
        cal.insert(civil, entry(true, true));

        assert_eq!(cal.lookup(next, civil).map(|e| e.event()), Some("Rosh Hashanah"));
        assert_eq!(cal.lookup(civil, next).map(|e| e.primary()), Some("1 Aviv 6025"));
        assert!(cal.lookup(next, next).is_none());
    }

    #[test]
    fn calendar_serializes_as_plain_object() {
        let mut cal = Calendar::new();
        cal.insert(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(), entry(true, true));
        let json = serde_json::to_value(&cal).unwrap();
        assert_eq!(json["2025-04-01"]["moon"], "visible");
        let back: Calendar = serde_json::from_value(json).unwrap();
        assert_eq!(back, cal);
    }
}
