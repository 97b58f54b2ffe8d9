//! Fixed festivals keyed by (month name, day within month).

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::annotation::{Annotation, Category};
use crate::cycle::FESTIVAL_PRIORITY;
use crate::provider::EventProvider;

/// Category a fixed festival may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FestivalKind {
    /// Appointed festival.
    #[default]
    Festival,
    /// Seasonal marker.
    Seasonal,
}

impl From<FestivalKind> for Category {
    fn from(kind: FestivalKind) -> Self {
        match kind {
            FestivalKind::Festival => Category::Festival,
            FestivalKind::Seasonal => Category::Seasonal,
        }
    }
}

/// One row of the fixed festival table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalRule {
    /// Bore month name.
    pub month: String,
    /// 1-based day within the month.
    pub day: u32,
    /// Event name.
    pub name: String,
    /// Explanatory note.
    pub note: String,
    /// Festival or seasonal marker.
    pub kind: FestivalKind,
    /// Priority weight.
    pub priority: u8,
}

impl FestivalRule {
    /// Creates a rule with the default festival priority.
    pub fn new(
        month: impl Into<String>,
        day: u32,
        name: impl Into<String>,
        note: impl Into<String>,
        kind: FestivalKind,
    ) -> Self {
        Self {
            month: month.into(),
            day,
            name: name.into(),
            note: note.into(),
            kind,
            priority: FESTIVAL_PRIORITY,
        }
    }
}

/// The stock festival table: four days of Aviv and three of Etanim.
pub fn default_festivals() -> Vec<FestivalRule> {
    use FestivalKind::*;
    vec![
        FestivalRule::new("Aviv", 1, "Rosh Hashanah", "Beginning of the Biblical year", Seasonal),
        FestivalRule::new("Aviv", 14, "Pesach", "Pesach begins at sunset", Festival),
        FestivalRule::new("Aviv", 15, "Hag Ha'Matzot", "Start of Hag Ha'Matzot", Festival),
        FestivalRule::new(
            "Aviv",
            21,
            "Bikurim and Omer",
            "Bikurim (Firstfruits) and first day of the Omer",
            Seasonal,
        ),
        FestivalRule::new("Etanim", 1, "Yom Teruah", "Yom Teruah (Rosh Hashana)", Festival),
        FestivalRule::new(
            "Etanim",
            10,
            "Yom Ha'Kipurim",
            "Yom Ha'Kipurim (Day of Atonement)",
            Festival,
        ),
        FestivalRule::new("Etanim", 15, "Sucot", "Sucot begins", Festival),
    ]
}

/// Looks up fixed festivals by month name and day.
///
/// At most one annotation is returned per date. When two rules share a
/// key the later one replaces the earlier.
#[derive(Debug, Clone, Default)]
pub struct FestivalProvider {
    table: HashMap<String, HashMap<u32, Annotation>>,
}

impl FestivalProvider {
    /// Builds the lookup table from `rules`.
    pub fn new(rules: impl IntoIterator<Item = FestivalRule>) -> Self {
        let mut table: HashMap<String, HashMap<u32, Annotation>> = HashMap::new();
        for r in rules {
            let annotation = Annotation::new(r.name, r.note, r.kind.into(), r.priority);
            table.entry(r.month).or_default().insert(r.day, annotation);
        }
        Self { table }
    }

    /// Returns the number of distinct (month, day) keys.
    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl EventProvider for FestivalProvider {
    fn events_for(&self, month: &str, day: u32, _date: NaiveDate) -> Vec<Annotation> {
        self.table
            .get(month)
            .and_then(|days| days.get(&day))
            .cloned()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap()
    }

    #[test]
    fn default_table_size() {
        let p = FestivalProvider::new(default_festivals());
        assert_eq!(p.len(), 7);
    }

    #[test]
    fn lookup_hit() {
        let p = FestivalProvider::new(default_festivals());
        let events = p.events_for("Aviv", 14, date());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "Pesach");
        assert_eq!(events[0].category(), Category::Festival);
        assert_eq!(events[0].priority(), 10);
    }

    #[test]
    fn lookup_seasonal() {
        let p = FestivalProvider::new(default_festivals());
        let events = p.events_for("Aviv", 1, date());
        assert_eq!(events[0].name(), "Rosh Hashanah");
        assert_eq!(events[0].category(), Category::Seasonal);
    }

    #[test]
    fn lookup_miss() {
        let p = FestivalProvider::new(default_festivals());
        assert!(p.events_for("Aviv", 2, date()).is_empty());
        assert!(p.events_for("Ziv", 14, date()).is_empty());
    }

    #[test]
    fn later_rule_replaces_earlier() {
        let p = FestivalProvider::new(vec![
            FestivalRule::new("Aviv", 10, "A", "a", FestivalKind::Festival),
            FestivalRule::new("Aviv", 10, "B", "b", FestivalKind::Seasonal),
        ]);
        assert_eq!(p.len(), 1);
        assert_eq!(p.events_for("Aviv", 10, date())[0].name(), "B");
    }

    #[test]
    fn same_day_in_two_months() {
        let p = FestivalProvider::new(default_festivals());
        assert_eq!(p.len(), 7);
        assert_eq!(p.events_for("Aviv", 15, date())[0].name(), "Hag Ha'Matzot");
        assert_eq!(p.events_for("Etanim", 15, date())[0].name(), "Sucot");
        assert!(p.events_for("Bul", 15, date()).is_empty());
    }

    #[test]
    fn empty_table() {
        let p = FestivalProvider::new(Vec::new());
        assert!(p.is_empty());
        assert!(p.events_for("Aviv", 1, date()).is_empty());
    }
}
