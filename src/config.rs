use serde::Deserialize;

/// Configuration file read by `generate` when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bore.toml";

/// Top-level bore configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoreConfig {
    /// Year labels.
    #[serde(default)]
    pub years: YearsToml,

    /// Month table, in year order.
    #[serde(default = "default_months")]
    pub months: Vec<MonthToml>,

    /// Fixed festival table. Replacing it swaps the whole table.
    #[serde(default = "default_festivals")]
    pub festivals: Vec<FestivalToml>,

    /// Counting-cycle labels.
    #[serde(default)]
    pub cycle: CycleToml,

    /// Output layout.
    #[serde(default)]
    pub output: OutputToml,
}

impl Default for BoreConfig {
    fn default() -> Self {
        Self {
            years: YearsToml::default(),
            months: default_months(),
            festivals: default_festivals(),
            cycle: CycleToml::default(),
            output: OutputToml::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearsToml {
    #[serde(default = "default_gregorian_year")]
    pub gregorian: i32,
    #[serde(default = "default_bore_year")]
    pub bore: u32,
    #[serde(default = "default_yehudim_year")]
    pub yehudim: u32,
}

impl Default for YearsToml {
    fn default() -> Self {
        Self {
            gregorian: default_gregorian_year(),
            bore: default_bore_year(),
            yehudim: default_yehudim_year(),
        }
    }
}

fn default_gregorian_year() -> i32 {
    2025
}
fn default_bore_year() -> u32 {
    6025
}
fn default_yehudim_year() -> u32 {
    5785
}

/// One month; `gregorian_month`/`gregorian_day` give the new-moon sighting
/// in the configured Gregorian year.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthToml {
    pub name: String,
    pub gregorian_month: u32,
    pub gregorian_day: u32,
    pub duration_days: u32,
    pub month_number: u8,
    pub yehudim_name: String,
}

impl MonthToml {
    fn new(
        name: &str,
        (gregorian_month, gregorian_day): (u32, u32),
        duration_days: u32,
        month_number: u8,
        yehudim_name: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            gregorian_month,
            gregorian_day,
            duration_days,
            month_number,
            yehudim_name: yehudim_name.to_string(),
        }
    }
}

// Durations end each month the day before the next sighting.
fn default_months() -> Vec<MonthToml> {
    vec![
        MonthToml::new("Aviv", (3, 31), 28, 1, "Nisán"),
        MonthToml::new("Ziv", (4, 28), 29, 2, "Iyyar"),
        MonthToml::new("3rd month", (5, 27), 29, 3, "Sivan"),
        MonthToml::new("4th month", (6, 27), 30, 4, "Tamuz"),
        MonthToml::new("5th month", (7, 27), 28, 5, "Av"),
        MonthToml::new("6th month", (8, 24), 30, 6, "Elul"),
        MonthToml::new("Etanim", (9, 24), 29, 7, "Tishrei"),
        MonthToml::new("Bul", (10, 24), 28, 8, "Cheshvan"),
        MonthToml::new("9th month", (11, 21), 29, 9, "Kislev"),
    ]
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FestivalToml {
    pub month: String,
    pub day: u32,
    pub name: String,
    pub note: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_kind() -> String {
    "festival".to_string()
}
fn default_priority() -> u8 {
    bore_calendar::FESTIVAL_PRIORITY
}

fn default_festivals() -> Vec<FestivalToml> {
    bore_calendar::default_festivals()
        .into_iter()
        .map(|r| FestivalToml {
            month: r.month,
            day: r.day,
            name: r.name,
            note: r.note,
            kind: match r.kind {
                bore_calendar::FestivalKind::Festival => "festival".to_string(),
                bore_calendar::FestivalKind::Seasonal => "seasonal".to_string(),
            },
            priority: r.priority,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleToml {
    #[serde(default = "default_day_name")]
    pub day_name: String,
    #[serde(default = "default_culminating")]
    pub culminating_name: String,
    #[serde(default = "default_culminating")]
    pub culminating_note: String,
}

impl Default for CycleToml {
    fn default() -> Self {
        Self {
            day_name: default_day_name(),
            culminating_name: default_culminating(),
            culminating_note: default_culminating(),
        }
    }
}

fn default_day_name() -> String {
    "Omer".to_string()
}
fn default_culminating() -> String {
    "Shavuot".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            pretty: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
