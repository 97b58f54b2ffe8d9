//! Pure conversion functions: TOML config structs -> calendar API types.

use anyhow::{Context, Result, bail};

use bore_calendar::{
    CycleLabels, FestivalKind, FestivalRule, MonthDefinition, MonthTable, YearLabels,
    gregorian_date,
};
use bore_io::WriterConfig;

use crate::config::*;

/// Parses a festival kind name into the corresponding enum variant.
pub fn parse_festival_kind(s: &str) -> Result<FestivalKind> {
    match s.to_lowercase().as_str() {
        "festival" => Ok(FestivalKind::Festival),
        "seasonal" => Ok(FestivalKind::Seasonal),
        other => bail!("unknown festival kind: {other:?}"),
    }
}

/// Builds validated [`YearLabels`] from the `[years]` section.
pub fn build_years(years: &YearsToml) -> Result<YearLabels> {
    YearLabels::new(years.gregorian, years.bore, years.yehudim).context("invalid [years]")
}

/// Builds the [`MonthTable`], anchoring each sighting in the Gregorian year.
pub fn build_month_table(months: &[MonthToml], years: YearLabels) -> Result<MonthTable> {
    let definitions = months
        .iter()
        .map(|m| {
            let start = gregorian_date(years.gregorian(), m.gregorian_month, m.gregorian_day)
                .with_context(|| format!("month {:?}", m.name))?;
            MonthDefinition::new(
                m.name.as_str(),
                start,
                m.duration_days,
                m.month_number,
                m.yehudim_name.as_str(),
            )
            .map_err(anyhow::Error::from)
        })
        .collect::<Result<Vec<_>>>()?;
    MonthTable::new(definitions).context("invalid [[months]]")
}

/// Builds the festival rules, checking each refers to a configured month.
pub fn build_festivals(
    festivals: &[FestivalToml],
    table: &MonthTable,
) -> Result<Vec<FestivalRule>> {
    festivals
        .iter()
        .map(|f| {
            if f.day == 0 {
                bail!("festival {:?}: day is 1-based", f.name);
            }
            if let Some(month) = table.get(&f.month) {
                if f.day > month.duration_days() {
                    bail!(
                        "festival {:?}: day {} is past the end of {:?} ({} days)",
                        f.name,
                        f.day,
                        f.month,
                        month.duration_days()
                    );
                }
            } else {
                tracing::warn!(
                    festival = %f.name,
                    month = %f.month,
                    "festival month not in month table"
                );
            }
            let kind = parse_festival_kind(&f.kind)
                .with_context(|| format!("festival {:?}", f.name))?;
            let mut rule = FestivalRule::new(
                f.month.as_str(),
                f.day,
                f.name.as_str(),
                f.note.as_str(),
                kind,
            );
            rule.priority = f.priority;
            Ok(rule)
        })
        .collect()
}

/// Builds the counting-cycle labels from the `[cycle]` section.
pub fn build_cycle_labels(cycle: &CycleToml) -> CycleLabels {
    CycleLabels {
        day_name: cycle.day_name.clone(),
        culminating_name: cycle.culminating_name.clone(),
        culminating_note: cycle.culminating_note.clone(),
    }
}

/// Builds a [`WriterConfig`] from the `[output]` section.
pub fn build_writer_config(output: &OutputToml) -> WriterConfig {
    WriterConfig::default().with_pretty(output.pretty)
}
