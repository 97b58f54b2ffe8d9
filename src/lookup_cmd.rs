use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use bore_calendar::{Calendar, CalendarEntry, DateLabel, calendar_day};
use chrono::NaiveDateTime;
use bore_io::read_calendar;

use crate::cli::LookupArgs;

/// Print the calendar entry in effect at the requested civil time.
pub fn run(args: LookupArgs) -> Result<()> {
    let _cmd = info_span!("lookup").entered();

    let calendar = read_calendar(&args.calendar)
        .with_context(|| format!("failed to read calendar: {}", args.calendar.display()))?;

    let civil = args
        .at
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let entry = select_entry(&calendar, civil, args.sunset_hour);

    for line in render(&entry) {
        println!("{line}");
    }
    Ok(())
}

/// Picks the entry in effect at `civil`: the calendar day's, else the civil
/// day's, else the "Unknown" placeholder.
fn select_entry(calendar: &Calendar, civil: NaiveDateTime, sunset_hour: u32) -> CalendarEntry {
    let day = calendar_day(civil, sunset_hour);
    debug!(%civil, calendar_day = %day, "resolved calendar day");

    match calendar.lookup(day, civil.date()) {
        Some(entry) => entry.clone(),
        None => {
            warn!(%day, "no calendar entry for date");
            CalendarEntry::unknown()
        }
    }
}

/// Formats an entry as display lines: day, month and year of the bore date,
/// then the yehudim date, note and event when present.
fn render(entry: &CalendarEntry) -> Vec<String> {
    let mut lines = match DateLabel::parse(entry.primary()) {
        Some(label) => vec![
            format!("Day:   {}", label.day),
            format!("Month: {}", label.month),
            format!("Year:  {}", label.year),
        ],
        None => vec![format!("Date:  {}", entry.primary())],
    };
    lines.push(format!("Yehudim: {}", entry.alternate()));
    if !entry.note().is_empty() {
        lines.push(format!("Note:  {}", entry.note()));
    }
    if !entry.event().is_empty() {
        lines.push(format!("Event: {}", entry.event()));
    }
    lines
}
