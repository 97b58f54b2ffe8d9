use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use bore_calendar::CalendarGenerator;
use bore_io::{JsonSink, MappingSink};

use crate::cli::GenerateArgs;
use crate::config::{BoreConfig, DEFAULT_CONFIG_FILE};
use crate::convert;

/// Run the generation pipeline and return the path written.
pub fn run(args: GenerateArgs) -> Result<PathBuf> {
    let _cmd = info_span!("generate").entered();

    // 1. Load project TOML
    let config = load_config(&args.config)?;

    // 2. Build calendar inputs
    let years = convert::build_years(&config.years)?;
    let table = convert::build_month_table(&config.months, years)?;
    let festivals = convert::build_festivals(&config.festivals, &table)?;
    let labels = convert::build_cycle_labels(&config.cycle);
    let writer_cfg = convert::build_writer_config(&config.output);
    info!(
        bore_year = years.bore(),
        n_months = table.len(),
        n_festivals = festivals.len(),
        "configuration loaded"
    );

    // 3. Generate
    let mut generator = CalendarGenerator::with_default_providers(years, festivals, labels);
    let calendar = generator
        .generate(&table)
        .context("calendar generation failed")?;

    // 4. Write
    let sink = match args.output {
        Some(path) => JsonSink::to_file(path),
        None => JsonSink::in_dir(args.out_dir),
    }
    .with_config(writer_cfg);
    let path = sink
        .write(&calendar, years)
        .with_context(|| format!("failed to write {}", sink.path_for(years).display()))?;

    println!("{} entries written to {}", calendar.len(), path.display());
    Ok(path)
}

/// Reads and parses the config file.
///
/// A missing file is only tolerated at the default path, where the built-in
/// tables apply.
pub fn load_config(path: &Path) -> Result<BoreConfig> {
    if !path.exists() && path == Path::new(DEFAULT_CONFIG_FILE) {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        return Ok(BoreConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    use bore_io::read_calendar;

    fn args(config: PathBuf, out_dir: &Path) -> GenerateArgs {
        GenerateArgs {
            config,
            output: None,
            out_dir: out_dir.to_path_buf(),
        }
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn bad_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bore.toml");
        std::fs::write(&path, "[years\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }

    #[test]
    fn generate_defaults_to_bore_year_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("bore.toml");
        std::fs::write(&config, "").unwrap();

        let path = run(args(config, dir.path())).unwrap();
        assert_eq!(path, dir.path().join("6025.json"));

        let calendar = read_calendar(&path).unwrap();
        assert_eq!(calendar.len(), 260);
        let e = calendar.get("2025-04-01").unwrap();
        assert_eq!(e.primary(), "1 Aviv 6025");
        assert_eq!(e.alternate(), "1 Nisán 5785");
        assert_eq!(e.event(), "Rosh Hashanah");
        assert!(e.moon_visible());
        assert!(e.first_month_confirmed());
    }

    #[test]
    fn generate_to_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("bore.toml");
        std::fs::write(
            &config,
            r#"
            [years]
            gregorian = 2025
            bore = 6025
            yehudim = 5785

            [[months]]
            name = "Aviv"
            gregorian_month = 3
            gregorian_day = 31
            duration_days = 29
            month_number = 1
            yehudim_name = "Nisan"

            [output]
            pretty = false
            "#,
        )
        .unwrap();
        let out = dir.path().join("aviv.json");
        let mut a = args(config, dir.path());
        a.output = Some(out.clone());

        assert_eq!(run(a).unwrap(), out);
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(read_calendar(&out).unwrap().len(), 29);
    }

    #[test]
    fn overlapping_months_fail() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("bore.toml");
        std::fs::write(
            &config,
            r#"
            [[months]]
            name = "Aviv"
            gregorian_month = 3
            gregorian_day = 31
            duration_days = 30
            month_number = 1
            yehudim_name = "Nisan"

            [[months]]
            name = "Ziv"
            gregorian_month = 4
            gregorian_day = 28
            duration_days = 30
            month_number = 2
            yehudim_name = "Iyyar"
            "#,
        )
        .unwrap();
        let err = run(args(config, dir.path())).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("calendar generation failed"));
        assert!(msg.contains("2025-04-29"));
    }
}
