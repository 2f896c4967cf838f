use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

use crate::theme::{ThemeMode, ThemeOverrides, Themes};

pub const CONFIG_ENV: &str = "SESSION_CALENDAR_CONFIG";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub palette: PaletteConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// First hour row of the week and day grids.
    pub hour_start: u32,
    /// Last hour row (inclusive).
    pub hour_end: u32,
    /// Hour the cursor starts on in timed views.
    pub default_hour: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub light: ThemeOverrides,
    pub dark: ThemeOverrides,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            hour_start: 6,
            hour_end: 22,
            default_hour: 9,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            items: ["Squat", "Bench Press", "Deadlift", "Overhead Press", "Pull Up", "Rowing"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Config {
    /// Load from `$SESSION_CALENDAR_CONFIG` or the user config dir. A
    /// missing file yields defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let cal = &self.calendar;
        if cal.hour_end > 23 || cal.hour_start > cal.hour_end {
            return Err(eyre!(
                "calendar hours must satisfy hour_start <= hour_end <= 23 (got {}..={})",
                cal.hour_start,
                cal.hour_end
            ));
        }
        Ok(())
    }

    pub fn themes(&self) -> Themes {
        Themes::new(&self.theme.light, &self.theme.dark)
    }

    /// `default_hour` clamped into the visible hour range.
    pub fn start_hour(&self) -> u32 {
        self.calendar
            .default_hour
            .clamp(self.calendar.hour_start, self.calendar.hour_end)
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("session-calendar").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ratatui::style::Color;

    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::parse(
            r##"
            [calendar]
            hour_start = 7
            hour_end = 20
            default_hour = 5

            [palette]
            items = ["Lunges", "Plank"]

            [theme]
            mode = "dark"

            [theme.dark]
            selected_bg = "#112233"
            "##,
        )
        .unwrap();

        assert_eq!(config.calendar.hour_start, 7);
        assert_eq!(config.start_hour(), 7);
        assert_eq!(config.palette.items, ["Lunges", "Plank"]);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(
            config.themes().get(ThemeMode::Dark).selected.bg,
            Some(Color::Rgb(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn rejects_inverted_hours() {
        let err = Config::parse("[calendar]\nhour_start = 20\nhour_end = 8\n").unwrap_err();
        assert!(err.to_string().contains("hour_start"));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Config::parse("[theme]\nmode = \"sepia\"\n").is_err());
    }

    #[test]
    fn from_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[calendar]\nhour_end = 99").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(format!("{:?}", err).contains(&file.path().display().to_string()));
    }
}
