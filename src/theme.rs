use std::fmt;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Applied to the whole frame before anything else is drawn.
    pub base: Style,
    pub today: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub highlight: Style,
    pub event: Style,
    pub accent: Style,
    pub danger: Style,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            base: Style::default().fg(Color::Rgb(55, 65, 81)).bg(Color::Rgb(249, 250, 251)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(253, 230, 138)),
            selected: Style::default().fg(Color::White).bg(Color::Rgb(59, 130, 246)),
            header: Style::default().fg(Color::Rgb(31, 41, 55)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(156, 163, 175)),
            border: Style::default().fg(Color::Rgb(191, 219, 254)),
            status: Style::default().fg(Color::Rgb(75, 85, 99)).bg(Color::Rgb(229, 231, 235)),
            highlight: Style::default()
                .bg(Color::Rgb(219, 234, 254))
                .add_modifier(Modifier::BOLD),
            event: Style::default().fg(Color::White).bg(Color::Rgb(59, 130, 246)),
            accent: Style::default().fg(Color::Rgb(37, 99, 235)),
            danger: Style::default().fg(Color::Rgb(220, 38, 38)),
        }
    }

    pub fn dark() -> Self {
        Self {
            base: Style::default().fg(Color::Rgb(209, 213, 219)).bg(Color::Rgb(17, 24, 39)),
            today: Style::default().fg(Color::Black).bg(Color::Rgb(250, 189, 47)),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)),
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(107, 114, 128)),
            border: Style::default().fg(Color::Rgb(55, 65, 81)),
            status: Style::default().fg(Color::Rgb(209, 213, 219)).bg(Color::Rgb(31, 41, 55)),
            highlight: Style::default()
                .bg(Color::Rgb(55, 65, 81))
                .add_modifier(Modifier::BOLD),
            event: Style::default().fg(Color::Black).bg(Color::Rgb(129, 161, 193)),
            accent: Style::default().fg(Color::Rgb(136, 192, 208)),
            danger: Style::default().fg(Color::Rgb(248, 113, 113)),
        }
    }
}

/// The two resolved palettes, built once from config.
#[derive(Debug, Clone)]
pub struct Themes {
    light: Theme,
    dark: Theme,
}

impl Themes {
    pub fn new(light: &ThemeOverrides, dark: &ThemeOverrides) -> Self {
        Self {
            light: light.apply(Theme::light()),
            dark: dark.apply(Theme::dark()),
        }
    }

    pub fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for Themes {
    fn default() -> Self {
        Self::new(&ThemeOverrides::default(), &ThemeOverrides::default())
    }
}

// ── TOML override table ──

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeOverrides {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub today_fg: Option<String>,
    pub today_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub highlight_bg: Option<String>,
    pub event_fg: Option<String>,
    pub event_bg: Option<String>,
}

impl ThemeOverrides {
    pub fn apply(&self, mut theme: Theme) -> Theme {
        let color = |v: &Option<String>| v.as_deref().and_then(parse_color);

        if let Some(c) = color(&self.fg) {
            theme.base = theme.base.fg(c);
        }
        if let Some(c) = color(&self.bg) {
            theme.base = theme.base.bg(c);
        }
        if let Some(c) = color(&self.today_fg) {
            theme.today = theme.today.fg(c);
        }
        if let Some(c) = color(&self.today_bg) {
            theme.today = theme.today.bg(c);
        }
        if let Some(c) = color(&self.selected_fg) {
            theme.selected = theme.selected.fg(c);
        }
        if let Some(c) = color(&self.selected_bg) {
            theme.selected = theme.selected.bg(c);
        }
        if let Some(c) = color(&self.header_fg) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = color(&self.dim_fg) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = color(&self.border_fg) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = color(&self.status_fg) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = color(&self.status_bg) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = color(&self.highlight_bg) {
            theme.highlight = theme.highlight.bg(c);
        }
        if let Some(c) = color(&self.event_fg) {
            theme.event = theme.event.fg(c);
        }
        if let Some(c) = color(&self.event_bg) {
            theme.event = theme.event.bg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}
