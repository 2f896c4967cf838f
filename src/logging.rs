use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SESSION_CALENDAR_LOG";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("session-calendar").join("session-calendar.log"))
}

/// Send `tracing` output to the log file; the terminal belongs to the UI.
/// Returns the path written to, or `None` if no log file could be opened.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = File::create(&path).ok()?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
