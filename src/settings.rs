//! Player-side settings: where scores and logs go, and how chatty the log is.
//!
//! Read from `brick-breaker.json` next to the executable. Gameplay itself is
//! not configurable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::Level;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "brick-breaker.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Score history (JSON Lines)
    pub score_file: PathBuf,
    /// Log output; the terminal belongs to the game screen
    pub log_file: PathBuf,
    /// `env_logger` filter directives, e.g. `info` or `brick_breaker=debug`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let dir = data_dir();
        Self {
            score_file: dir.join("brick-breaker.scores"),
            log_file: dir.join("brick-breaker.log"),
            log_filter: "info".to_string(),
        }
    }
}

/// Messages produced while loading, before any logger is installed.
pub type Notes = Vec<(Level, String)>;

impl Settings {
    /// Settings from the default location
    pub fn load() -> (Self, Notes) {
        Self::load_from(&data_dir().join(SETTINGS_FILE))
    }

    /// Missing file gives defaults silently; an unreadable or malformed one
    /// gives defaults and a warning note for the caller to log.
    pub fn load_from(path: &Path) -> (Self, Notes) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return (Self::default(), Vec::new()),
            Err(e) => {
                let note = format!("could not read {}: {e}, using defaults", path.display());
                return (Self::default(), vec![(Level::Warn, note)]);
            }
        };
        match serde_json::from_str(&text) {
            Ok(settings) => {
                let note = format!("loaded settings from {}", path.display());
                (settings, vec![(Level::Info, note)])
            }
            Err(e) => {
                let note = format!("ignoring malformed {}: {e}", path.display());
                (Self::default(), vec![(Level::Warn, note)])
            }
        }
    }
}

/// Directory holding the executable, or the working directory as a fallback
fn data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let (settings, notes) = Settings::load_from(&dir.path().join(SETTINGS_FILE));
        assert_eq!(settings, Settings::default());
        assert!(notes.is_empty());
        assert_eq!(settings.log_filter, "info");
        assert!(settings.score_file.ends_with("brick-breaker.scores"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "score_file": "/tmp/elsewhere.scores" }"#).unwrap();

        let (settings, notes) = Settings::load_from(&path);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].0, Level::Info);
        assert_eq!(settings.score_file, PathBuf::from("/tmp/elsewhere.scores"));
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ score_file = 3").unwrap();
        let (settings, notes) = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].0, Level::Warn);
        assert!(notes[0].1.contains("malformed"));
    }
}
