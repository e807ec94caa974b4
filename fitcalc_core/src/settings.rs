//! # Settings
//!
//! User-level configuration for presentation layers: display precision and
//! the history store's retention policy. The compute path never reads it.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or no file at all) is valid.
//!
//! ```json
//! { "decimals": 1, "history_ttl_days": 7 }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::result::DEFAULT_DECIMALS;

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "FITCALC_CONFIG";

/// History file name used when no path is configured
pub const DEFAULT_HISTORY_FILE: &str = ".fitcalc_history.json";

/// Largest accepted display precision
pub const MAX_DECIMALS: usize = 10;

/// Longest accepted history retention (100 years)
pub const MAX_HISTORY_TTL_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decimals shown for computed values
    pub decimals: usize,

    /// Days a stored result stays valid
    pub history_ttl_days: i64,

    /// Length of the recently-used calculator list
    pub recent_limit: usize,

    /// History file location; `None` means `$HOME/.fitcalc_history.json`
    pub history_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            decimals: DEFAULT_DECIMALS,
            history_ttl_days: 30,
            recent_limit: 5,
            history_path: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(CalcError::config_error(path.display().to_string(), e.to_string())),
        };

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))?;
        settings.validate(path)?;
        Ok(settings)
    }

    /// Load from an explicit path, else from `FITCALC_CONFIG`, else defaults
    pub fn resolve(explicit: Option<&Path>) -> CalcResult<Self> {
        match explicit {
            Some(path) => Settings::load(path),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(path) => Settings::load(Path::new(&path)),
                None => Ok(Settings::default()),
            },
        }
    }

    fn validate(&self, path: &Path) -> CalcResult<()> {
        let problem = if self.decimals > MAX_DECIMALS {
            Some(format!("decimals must be at most {}", MAX_DECIMALS))
        } else if !(1..=MAX_HISTORY_TTL_DAYS).contains(&self.history_ttl_days) {
            Some(format!("history_ttl_days must be between 1 and {}", MAX_HISTORY_TTL_DAYS))
        } else if self.recent_limit == 0 {
            Some("recent_limit must be at least 1".to_string())
        } else {
            None
        };
        match problem {
            Some(reason) => Err(CalcError::config_error(path.display().to_string(), reason)),
            None => Ok(()),
        }
    }

    /// Retention period for stored results, clamped to the accepted range
    pub fn history_ttl(&self) -> Duration {
        Duration::days(self.history_ttl_days.clamp(1, MAX_HISTORY_TTL_DAYS))
    }

    /// Effective history file path
    pub fn history_file(&self) -> PathBuf {
        if let Some(path) = &self.history_path {
            return path.clone();
        }
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_HISTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fitcalc_settings_{}_{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.decimals, 2);
        assert_eq!(settings.history_ttl(), Duration::days(30));
        assert_eq!(settings.recent_limit, 5);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("fitcalc_settings_does_not_exist.json");
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_file("partial", r#"{ "decimals": 1, "history_ttl_days": 7 }"#);
        let settings = Settings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            settings,
            Settings {
                decimals: 1,
                history_ttl_days: 7,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_invalid_file_rejected() {
        let path = temp_file("garbage", "decimals = 3");
        let err = Settings::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        let path = temp_file("zero_ttl", r#"{ "history_ttl_days": 0 }"#);
        let err = Settings::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }

    #[test]
    fn test_huge_ttl_rejected() {
        let path = temp_file("huge_ttl", r#"{ "history_ttl_days": 9000000000000000 }"#);
        let err = Settings::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(err, CalcError::ConfigError { ref reason, .. } if reason.contains("history_ttl_days")));

        let settings = Settings {
            history_ttl_days: i64::MAX,
            ..Settings::default()
        };
        assert_eq!(settings.history_ttl(), Duration::days(MAX_HISTORY_TTL_DAYS));
    }

    #[test]
    fn test_explicit_history_path() {
        let settings = Settings {
            history_path: Some(PathBuf::from("/tmp/h.json")),
            ..Settings::default()
        };
        assert_eq!(settings.history_file(), PathBuf::from("/tmp/h.json"));
        assert!(Settings::default().history_file().ends_with(DEFAULT_HISTORY_FILE));
    }
}
