//! Runtime settings.
//!
//! Defaults can be overridden by a TOML file when the `config` feature is enabled:
//!
//! ```toml
//! theme = "high-contrast"
//! show_keypad = true
//! poll_interval_ms = 50
//! ```
//!
//! Command-line flags are applied on top by the binary.

use crate::error::{RcalcError, Result};
use crate::render::ThemeName;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Input polling interval used when nothing else is configured.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// User-adjustable settings for an interactive session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Settings {
    pub theme: ThemeName,
    pub show_keypad: bool,
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeName::Default,
            show_keypad: true,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    fn validate(self) -> Result<Self> {
        if self.poll_interval_ms == 0 {
            return Err(RcalcError::config("poll_interval_ms must be greater than zero"));
        }
        Ok(self)
    }

    /// Location of the per-user config file.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rcalc").join("config.toml"))
    }

    #[cfg(not(feature = "config"))]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Parse settings from TOML text.
    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|err| RcalcError::config(err.to_string()))?;
        settings.validate()
    }

    /// Load settings from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    #[cfg(feature = "config")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(RcalcError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .map_err(|err| RcalcError::io(format!("reading {}", path.display()), err))?;
        let settings = Self::from_toml_str(&text)?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    #[cfg(not(feature = "config"))]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Err(RcalcError::config(format!(
                "cannot read {}: built without the `config` feature",
                path.display()
            ))),
            None => Self::default().validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeName::Default);
        assert!(settings.show_keypad);
        assert_eq!(settings.poll_interval(), Duration::from_millis(50));
    }

    #[cfg(feature = "config")]
    mod toml_file {
        use super::super::*;
        use std::io::Write;

        #[test]
        fn test_parses_partial_file() {
            let settings = Settings::from_toml_str("theme = \"monochrome\"").unwrap();
            assert_eq!(settings.theme, ThemeName::Monochrome);
            assert!(settings.show_keypad);
        }

        #[test]
        fn test_accepts_both_high_contrast_spellings() {
            for text in ["theme = \"high-contrast\"", "theme = \"high_contrast\""] {
                let settings = Settings::from_toml_str(text).unwrap();
                assert_eq!(settings.theme, ThemeName::HighContrast);
            }
        }

        #[test]
        fn test_rejects_unknown_keys_and_zero_interval() {
            assert!(matches!(
                Settings::from_toml_str("colour = \"red\""),
                Err(RcalcError::ConfigError { .. })
            ));
            assert!(matches!(
                Settings::from_toml_str("poll_interval_ms = 0"),
                Err(RcalcError::ConfigError { .. })
            ));
        }

        #[test]
        fn test_loads_explicit_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "show_keypad = false\npoll_interval_ms = 20").unwrap();

            let settings = Settings::load(Some(file.path())).unwrap();
            assert!(!settings.show_keypad);
            assert_eq!(settings.poll_interval_ms, 20);
        }

        #[test]
        fn test_missing_explicit_file_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            let missing = dir.path().join("nope.toml");
            assert!(matches!(
                Settings::load(Some(&missing)),
                Err(RcalcError::ConfigError { .. })
            ));
        }
    }
}
