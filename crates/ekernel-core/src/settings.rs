//! Tool settings
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! strict = false
//! ignore = ["CC_VERSION"]
//! ```
//!
//! A missing file yields [`Settings::default`]; command-line flags are
//! applied on top by the caller.

use crate::diff::DiffOptions;
use crate::errors::{KconfigError, Result};
use crate::kconfig::ParseMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "ekernel.toml";

/// Option name fragments that only track the toolchain, not the kernel.
pub const DEFAULT_IGNORE: &[&str] = &["CC_VERSION"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Reject unrecognized config lines instead of skipping them
    pub strict: bool,
    /// Option name substrings excluded from diffs
    pub ignore: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: false,
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// * `Config` - invalid TOML or unknown keys
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| KconfigError::Config {
            message: e.to_string(),
        })
    }

    /// Load settings from `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// * `Config` - the file exists but is unreadable or invalid
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| KconfigError::Config {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            ignore: self.ignore.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_ignore_compiler_version() {
        let settings = Settings::default();
        assert!(!settings.strict);
        assert!(settings
            .diff_options()
            .is_ignored("CONFIG_CC_VERSION_TEXT"));
        assert_eq!(settings.parse_mode(), ParseMode::Lenient);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str("strict = true\n").unwrap();
        assert_eq!(settings.parse_mode(), ParseMode::Strict);
        assert_eq!(settings.ignore, vec!["CC_VERSION".to_string()]);
    }

    #[test]
    fn test_empty_ignore_list() {
        let settings = Settings::from_toml_str("ignore = []\n").unwrap();
        assert!(!settings.diff_options().is_ignored("CONFIG_CC_VERSION_TEXT"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml_str("jobs = 4\n").unwrap_err();
        assert!(matches!(err, KconfigError::Config { .. }));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join(DEFAULT_SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "strict = true\nignore = [\"LOCALVERSION\"]\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert!(settings.strict);
        assert!(settings.diff_options().is_ignored("CONFIG_LOCALVERSION_AUTO"));
    }
}
