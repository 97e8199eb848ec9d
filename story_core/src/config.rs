//! Display and save settings.
//!
//! Read from an optional TOML file:
//!
//! ```toml
//! [display]
//! indent = 2
//! color = true
//!
//! [save]
//! pretty = true
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::ConfigError;

/// Largest accepted `display.indent`.
pub const MAX_INDENT: usize = 16;

/// All settings. Missing sections and keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub save: SaveConfig,
}

/// How trees are rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Spaces per level of depth.
    pub indent: usize,
    /// Whether front-ends may color their output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            color: true,
        }
    }
}

/// How trees are written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Pretty-print with two-space indentation instead of compact JSON.
    pub pretty: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.display.indent > MAX_INDENT {
            return Err(ConfigError::IndentTooLarge(config.display.indent));
        }
        Ok(config)
    }

    /// Read settings from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("read settings from {}", path.display());
        Ok(config)
    }

    /// Read settings from a file if it exists, otherwise use the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display.indent, 2);
        assert!(config.display.color);
        assert!(config.save.pretty);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("[display]\nindent = 4\n").unwrap();
        assert_eq!(config.display.indent, 4);
        assert!(config.display.color);
        assert!(config.save.pretty);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = Config::from_toml_str("[save]\npretty = \"yes\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_oversized_indent_is_rejected() {
        let result = Config::from_toml_str("[display]\nindent = 1000000000000\n");
        assert!(matches!(result, Err(ConfigError::IndentTooLarge(1_000_000_000_000))));

        let config = Config::from_toml_str("[display]\nindent = 16\n").unwrap();
        assert_eq!(config.display.indent, MAX_INDENT);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join("routebook.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
