// File: src/config.rs
// Purpose: Router configuration parsing from twoway.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "twoway.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,
}

/// How paths are split into segments and joined back
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    /// Segment separator (default: "/")
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether formatted paths start with the separator and parsed paths
    /// must (default: false)
    #[serde(default = "default_false")]
    pub leading_separator: bool,
}

// Default values
fn default_separator() -> String {
    "/".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            leading_separator: false,
        }
    }
}

impl RouterConfig {
    /// Config with a leading separator, e.g. `/users/1`
    pub fn with_leading_separator(mut self, leading: bool) -> Self {
        self.leading_separator = leading;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // If file is empty, return default config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.router.validate()?;

        Ok(config)
    }

    /// Load configuration from default path (./twoway.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        config.router.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.router.separator, "/");
        assert!(!config.router.leading_separator);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("  \n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [router]
            leading_separator = true
        "#,
        )
        .unwrap();
        assert_eq!(config.router.separator, "/");
        assert!(config.router.leading_separator);
    }

    #[test]
    fn test_custom_separator() {
        let config = Config::from_toml(
            r#"
            [router]
            separator = "."
        "#,
        )
        .unwrap();
        assert_eq!(config.router.separator, ".");
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = Config::from_toml(
            r#"
            [router]
            separator = ""
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptySeparator));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = Config::from_toml("[router\nseparator = 1").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/twoway.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("twoway-config-{}.toml", std::process::id()));
        fs::write(&path, "[router]\nseparator = \"::\"\nleading_separator = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.router, RouterConfig::default().with_separator("::").with_leading_separator(true));
    }

    #[test]
    fn test_load_reports_file_path_on_parse_error() {
        let path = std::env::temp_dir().join(format!("twoway-bad-{}.toml", std::process::id()));
        fs::write(&path, "router = 3").unwrap();

        let err = Config::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        match err {
            Error::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
