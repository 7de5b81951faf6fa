//! Configuration management for tarozi
//!
//! Config stored at: ~/.config/tarozi/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tarozi_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether the alarm relay starts switched on
    #[serde(default = "default_true")]
    pub alarm_on_start: bool,

    /// Marker written before a highlighted match in terminal output
    #[serde(default = "default_highlight_open")]
    pub highlight_open: String,

    /// Marker written after a highlighted match in terminal output
    #[serde(default = "default_highlight_close")]
    pub highlight_close: String,

    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_true() -> bool {
    true
}

fn default_highlight_open() -> String {
    "[".to_string()
}

fn default_highlight_close() -> String {
    "]".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            alarm_on_start: true,
            highlight_open: default_highlight_open(),
            highlight_close: default_highlight_close(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tarozi");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tarozi Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Alarm on start: {}",
            if self.alarm_on_start { "on" } else { "off" }
        )?;
        writeln!(
            f,
            "Highlight:      {}match{}",
            self.highlight_open, self.highlight_close
        )?;
        writeln!(f, "Log filter:     {}", self.log_filter)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.alarm_on_start);
        assert_eq!(config.highlight_open, "[");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            output_format: OutputFormat::Json,
            alarm_on_start: false,
            highlight_open: "<<".to_string(),
            highlight_close: ">>".to_string(),
            log_filter: "debug".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = \"json\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.alarm_on_start);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_broken_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "alarm_on_start = maybe").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, tarozi_types::Error::Config(ConfigError::ParseError(_))));
    }
}
