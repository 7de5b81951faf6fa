//! Terminal implementations of the host capabilities

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use tarozi_app::config::Config;
use tarozi_app::{AlarmDevice, ReloadFacility, StartOutcome};
use tracing::warn;

/// Rings the terminal bell once when the alarm starts.
///
/// Without a terminal on stderr there is nobody to hear it, so the start
/// is reported as blocked.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AlarmDevice for TerminalBell {
    fn try_start(&mut self) -> StartOutcome {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return StartOutcome::Blocked;
        }
        if write!(stderr, "\x07").and_then(|_| stderr.flush()).is_err() {
            return StartOutcome::Blocked;
        }
        StartOutcome::Started
    }

    fn stop(&mut self) {}
}

/// Re-reads the configuration file when the session restarts
#[derive(Debug, Clone)]
pub struct ConfigReloader {
    path: Option<PathBuf>,
    config: Config,
}

impl ConfigReloader {
    pub fn new(path: Option<PathBuf>, config: Config) -> Self {
        Self { path, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ReloadFacility for ConfigReloader {
    fn reload(&mut self) {
        let Some(ref path) = self.path else {
            return;
        };
        match Config::load_from(path) {
            Ok(config) => self.config = config,
            Err(e) => warn!("keeping previous configuration: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarozi_types::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_reloader_picks_up_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut reloader = ConfigReloader::new(Some(path.clone()), Config::default());

        let changed = Config {
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        changed.save_to(&path).unwrap();
        reloader.reload();
        assert_eq!(reloader.config().output_format, OutputFormat::Json);
    }

    #[test]
    fn test_reloader_keeps_config_on_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let mut reloader = ConfigReloader::new(Some(path), Config::default());
        reloader.reload();
        assert_eq!(reloader.config(), &Config::default());
    }
}
