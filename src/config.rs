//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_rules::Mark;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name shown in the result line when the human wins.
    human_name: String,

    /// Name shown in the result line when the computer wins.
    computer_name: String,

    /// Mark the human plays.
    human_mark: Mark,

    /// Mark the computer plays.
    computer_mark: Mark,

    /// Pause before the computer moves, in milliseconds.
    thinking_delay_ms: u64,

    /// Seed for the computer's move selection; entropy when absent.
    seed: Option<u64>,

    /// File the TUI writes its logs to.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: "player".to_string(),
            computer_name: "computer".to_string(),
            human_mark: Mark::O,
            computer_mark: Mark::X,
            thinking_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise the defaults.
    #[instrument]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Checks that the two players are distinguishable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer_mark != self.human_mark.opponent() {
            return Err(ConfigError::new(format!(
                "Both players cannot use mark {}",
                self.human_mark
            )));
        }
        if self.human_name.trim().is_empty() || self.computer_name.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        Ok(())
    }

    /// Overrides the computer's thinking delay.
    pub fn with_thinking_delay_ms(mut self, delay_ms: u64) -> Self {
        self.thinking_delay_ms = delay_ms;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.human_name(), "player");
        assert_eq!(config.computer_name(), "computer");
        assert_eq!(*config.human_mark(), Mark::O);
        assert_eq!(*config.computer_mark(), Mark::X);
        assert_eq!(config.thinking_delay(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_name = \"HAL\"\nthinking_delay_ms = 50\nseed = 7").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.computer_name(), "HAL");
        assert_eq!(*config.thinking_delay_ms(), 50);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(config.human_name(), "player");
    }

    #[test]
    fn test_same_marks_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human_mark = \"X\"\ncomputer_mark = \"X\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("mark X"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thinking_delay_ms = \"soon\"").unwrap();
        assert!(GameConfig::from_file(file.path()).is_err());
    }
}
