//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use giftmatch_engine::EngineConfig;
use giftmatch_gatekeeper::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Draft validation rules
    #[serde(default)]
    pub validation: ValidationSettings,

    /// Matching engine tuning
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Validation rules applied to exchange files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Name prefixes participants may not use
    #[serde(default = "default_reserved_prefixes")]
    pub reserved_prefixes: Vec<String>,

    /// Treat names differing only in case as duplicates
    #[serde(default = "default_true")]
    pub case_insensitive_names: bool,

    /// Minimum number of participants
    #[serde(default = "default_min_participants")]
    pub min_participants: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".giftmatch").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.engine.validate().map_err(|e| {
            CliError::Config(format!("Invalid [engine] section in {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Gatekeeper rules for this configuration.
    pub fn validation_config(&self, strict: bool) -> ValidationConfig {
        if strict {
            return ValidationConfig::strict();
        }
        ValidationConfig {
            reserved_prefixes: self.validation.reserved_prefixes.clone(),
            case_insensitive_names: self.validation.case_insensitive_names,
            min_participants: self.validation.min_participants,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            reserved_prefixes: default_reserved_prefixes(),
            case_insensitive_names: true,
            min_participants: default_min_participants(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_reserved_prefixes() -> Vec<String> {
    ValidationConfig::default().reserved_prefixes
}

fn default_min_participants() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.engine.retries_per_round, 100);
        assert_eq!(config.validation.reserved_prefixes, vec!["_"]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            format = "json"

            [engine]
            retries_per_round = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.engine.retries_per_round, 40);
        assert_eq!(config.engine.escalation_rounds, 5);
        assert!(config.validation.case_insensitive_names);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.color = false;
        config.engine.retries_per_round = 7;
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert!(!loaded.settings.color);
        assert_eq!(loaded.engine.retries_per_round, 7);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_engine_section_is_rejected() {
        let dir = TempDir::new().unwrap();
        let cases = [
            "retries_per_round = 0",
            "escalation_rounds = 0",
            "escalation_factor = 0.0",
        ];

        for (i, line) in cases.iter().enumerate() {
            let path = dir.path().join(format!("config-{}.toml", i));
            fs::write(&path, format!("[engine]\n{}\n", line)).unwrap();

            let result = Config::load(Some(&path));
            assert!(
                matches!(result, Err(CliError::Config(ref msg)) if msg.contains("[engine]")),
                "{} was accepted",
                line
            );
        }
    }

    #[test]
    fn test_validation_config() {
        let mut config = Config::default();
        config.validation.min_participants = 4;

        assert_eq!(config.validation_config(false).min_participants, 4);
        assert_eq!(config.validation_config(true).min_participants, 3);
    }
}
