pub mod toml_config;

use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::Validate;
use serde::Deserialize;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "clinic-registry")]
#[command(about = "In-memory patient registry for a small clinic")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "TOML file overriding the validation limits")]
    pub config: Option<PathBuf>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Limits from `--config` when given, otherwise the built-in defaults.
    pub fn load_limits(&self) -> Result<Limits> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading limits from {}", path.display());
                Ok(toml_config::TomlConfig::from_file(path)?.limits)
            }
            None => Ok(Limits::default()),
        }
    }
}

/// Validation bounds applied to every registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub name_max_len: usize,
    pub phone_max_len: usize,
    pub age_min: i64,
    pub age_max: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            name_max_len: 100,
            phone_max_len: 30,
            age_min: 0,
            age_max: 130,
        }
    }
}

impl Validate for Limits {
    fn validate(&self) -> Result<()> {
        if self.name_max_len == 0 || self.phone_max_len == 0 {
            return Err(RegistryError::ConfigError {
                message: "name_max_len and phone_max_len must be at least 1".to_string(),
            });
        }
        // ages are stored as u8
        if self.age_min < 0 || self.age_max > i64::from(u8::MAX) {
            return Err(RegistryError::ConfigError {
                message: format!("age bounds must lie within 0..={}", u8::MAX),
            });
        }
        if self.age_min > self.age_max {
            return Err(RegistryError::ConfigError {
                message: format!(
                    "age_min ({}) is greater than age_max ({})",
                    self.age_min, self.age_max
                ),
            });
        }
        Ok(())
    }
}
