use crate::config::Limits;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Deserialize;
use std::path::Path;

/// Optional configuration file. Every key may be omitted.
///
/// ```toml
/// [limits]
/// name_max_len = 80
/// age_max = 120
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub limits: Limits,
}

impl TomlConfig {
    /// Reads, parses and validates a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.limits.validate()
    }
}
