//! Configuration loading from exhibit.toml
//!
//! Exhibit configuration can be specified in an `exhibit.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory. CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exhibit configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExhibitConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive (e.g., "exhibit=info")
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "exhibit=info".to_string()
}

impl ExhibitConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("exhibit.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExhibitConfig::default();
        assert_eq!(config.output.format, "human");
        assert_eq!(config.log.filter, "exhibit=info");
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [output]
            format = "json"
        "#;

        let config: ExhibitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, "json");
        // Defaults should still apply
        assert_eq!(config.log.filter, "exhibit=info");
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: ExhibitConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, "human");
    }
}
