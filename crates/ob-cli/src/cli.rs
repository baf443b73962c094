//! CLI configuration and settings management

use crate::{CliError, Result};
use ob_lang::DEFAULT_TARGET_TRIPLE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "obc.toml";
pub const TARGET_TRIPLE_ENV: &str = "OBC_TARGET_TRIPLE";

/// CLI configuration loaded from config files and environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub target: TargetConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Written as the `target triple` line of the IR
    pub triple: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            triple: DEFAULT_TARGET_TRIPLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub template: DiagnosticTemplate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticTemplate {
    #[default]
    Pretty,
    Plain,
}

impl CliConfig {
    /// Load configuration from `config_path`, or from the standard locations,
    /// falling back to defaults. `OBC_TARGET_TRIPLE` wins over any file.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::standard_locations().into_iter().find(|p| p.is_file()) {
                Some(path) => Self::load_from_file(&path)?,
                None => Self::default(),
            },
        };

        if let Ok(triple) = std::env::var(TARGET_TRIPLE_ENV) {
            if !triple.trim().is_empty() {
                config.target.triple = triple.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Working directory first, then the user config directory.
    pub fn standard_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("obc").join("config.toml"));
        }
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.target.triple, DEFAULT_TARGET_TRIPLE);
        assert_eq!(config.diagnostics.template, DiagnosticTemplate::Pretty);
    }

    #[test]
    fn partial_file_overrides_only_its_keys() {
        let config = CliConfig::parse(
            r#"
[target]
triple = "riscv64-unknown-linux-gnu"
"#,
        )
        .unwrap();
        assert_eq!(config.target.triple, "riscv64-unknown-linux-gnu");
        assert_eq!(config.diagnostics.template, DiagnosticTemplate::Pretty);

        let config = CliConfig::parse("[diagnostics]\ntemplate = \"plain\"\n").unwrap();
        assert_eq!(config.diagnostics.template, DiagnosticTemplate::Plain);
        assert_eq!(config.target.triple, DEFAULT_TARGET_TRIPLE);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        assert!(matches!(
            CliConfig::parse("[target\n"),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            CliConfig::parse("[diagnostics]\ntemplate = \"loud\"\n"),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/obc.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/obc.toml"));
    }
}
