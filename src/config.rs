use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::targets::BrowserRegistry;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sweep: SweepConfig,
    pub browsers: BrowserConfig,
    pub report: ReportConfig,
    pub system: SystemConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Maximum recursion depth inside temp directories
    pub max_depth: usize,
    /// Remove directories left empty by the sweep
    pub remove_empty_dirs: bool,
    /// Additional temp directories to sweep
    pub extra_temp_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Browser ids whose caches are cleaned
    pub enabled: Vec<String>,
    /// Clean caches even while the browser is running
    pub force: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Write a report file after each cleanup
    pub enabled: bool,
    /// Report directory (default: home directory)
    pub directory: Option<PathBuf>,
    /// Report format: text, json
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Disk usage percentage that triggers a recommendation
    pub disk_warn_percent: u8,
    /// Memory usage percentage that triggers a recommendation
    pub memory_warn_percent: u8,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            remove_empty_dirs: true,
            extra_temp_dirs: vec![],
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: BrowserRegistry::new()
                .ids()
                .into_iter()
                .map(String::from)
                .collect(),
            force: false,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: None,
            format: "text".to_string(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            disk_warn_percent: 90,
            memory_warn_percent: 80,
        }
    }
}

impl Config {
    /// Default config file location: `<config dir>/temp-sweeper/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("temp-sweeper").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// if present, otherwise built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Check value ranges and names.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("disk_warn_percent", self.system.disk_warn_percent),
            ("memory_warn_percent", self.system.memory_warn_percent),
        ] {
            if value == 0 || value > 100 {
                return Err(
                    ConfigError::Invalid(format!("{} must be 1-100, got {}", name, value)).into(),
                );
            }
        }

        let registry = BrowserRegistry::new();
        for id in &self.browsers.enabled {
            if registry.get(id).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "unknown browser '{}' (valid: {})",
                    id,
                    registry.ids().join(", ")
                ))
                .into());
            }
        }

        if !matches!(self.report.format.as_str(), "text" | "json") {
            return Err(ConfigError::Invalid(format!(
                "report format must be 'text' or 'json', got '{}'",
                self.report.format
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sweep.max_depth, 3);
        assert!(config.sweep.remove_empty_dirs);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[sweep]"));
        assert!(toml_str.contains("[browsers]"));
    }

    #[test]
    fn default_browsers_cover_registry() {
        let config = BrowserConfig::default();
        assert!(config.enabled.contains(&"chrome".to_string()));
        assert!(config.enabled.contains(&"firefox".to_string()));
        assert!(!config.force);
    }

    #[test]
    fn rejects_unknown_browser() {
        let mut config = Config::default();
        config.browsers.enabled = vec!["netscape".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("netscape"));
    }

    #[test]
    fn rejects_zero_threshold() {
        let mut config = Config::default();
        config.system.memory_warn_percent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_report_format() {
        let mut config = Config::default();
        config.report.format = "pdf".to_string();
        assert!(config.validate().is_err());
    }
}
