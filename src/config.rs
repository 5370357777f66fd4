//! Configuration module for the scanner
//!
//! Supports loading configuration from a TOML file. Every field has a
//! default matching the classic scan window, so the file is optional.

use serde::Deserialize;
use std::path::Path;

use crate::grid::Bounds;

/// Scanner configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    /// Iteration budget per point (default: 1000)
    #[serde(default = "default_max_iter")]
    pub max_iter: u32,

    /// Left edge of the scan window (default: -2.0)
    #[serde(default = "default_xmin")]
    pub xmin: f64,

    /// Right edge of the scan window (default: 1.0)
    #[serde(default = "default_xmax")]
    pub xmax: f64,

    /// Bottom edge of the scan window (default: -1.5)
    #[serde(default = "default_ymin")]
    pub ymin: f64,

    /// Top edge of the scan window (default: 1.5)
    #[serde(default = "default_ymax")]
    pub ymax: f64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level filter (default: "mandelgrid=info")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_max_iter() -> u32 {
    1000
}

fn default_xmin() -> f64 {
    -2.0
}

fn default_xmax() -> f64 {
    1.0
}

fn default_ymin() -> f64 {
    -1.5
}

fn default_ymax() -> f64 {
    1.5
}

fn default_log_level() -> String {
    "mandelgrid=info".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            xmin: default_xmin(),
            xmax: default_xmax(),
            ymin: default_ymin(),
            ymax: default_ymax(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ScanConfig {
    /// The scan window as grid bounds
    pub fn bounds(&self) -> Bounds {
        Bounds {
            xmin: self.xmin,
            xmax: self.xmax,
            ymin: self.ymin,
            ymax: self.ymax,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    ReadError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, err) => {
                write!(f, "Failed to read config file '{}': {}", path, err)
            }
            ConfigError::ParseError(path, err) => {
                write!(f, "Failed to parse config file '{}': {}", path, err)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
