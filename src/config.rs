//! Configuration management for rental-fleet
//!
//! Config stored at: ~/.config/rental-fleet/config.json

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of parking lots reported by the admin surface
pub const DEFAULT_PARKING_LOTS: u32 = 50;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fleet data file override (default: ./fleet.json)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Report output directory override (default: desktop)
    #[serde(default)]
    pub report_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Parking lot total reported after add/delete
    #[serde(default = "default_parking_lots")]
    pub parking_lots: u32,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_parking_lots() -> u32 {
    DEFAULT_PARKING_LOTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            report_dir: None,
            output_format: default_output_format(),
            parking_lots: default_parking_lots(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("config directory not available".to_string()))?
            .join("rental-fleet");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolve the fleet data file
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("fleet.json"))
    }

    /// Resolve the report output directory
    pub fn report_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.report_dir {
            return dir.clone();
        }
        dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rental Fleet Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Data file:      {}", self.data_file().display())?;
        writeln!(f, "Report dir:     {}", self.report_dir().display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Parking lots:   {}", self.parking_lots)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
