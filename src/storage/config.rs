//! Persisted application settings.
//!
//! A flat record of the last-used inputs and preferences, stored as TOML in
//! the platform data directory. Body values are kept in metric units whatever
//! unit system is selected.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::metrics::calculator::{BodyMeasurements, Gender};
use crate::metrics::thresholds::round_to;
pub use crate::metrics::units::Units;

/// Result display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Height and weight only, simple BMI result
    #[default]
    Basic,
    /// All inputs, four detailed results
    Advanced,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Basic => write!(f, "BMI (Basic)"),
            Mode::Advanced => write!(f, "BMI (Advanced)"),
        }
    }
}

/// Settings record restored on startup and written on exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Selected result mode
    pub mode: Mode,
    /// Selected unit system
    pub units: Units,
    /// Reset body values to defaults on exit
    pub forget: bool,
    /// Height in centimetres
    pub height: f64,
    /// Body mass in kilograms
    pub mass: f64,
    /// Waist circumference in centimetres
    pub waist: f64,
    /// Hip circumference in centimetres
    pub hip: f64,
    /// Age in years
    pub age: f64,
    /// Gender selection
    pub gender: Gender,
}

impl Default for AppSettings {
    fn default() -> Self {
        let body = BodyMeasurements::default();

        Self {
            mode: Mode::Basic,
            units: Units::Metric,
            forget: false,
            height: body.height_cm,
            mass: body.mass_kg,
            waist: body.waist_cm,
            hip: body.hip_cm,
            age: body.age_years,
            gender: body.gender,
        }
    }
}

impl AppSettings {
    /// Stored body values as a measurement snapshot.
    pub fn measurements(&self) -> BodyMeasurements {
        BodyMeasurements {
            height_cm: self.height,
            mass_kg: self.mass,
            waist_cm: self.waist,
            hip_cm: self.hip,
            age_years: self.age,
            gender: self.gender,
        }
    }

    /// Copy a measurement snapshot into the record.
    pub fn set_measurements(&mut self, measurements: &BodyMeasurements) {
        self.height = measurements.height_cm;
        self.mass = measurements.mass_kg;
        self.waist = measurements.waist_cm;
        self.hip = measurements.hip_cm;
        self.age = measurements.age_years;
        self.gender = measurements.gender;
    }

    /// Normalize the record for writing on shutdown.
    ///
    /// Distances and mass are stored as whole metric numbers. With `forget`
    /// set, body values and gender go back to defaults while mode, units and
    /// the flag itself are kept.
    pub fn prepare_for_exit(&mut self) {
        self.height = round_to(self.height, 0);
        self.mass = round_to(self.mass, 0);
        self.waist = round_to(self.waist, 0);
        self.hip = round_to(self.hip, 0);

        if self.forget {
            tracing::info!("Forgetting body values on exit");
            let defaults = Self::default();
            self.set_measurements(&defaults.measurements());
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("io.github", "rustbmi", "RustBMI")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the settings file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load settings from a file, falling back to defaults when it does not exist.
pub fn load_settings(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No settings file, using defaults");
        return Ok(AppSettings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save settings to a file.
pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(settings).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Saved settings");
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
