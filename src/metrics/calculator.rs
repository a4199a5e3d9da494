//! Body metrics calculator.
//!
//! Derives BMI, waist-to-height ratio, waist-to-hip ratio and Body Roundness
//! Index from measurements already normalized to metric units. Divisors are
//! checked up front: a zero, negative or non-finite height or hip is a
//! [`MetricsError::DomainError`] rather than an infinite result.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::metrics::error::{MetricsError, MetricsResult};

/// BRI intercept.
const BRI_INTERCEPT: f64 = 364.2;
/// BRI eccentricity coefficient.
const BRI_COEFFICIENT: f64 = 365.5;

/// Gender selection, used only to pick waist-to-hip thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Population average thresholds
    #[default]
    Average,
    /// Female thresholds
    Female,
    /// Male thresholds
    Male,
}

impl Gender {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Average => "Average",
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A snapshot of body measurements, always in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Height in centimetres
    pub height_cm: f64,
    /// Body mass in kilograms
    pub mass_kg: f64,
    /// Waist circumference in centimetres
    pub waist_cm: f64,
    /// Hip circumference in centimetres
    pub hip_cm: f64,
    /// Age in years
    pub age_years: f64,
    /// Gender selection
    pub gender: Gender,
}

impl Default for BodyMeasurements {
    fn default() -> Self {
        Self {
            height_cm: 180.0,
            mass_kg: 80.0,
            waist_cm: 90.0,
            hip_cm: 100.0,
            age_years: 30.0,
            gender: Gender::Average,
        }
    }
}

impl BodyMeasurements {
    /// Check the calculator's preconditions.
    pub fn validate(&self) -> MetricsResult<()> {
        require_positive("height_cm", self.height_cm)?;
        require_positive("hip_cm", self.hip_cm)?;
        require_non_negative("mass_kg", self.mass_kg)?;
        require_non_negative("waist_cm", self.waist_cm)?;
        require_non_negative("age_years", self.age_years)?;
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> MetricsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MetricsError::DomainError { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> MetricsResult<()> {
    if !value.is_finite() {
        return Err(MetricsError::InvalidInput(format!(
            "{field} must be finite, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "{field} cannot be negative, got {value}"
        )));
    }
    Ok(())
}

/// Body Mass Index: mass over squared height in metres.
pub fn bmi(height_cm: f64, mass_kg: f64) -> MetricsResult<f64> {
    require_positive("height_cm", height_cm)?;
    let height_m = height_cm / 100.0;
    Ok(mass_kg / (height_m * height_m))
}

/// Waist-to-height ratio.
pub fn waist_to_height(waist_cm: f64, height_cm: f64) -> MetricsResult<f64> {
    require_positive("height_cm", height_cm)?;
    Ok(waist_cm / height_cm)
}

/// Waist-to-hip ratio.
pub fn waist_to_hip(waist_cm: f64, hip_cm: f64) -> MetricsResult<f64> {
    require_positive("hip_cm", hip_cm)?;
    Ok(waist_cm / hip_cm)
}

/// Body Roundness Index.
///
/// BRI = 364.2 − 365.5 × √(1 − (waist / (π × height))²)
///
/// When the waist exceeds the circumference implied by the height the radicand
/// goes negative; that case yields exactly 0.0 instead of NaN.
pub fn body_roundness_index(waist_cm: f64, height_cm: f64) -> MetricsResult<f64> {
    require_positive("height_cm", height_cm)?;
    let radicand = bri_radicand(waist_cm, height_cm);
    if radicand < 0.0 {
        tracing::debug!(waist_cm, height_cm, "negative BRI radicand, using 0");
        return Ok(0.0);
    }
    Ok(BRI_INTERCEPT - BRI_COEFFICIENT * radicand.sqrt())
}

fn bri_radicand(waist_cm: f64, height_cm: f64) -> f64 {
    let eccentricity = waist_cm / (PI * height_cm);
    1.0 - eccentricity * eccentricity
}

/// Whether the BRI for these measurements is the 0 fallback rather than a
/// computed index.
pub fn bri_is_undefined(waist_cm: f64, height_cm: f64) -> bool {
    bri_radicand(waist_cm, height_cm) < 0.0
}

/// The four derived metrics, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body Mass Index
    pub bmi: f64,
    /// Waist-to-height ratio
    pub waist_to_height: f64,
    /// Waist-to-hip ratio
    pub waist_to_hip: f64,
    /// Body Roundness Index
    pub bri: f64,
}

impl BodyMetrics {
    /// Derive every metric from one measurement snapshot.
    pub fn calculate(measurements: &BodyMeasurements) -> MetricsResult<Self> {
        measurements.validate()?;

        let metrics = Self {
            bmi: bmi(measurements.height_cm, measurements.mass_kg)?,
            waist_to_height: waist_to_height(measurements.waist_cm, measurements.height_cm)?,
            waist_to_hip: waist_to_hip(measurements.waist_cm, measurements.hip_cm)?,
            bri: body_roundness_index(measurements.waist_cm, measurements.height_cm)?,
        };

        tracing::debug!(?metrics, "calculated body metrics");
        Ok(metrics)
    }
}
