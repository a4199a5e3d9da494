//! Metric/imperial unit conversion.
//!
//! Every conversion is a single multiplicative factor. Nothing here rounds;
//! callers round to display precision before or after converting.

use serde::{Deserialize, Serialize};

/// Centimetres per inch.
pub const CM_PER_INCH: f64 = 2.54;
/// Inches per centimetre.
pub const INCHES_PER_CM: f64 = 0.393_700_8;
/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.204_623;
/// Kilograms per pound.
pub const KG_PER_LB: f64 = 0.453_592_4;

/// Convert inches to centimetres.
pub fn in_to_cm(value: f64) -> f64 {
    value * CM_PER_INCH
}

/// Convert centimetres to inches.
pub fn cm_to_in(value: f64) -> f64 {
    value * INCHES_PER_CM
}

/// Convert kilograms to pounds.
pub fn kg_to_lb(value: f64) -> f64 {
    value * LB_PER_KG
}

/// Convert pounds to kilograms.
pub fn lb_to_kg(value: f64) -> f64 {
    value * KG_PER_LB
}

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric units (cm, kg)
    #[default]
    Metric,
    /// Imperial units (in, lb)
    Imperial,
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Metric => write!(f, "Metric"),
            Units::Imperial => write!(f, "Imperial"),
        }
    }
}

impl Units {
    /// Convert a distance expressed in these units to centimetres.
    pub fn distance_to_metric(&self, value: f64) -> f64 {
        match self {
            Units::Metric => value,
            Units::Imperial => in_to_cm(value),
        }
    }

    /// Convert a mass expressed in these units to kilograms.
    pub fn mass_to_metric(&self, value: f64) -> f64 {
        match self {
            Units::Metric => value,
            Units::Imperial => lb_to_kg(value),
        }
    }

    /// Convert a distance from `self` into `target` units.
    pub fn convert_distance(&self, value: f64, target: Units) -> f64 {
        match (self, target) {
            (Units::Metric, Units::Imperial) => cm_to_in(value),
            (Units::Imperial, Units::Metric) => in_to_cm(value),
            _ => value,
        }
    }

    /// Convert a mass from `self` into `target` units.
    pub fn convert_mass(&self, value: f64, target: Units) -> f64 {
        match (self, target) {
            (Units::Metric, Units::Imperial) => kg_to_lb(value),
            (Units::Imperial, Units::Metric) => lb_to_kg(value),
            _ => value,
        }
    }

    /// Label for distance inputs.
    pub fn distance_label(&self) -> &'static str {
        match self {
            Units::Metric => "Centimetres",
            Units::Imperial => "Inches",
        }
    }

    /// Label for mass inputs.
    pub fn mass_label(&self) -> &'static str {
        match self {
            Units::Metric => "Kilograms",
            Units::Imperial => "Pounds",
        }
    }
}
