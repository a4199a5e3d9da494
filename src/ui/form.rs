//! Input form state.
//!
//! Holds what the user typed, in the active unit system, with the same
//! limits and precision a spin button would enforce. The metric snapshot fed
//! to the calculator is rebuilt from this state on every change.

use serde::Serialize;

use crate::metrics::calculator::{BodyMeasurements, Gender};
use crate::metrics::thresholds::round_to;
use crate::metrics::units::Units;
use crate::storage::config::{AppSettings, Mode};

/// Tallest recorded human, in centimetres.
const TALLEST_HEIGHT_CM: f64 = 267.0;
/// Heaviest recorded human, in kilograms.
const HEAVIEST_MASS_KG: f64 = 650.0;

/// Form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Height,
    Weight,
    Waist,
    Hip,
    Age,
}

impl InputField {
    /// Inputs shown in basic mode.
    pub const BASIC: [InputField; 2] = [InputField::Height, InputField::Weight];
    /// Inputs added in advanced mode.
    pub const ADVANCED: [InputField; 3] = [InputField::Age, InputField::Waist, InputField::Hip];
}

/// What a row measures, which decides how it converts between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Distance,
    Mass,
    Years,
}

/// A numeric input with inclusive limits, like a spin button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinRow {
    /// Row title
    pub title: &'static str,
    /// Measured quantity
    pub quantity: Quantity,
    /// Current value in the active unit system
    value: f64,
    /// Lower limit
    lower: f64,
    /// Upper limit
    upper: f64,
    /// Displayed decimal places
    pub digits: u32,
}

impl SpinRow {
    fn new(title: &'static str, quantity: Quantity, lower: f64, upper: f64, digits: u32) -> Self {
        Self {
            title,
            quantity,
            value: lower,
            lower,
            upper,
            digits,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current limits as (lower, upper).
    pub fn limits(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Set the value, clamped into the limits.
    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(self.lower, self.upper);
    }

    /// Subtitle naming the unit.
    pub fn subtitle(&self, units: Units) -> &'static str {
        match self.quantity {
            Quantity::Distance => units.distance_label(),
            Quantity::Mass => units.mass_label(),
            Quantity::Years => "Years",
        }
    }

    /// Value formatted at the row's precision.
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.digits as usize, self.value)
    }

    /// Re-express limits and value through a conversion.
    fn convert(&mut self, convert: impl Fn(f64) -> f64) {
        self.lower = round_to(convert(self.lower), 1);
        self.upper = round_to(convert(self.upper), 1);
        self.set_value(convert(round_to(self.value, 1)));
    }
}

/// The whole input form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputForm {
    units: Units,
    /// Selected result mode
    pub mode: Mode,
    height: SpinRow,
    weight: SpinRow,
    waist: SpinRow,
    hip: SpinRow,
    age: SpinRow,
    /// Gender selection
    pub gender: Gender,
}

impl Default for InputForm {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

impl InputForm {
    /// Build the form from stored settings, switching units if needed.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut form = Self {
            units: Units::Metric,
            mode: settings.mode,
            height: SpinRow::new("Height", Quantity::Distance, 50.0, 267.0, 1),
            weight: SpinRow::new("Weight", Quantity::Mass, 10.0, 650.0, 1),
            waist: SpinRow::new("Waist", Quantity::Distance, 25.0, 650.0, 1),
            hip: SpinRow::new("Hip", Quantity::Distance, 25.0, 650.0, 1),
            age: SpinRow::new("Age", Quantity::Years, 18.0, 123.0, 0),
            gender: settings.gender,
        };

        form.height.set_value(settings.height);
        form.weight.set_value(settings.mass);
        form.waist.set_value(settings.waist);
        form.hip.set_value(settings.hip);
        form.age.set_value(settings.age);

        form.set_units(settings.units);
        form
    }

    /// Active unit system.
    pub fn units(&self) -> Units {
        self.units
    }

    /// Switch unit system, converting every distance and mass row.
    pub fn set_units(&mut self, target: Units) {
        if target == self.units {
            return;
        }

        let from = self.units;
        for row in [&mut self.height, &mut self.waist, &mut self.hip] {
            row.convert(|v| from.convert_distance(v, target));
        }
        self.weight.convert(|v| from.convert_mass(v, target));

        tracing::debug!(%from, %target, "Converted form units");
        self.units = target;
    }

    /// Look up a row.
    pub fn row(&self, field: InputField) -> &SpinRow {
        match field {
            InputField::Height => &self.height,
            InputField::Weight => &self.weight,
            InputField::Waist => &self.waist,
            InputField::Hip => &self.hip,
            InputField::Age => &self.age,
        }
    }

    /// Set a row's value, in the active unit system.
    pub fn set(&mut self, field: InputField, value: f64) {
        let row = match field {
            InputField::Height => &mut self.height,
            InputField::Weight => &mut self.weight,
            InputField::Waist => &mut self.waist,
            InputField::Hip => &mut self.hip,
            InputField::Age => &mut self.age,
        };
        row.set_value(value);
    }

    /// Rows shown in the current mode.
    pub fn visible_fields(&self) -> Vec<InputField> {
        match self.mode {
            Mode::Basic => InputField::BASIC.to_vec(),
            Mode::Advanced => InputField::BASIC
                .iter()
                .chain(InputField::ADVANCED.iter())
                .copied()
                .collect(),
        }
    }

    /// Rebuild the metric snapshot from the current inputs.
    pub fn measurements(&self) -> BodyMeasurements {
        BodyMeasurements {
            height_cm: self.units.distance_to_metric(self.height.value),
            mass_kg: self.units.mass_to_metric(self.weight.value),
            waist_cm: self.units.distance_to_metric(self.waist.value),
            hip_cm: self.units.distance_to_metric(self.hip.value),
            age_years: self.age.value,
            gender: self.gender,
        }
    }

    /// Title shown for a row, which honours record-holding values.
    pub fn title(&self, field: InputField) -> &'static str {
        let measurements = self.measurements();
        match field {
            InputField::Height if measurements.height_cm == TALLEST_HEIGHT_CM => "Robert Wadlow",
            InputField::Weight if measurements.mass_kg == HEAVIEST_MASS_KG => "Jon Brower Minnoch",
            _ => self.row(field).title,
        }
    }

    /// Subtitle shown for a row.
    pub fn subtitle(&self, field: InputField) -> &'static str {
        self.row(field).subtitle(self.units)
    }

    /// Write the form back into a settings record.
    pub fn store(&self, settings: &mut AppSettings) {
        settings.mode = self.mode;
        settings.units = self.units;
        settings.set_measurements(&self.measurements());
    }
}
