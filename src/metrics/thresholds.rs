//! Threshold tables and classification of body metrics.
//!
//! Each displayed metric has an ascending table of (lower bound, label,
//! severity) entries. A value falls into the last entry whose lower bound it
//! reaches. Waist-to-height and waist-to-hip tables carry bounds derived from
//! age and gender, so tables are rebuilt for every classification.

use serde::{Deserialize, Serialize};

use crate::metrics::calculator::{BodyMeasurements, BodyMetrics, Gender};
use crate::metrics::error::MetricsResult;

/// Feedback severity, ordered from least to most concerning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational (below the healthy range)
    Info,
    /// Healthy range
    Success,
    /// Elevated
    Warning,
    /// High risk
    Error,
}

/// Metric being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricId {
    /// Body Mass Index
    Bmi,
    /// Waist-to-height ratio
    Whtr,
    /// Waist-to-hip ratio
    Whr,
    /// Body Roundness Index
    Bri,
}

impl MetricId {
    /// Short display title.
    pub fn title(&self) -> &'static str {
        match self {
            MetricId::Bmi => "BMI",
            MetricId::Whtr => "Waist / Height",
            MetricId::Whr => "Waist / Hip",
            MetricId::Bri => "BRI",
        }
    }

    /// Long name, used for tooltips.
    pub fn description(&self) -> &'static str {
        match self {
            MetricId::Bmi => "Body Mass Index",
            MetricId::Whtr => "Waist to height ratio",
            MetricId::Whr => "Waist to hip ratio",
            MetricId::Bri => "Body Roundness Index",
        }
    }

    /// Pick this metric's raw value out of a calculation.
    pub fn raw_value(&self, metrics: &BodyMetrics) -> f64 {
        match self {
            MetricId::Bmi => metrics.bmi,
            MetricId::Whtr => metrics.waist_to_height,
            MetricId::Whr => metrics.waist_to_hip,
            MetricId::Bri => metrics.bri,
        }
    }
}

/// One classification scale: a metric paired with a threshold table and a
/// display precision. BMI has two scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Five-bucket BMI shown as an integer
    SimpleBmi,
    /// Eight-bucket BMI with one decimal
    DetailedBmi,
    /// Waist-to-height with age-dependent bound
    WaistToHeight,
    /// Waist-to-hip with gender-dependent bounds
    WaistToHip,
    /// Body Roundness Index
    BodyRoundness,
}

impl Scale {
    /// Scales shown in advanced mode, in display order.
    pub const DETAILED: [Scale; 4] = [
        Scale::DetailedBmi,
        Scale::WaistToHeight,
        Scale::WaistToHip,
        Scale::BodyRoundness,
    ];

    /// Metric this scale classifies.
    pub fn metric(&self) -> MetricId {
        match self {
            Scale::SimpleBmi | Scale::DetailedBmi => MetricId::Bmi,
            Scale::WaistToHeight => MetricId::Whtr,
            Scale::WaistToHip => MetricId::Whr,
            Scale::BodyRoundness => MetricId::Bri,
        }
    }

    /// Number of decimal places displayed and classified against.
    pub fn decimals(&self) -> u32 {
        match self {
            Scale::SimpleBmi => 0,
            Scale::DetailedBmi => 1,
            Scale::WaistToHeight | Scale::WaistToHip | Scale::BodyRoundness => 2,
        }
    }

    /// Build this scale's threshold table for the given context.
    pub fn table(&self, context: &ClassificationContext) -> ThresholdTable {
        match self {
            Scale::SimpleBmi => simple_bmi_table(),
            Scale::DetailedBmi => detailed_bmi_table(),
            Scale::WaistToHeight => waist_to_height_table(context.age_years),
            Scale::WaistToHip => waist_to_hip_table(context.gender),
            Scale::BodyRoundness => body_roundness_table(),
        }
    }
}

/// Inputs that move the dynamic bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassificationContext {
    /// Age in years
    pub age_years: f64,
    /// Gender selection
    pub gender: Gender,
}

impl From<&BodyMeasurements> for ClassificationContext {
    fn from(measurements: &BodyMeasurements) -> Self {
        Self {
            age_years: measurements.age_years,
            gender: measurements.gender,
        }
    }
}

/// A single bucket boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold {
    /// Inclusive lower bound
    pub lower_bound: f64,
    /// Feedback text
    pub label: &'static str,
    /// Feedback styling
    pub severity: Severity,
}

impl Threshold {
    /// Create a threshold.
    pub const fn new(lower_bound: f64, label: &'static str, severity: Severity) -> Self {
        Self {
            lower_bound,
            label,
            severity,
        }
    }
}

/// Thresholds ordered ascending by lower bound.
///
/// The first entry is a floor: values below its nominal bound still land in
/// it, so a table is never empty and classification always succeeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    floor: Threshold,
    above: Vec<Threshold>,
}

impl ThresholdTable {
    /// `above` must be ascending and start at or over the floor's bound.
    fn new(floor: Threshold, above: Vec<Threshold>) -> Self {
        debug_assert!(above
            .windows(2)
            .all(|pair| pair[0].lower_bound <= pair[1].lower_bound));
        Self { floor, above }
    }

    /// All thresholds, lowest first.
    #[cfg(test)]
    fn thresholds(&self) -> impl Iterator<Item = &Threshold> {
        std::iter::once(&self.floor).chain(self.above.iter())
    }

    /// Find the last threshold whose lower bound the value reaches.
    pub fn classify(&self, value: f64) -> &Threshold {
        let mut current = &self.floor;
        for threshold in &self.above {
            if value >= threshold.lower_bound {
                current = threshold;
            }
        }
        current
    }
}

/// Waist-to-height "Unhealthy" bound for an age.
pub fn whtr_unhealthy_bound(age_years: f64) -> f64 {
    if age_years > 50.0 {
        0.6
    } else if age_years > 40.0 {
        (age_years - 40.0) / 100.0 + 0.5
    } else {
        0.5
    }
}

/// Waist-to-hip "Overweight" bound for a gender.
pub fn whr_overweight_bound(gender: Gender) -> f64 {
    match gender {
        Gender::Female => 0.8,
        Gender::Male => 0.9,
        Gender::Average => 0.85,
    }
}

/// Waist-to-hip "Obese" bound for a gender.
pub fn whr_obese_bound(gender: Gender) -> f64 {
    match gender {
        Gender::Female => 0.85,
        Gender::Male => 1.0,
        Gender::Average => 0.925,
    }
}

/// Basic-mode BMI table.
pub fn simple_bmi_table() -> ThresholdTable {
    ThresholdTable::new(
        Threshold::new(0.0, "Underweight", Severity::Info),
        vec![
            Threshold::new(18.5, "Healthy", Severity::Success),
            Threshold::new(25.0, "Overweight", Severity::Warning),
            Threshold::new(30.0, "Obese", Severity::Error),
            Threshold::new(40.0, "Extremely obese", Severity::Error),
        ],
    )
}

/// Advanced-mode BMI table.
pub fn detailed_bmi_table() -> ThresholdTable {
    ThresholdTable::new(
        Threshold::new(0.0, "Underweight [Severe]", Severity::Info),
        vec![
            Threshold::new(16.0, "Underweight [Moderate]", Severity::Info),
            Threshold::new(17.0, "Underweight [Mild]", Severity::Info),
            Threshold::new(18.5, "Healthy", Severity::Success),
            Threshold::new(25.0, "Overweight", Severity::Warning),
            Threshold::new(30.0, "Obese [Class 1]", Severity::Error),
            Threshold::new(35.0, "Obese [Class 2]", Severity::Error),
            Threshold::new(40.0, "Obese [Class 3]", Severity::Error),
        ],
    )
}

/// Waist-to-height table for an age.
pub fn waist_to_height_table(age_years: f64) -> ThresholdTable {
    ThresholdTable::new(
        Threshold::new(0.0, "Healthy", Severity::Success),
        vec![
            Threshold::new(whtr_unhealthy_bound(age_years), "Unhealthy", Severity::Warning),
        ],
    )
}

/// Waist-to-hip table for a gender.
pub fn waist_to_hip_table(gender: Gender) -> ThresholdTable {
    ThresholdTable::new(
        Threshold::new(0.0, "Healthy", Severity::Success),
        vec![
            Threshold::new(whr_overweight_bound(gender), "Overweight", Severity::Warning),
            Threshold::new(whr_obese_bound(gender), "Obese", Severity::Error),
        ],
    )
}

/// Body Roundness Index table.
pub fn body_roundness_table() -> ThresholdTable {
    ThresholdTable::new(
        Threshold::new(0.0, "Very lean", Severity::Info),
        vec![
            Threshold::new(3.41, "Lean", Severity::Success),
            Threshold::new(4.45, "Average", Severity::Success),
            Threshold::new(5.46, "Above average", Severity::Warning),
            Threshold::new(6.91, "High", Severity::Error),
        ],
    )
}

/// Digits after the point in the exact decimal expansion of any `f64`.
const EXACT_FRACTION_DIGITS: usize = 1100;
/// Above this magnitude every `f64` is already a whole number.
const WHOLE_NUMBER_MAGNITUDE: f64 = 1e15;
/// Most decimal places that still fit the scaled integer.
const MAX_DECIMALS: u32 = 15;

/// Round to the given number of decimal places, ties to even.
///
/// Works on the exact decimal expansion of the binary value, so a stored
/// 0.495 (really 0.49499999...) rounds down to 0.49 and only true ties such
/// as 22.5 go to the even neighbour.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value.abs() >= WHOLE_NUMBER_MAGNITUDE || decimals > MAX_DECIMALS {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let (kept, dropped) = fraction.split_at(decimals as usize);

    let Ok(mut scaled) = format!("{whole}{kept}").parse::<u128>() else {
        return value;
    };

    let mut dropped = dropped.bytes();
    let round_up = match dropped.next() {
        Some(b'6'..=b'9') => true,
        Some(b'5') => dropped.any(|digit| digit != b'0') || scaled % 2 == 1,
        _ => false,
    };
    if round_up {
        scaled += 1;
    }

    let magnitude = scaled as f64 / 10f64.powi(decimals as i32);
    magnitude.copysign(value)
}

/// A raw metric value together with its display precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricResult {
    /// Scale the value belongs to
    pub scale: Scale,
    /// Unrounded value
    pub raw_value: f64,
    /// Display decimal places
    pub decimals: u32,
}

impl MetricResult {
    /// Pick a scale's value out of a calculation.
    pub fn from_metrics(scale: Scale, metrics: &BodyMetrics) -> Self {
        Self {
            scale,
            raw_value: scale.metric().raw_value(metrics),
            decimals: scale.decimals(),
        }
    }

    /// Value at display precision.
    pub fn rounded(&self) -> f64 {
        round_to(self.raw_value, self.decimals)
    }
}

/// Outcome of classifying one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    /// Scale used
    pub scale: Scale,
    /// Metric classified
    pub metric: MetricId,
    /// Rounded value that was classified
    pub value: f64,
    /// Feedback text
    pub label: &'static str,
    /// Feedback styling
    pub severity: Severity,
}

impl Classification {
    /// Round a result to display precision, then classify the rounded value.
    pub fn evaluate(result: &MetricResult, context: &ClassificationContext) -> Self {
        let value = result.rounded();
        let table = result.scale.table(context);
        let threshold = table.classify(value);

        Self {
            scale: result.scale,
            metric: result.scale.metric(),
            value,
            label: threshold.label,
            severity: threshold.severity,
        }
    }
}

/// Calculate and classify every scale for a measurement snapshot.
pub fn classify_measurements(
    measurements: &BodyMeasurements,
    scales: &[Scale],
) -> MetricsResult<Vec<Classification>> {
    let metrics = BodyMetrics::calculate(measurements)?;
    let context = ClassificationContext::from(measurements);

    Ok(scales
        .iter()
        .map(|scale| {
            let result = MetricResult::from_metrics(*scale, &metrics);
            Classification::evaluate(&result, &context)
        })
        .collect())
}
