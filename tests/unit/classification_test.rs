//! Unit tests for threshold classification.

use rustbmi::metrics::thresholds::{
    body_roundness_table, detailed_bmi_table, simple_bmi_table, waist_to_hip_table,
    whtr_unhealthy_bound, Classification, ClassificationContext, MetricResult, Scale,
};
use rustbmi::metrics::{Gender, Severity};

fn evaluate(scale: Scale, raw_value: f64, age_years: f64, gender: Gender) -> Classification {
    let result = MetricResult {
        scale,
        raw_value,
        decimals: scale.decimals(),
    };
    Classification::evaluate(&result, &ClassificationContext { age_years, gender })
}

#[test]
fn test_simple_bmi_buckets() {
    let table = simple_bmi_table();
    assert_eq!(table.classify(10.0).label, "Underweight");
    assert_eq!(table.classify(18.5).label, "Healthy");
    assert_eq!(table.classify(24.0).label, "Healthy");
    assert_eq!(table.classify(25.0).label, "Overweight");
    assert_eq!(table.classify(30.0).label, "Obese");
    assert_eq!(table.classify(40.0).label, "Extremely obese");
    assert_eq!(table.classify(40.0).severity, Severity::Error);
}

#[test]
fn test_detailed_bmi_buckets() {
    let table = detailed_bmi_table();
    let expected = [
        (15.9, "Underweight [Severe]", Severity::Info),
        (16.0, "Underweight [Moderate]", Severity::Info),
        (17.5, "Underweight [Mild]", Severity::Info),
        (22.0, "Healthy", Severity::Success),
        (27.3, "Overweight", Severity::Warning),
        (31.0, "Obese [Class 1]", Severity::Error),
        (35.0, "Obese [Class 2]", Severity::Error),
        (52.4, "Obese [Class 3]", Severity::Error),
    ];
    for (value, label, severity) in expected {
        let threshold = table.classify(value);
        assert_eq!(threshold.label, label, "{value}");
        assert_eq!(threshold.severity, severity, "{value}");
    }
}

#[test]
fn test_bri_buckets() {
    let table = body_roundness_table();
    assert_eq!(table.classify(3.36).label, "Very lean");
    assert_eq!(table.classify(3.41).label, "Lean");
    assert_eq!(table.classify(5.16).label, "Average");
    assert_eq!(table.classify(6.09).label, "Above average");
    assert_eq!(table.classify(8.63).label, "High");
}

#[test]
fn test_simple_bmi_ties_round_to_even() {
    // 98 kg at 200 cm is exactly 24.5
    let healthy = evaluate(Scale::SimpleBmi, 24.5, 30.0, Gender::Average);
    assert_eq!(healthy.value, 24.0);
    assert_eq!(healthy.label, "Healthy");

    let overweight = evaluate(Scale::SimpleBmi, 25.5, 30.0, Gender::Average);
    assert_eq!(overweight.value, 26.0);
    assert_eq!(overweight.label, "Overweight");

    assert_eq!(evaluate(Scale::SimpleBmi, 22.5, 30.0, Gender::Average).value, 22.0);
}

#[test]
fn test_whtr_dynamic_bound() {
    assert_eq!(whtr_unhealthy_bound(30.0), 0.5);
    assert!((whtr_unhealthy_bound(45.0) - 0.55).abs() < 1e-12);
    assert_eq!(whtr_unhealthy_bound(55.0), 0.6);

    assert_eq!(evaluate(Scale::WaistToHeight, 0.52, 30.0, Gender::Average).label, "Unhealthy");
    assert_eq!(evaluate(Scale::WaistToHeight, 0.52, 45.0, Gender::Average).label, "Healthy");
    assert_eq!(evaluate(Scale::WaistToHeight, 0.57, 45.0, Gender::Average).label, "Unhealthy");
    assert_eq!(evaluate(Scale::WaistToHeight, 0.57, 55.0, Gender::Average).label, "Healthy");
}

#[test]
fn test_whr_by_gender() {
    let ratio = 0.86;
    assert_eq!(evaluate(Scale::WaistToHip, ratio, 30.0, Gender::Female).label, "Obese");
    assert_eq!(evaluate(Scale::WaistToHip, ratio, 30.0, Gender::Average).label, "Overweight");
    assert_eq!(evaluate(Scale::WaistToHip, ratio, 30.0, Gender::Male).label, "Healthy");

    let male = waist_to_hip_table(Gender::Male);
    assert_eq!(male.classify(0.947).label, "Overweight");
    assert_eq!(male.classify(1.0).label, "Obese");
}

#[test]
fn test_severity_monotonic_across_values() {
    let scales = [
        Scale::SimpleBmi,
        Scale::DetailedBmi,
        Scale::WaistToHeight,
        Scale::WaistToHip,
        Scale::BodyRoundness,
    ];
    for scale in scales {
        let mut previous = Severity::Info;
        let mut value = 0.0;
        while value < 60.0 {
            let severity = evaluate(scale, value, 45.0, Gender::Female).severity;
            assert!(severity >= previous, "{scale:?} at {value}");
            previous = severity;
            value += 0.01;
        }
    }
}
