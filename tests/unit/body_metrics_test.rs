//! Unit tests for metric calculations.

use rustbmi::metrics::calculator::{
    bmi, body_roundness_index, waist_to_height, waist_to_hip, BodyMeasurements, BodyMetrics,
};
use rustbmi::metrics::MetricsError;

#[test]
fn test_bmi_matches_definition() {
    for (height_cm, mass_kg) in [(150.0, 45.0), (165.5, 62.3), (180.0, 80.0), (210.0, 140.0)] {
        let height_m: f64 = height_cm / 100.0;
        let expected = mass_kg / height_m.powi(2);
        let value = bmi(height_cm, mass_kg).unwrap();
        assert!((value - expected).abs() < 1e-9, "{height_cm} cm, {mass_kg} kg");
    }
}

#[test]
fn test_ratio_examples() {
    assert!((waist_to_height(100.0, 170.0).unwrap() - 0.588235).abs() < 1e-6);
    assert!((waist_to_hip(90.0, 95.0).unwrap() - 0.947368).abs() < 1e-6);
}

#[test]
fn test_bri_reference_values() {
    let cases = [
        (70.0, 175.0, 1.6747),
        (100.0, 170.0, 5.1642),
        (110.0, 175.0, 6.0906),
        (120.0, 165.0, 8.6287),
    ];
    for (waist, height, expected) in cases {
        let value = body_roundness_index(waist, height).unwrap();
        assert!((value - expected).abs() < 1e-3, "{waist}/{height}: {value}");
    }
}

#[test]
fn test_bri_degenerate_is_exactly_zero() {
    assert_eq!(body_roundness_index(1000.0, 10.0).unwrap(), 0.0);
}

#[test]
fn test_zero_height_is_domain_error() {
    let measurements = BodyMeasurements {
        height_cm: 0.0,
        ..Default::default()
    };
    let err = BodyMetrics::calculate(&measurements).unwrap_err();
    assert!(matches!(err, MetricsError::DomainError { field: "height_cm", .. }));
}

#[test]
fn test_infinite_waist_is_invalid() {
    let measurements = BodyMeasurements {
        waist_cm: f64::INFINITY,
        ..Default::default()
    };
    assert!(matches!(
        BodyMetrics::calculate(&measurements),
        Err(MetricsError::InvalidInput(_))
    ));
}
