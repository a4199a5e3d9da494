//! Unit tests for the results panel and input form together.

use rustbmi::metrics::{MetricId, Severity, Units};
use rustbmi::storage::config::{AppSettings, Mode};
use rustbmi::ui::{InputField, InputForm, ResultsPanel};
use rustbmi::Gender;

#[test]
fn test_basic_mode_reference_example() {
    let form = InputForm::default();
    let panel = ResultsPanel::build(&form.measurements(), form.mode).unwrap();

    let bmi = panel.row(MetricId::Bmi).unwrap();
    assert_eq!(bmi.value, "25");
    assert_eq!(bmi.label, "Overweight");
    assert_eq!(bmi.severity, Severity::Warning);
}

#[test]
fn test_advanced_mode_all_metrics() {
    let settings = AppSettings {
        mode: Mode::Advanced,
        height: 170.0,
        mass: 65.0,
        waist: 100.0,
        hip: 105.0,
        age: 45.0,
        gender: Gender::Female,
        ..Default::default()
    };
    let form = InputForm::from_settings(&settings);
    let panel = ResultsPanel::build(&form.measurements(), form.mode).unwrap();

    let summary: Vec<_> = panel
        .rows
        .iter()
        .map(|row| (row.metric, row.value.as_str(), row.label))
        .collect();
    assert_eq!(
        summary,
        vec![
            (MetricId::Bmi, "22.5", "Healthy"),
            (MetricId::Whtr, "0.59", "Unhealthy"),
            (MetricId::Whr, "0.95", "Obese"),
            (MetricId::Bri, "5.16", "Average"),
        ]
    );
}

#[test]
fn test_imperial_inputs_give_same_results() {
    let metric = InputForm::default();
    let mut imperial = InputForm::default();
    imperial.set_units(Units::Imperial);

    let a = ResultsPanel::build(&metric.measurements(), Mode::Advanced).unwrap();
    let b = ResultsPanel::build(&imperial.measurements(), Mode::Advanced).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_recompute_after_edit() {
    let mut form = InputForm::default();
    form.set(InputField::Weight, 120.0);
    let panel = ResultsPanel::build(&form.measurements(), Mode::Basic).unwrap();
    assert_eq!(panel.copy_text(MetricId::Bmi).as_deref(), Some("37"));
    assert_eq!(panel.rows[0].label, "Obese");
    assert_eq!(panel.rows[0].style, "error");
}

#[test]
fn test_values_just_below_a_tie_round_down() {
    let settings = AppSettings {
        mode: Mode::Advanced,
        height: 200.0,
        waist: 99.0,
        age: 30.0,
        ..Default::default()
    };
    let form = InputForm::from_settings(&settings);
    let panel = ResultsPanel::build(&form.measurements(), form.mode).unwrap();
    let whtr = panel.row(MetricId::Whtr).unwrap();
    assert_eq!((whtr.value.as_str(), whtr.label), ("0.49", "Healthy"));

    let settings = AppSettings {
        mode: Mode::Advanced,
        waist: 99.5,
        hip: 100.0,
        gender: Gender::Male,
        ..Default::default()
    };
    let form = InputForm::from_settings(&settings);
    let panel = ResultsPanel::build(&form.measurements(), form.mode).unwrap();
    let whr = panel.row(MetricId::Whr).unwrap();
    assert_eq!((whr.value.as_str(), whr.label), ("0.99", "Overweight"));
}

#[test]
fn test_whole_detailed_bmi_keeps_decimal() {
    let settings = AppSettings {
        mode: Mode::Advanced,
        height: 200.0,
        mass: 100.0,
        ..Default::default()
    };
    let form = InputForm::from_settings(&settings);
    let panel = ResultsPanel::build(&form.measurements(), form.mode).unwrap();
    assert_eq!(panel.copy_text(MetricId::Bmi).as_deref(), Some("25.0"));
}
