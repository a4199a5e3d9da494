//! Unit tests for settings persistence.

use rustbmi::storage::config::{load_settings, save_settings, AppSettings, Mode, Units};
use rustbmi::ui::{InputField, InputForm};
use rustbmi::Gender;
use tempfile::TempDir;

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let settings = AppSettings {
        mode: Mode::Advanced,
        units: Units::Imperial,
        height: 172.0,
        gender: Gender::Female,
        ..Default::default()
    };
    save_settings(&path, &settings).unwrap();

    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded, settings);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("mode = \"advanced\""));
    assert!(content.contains("gender = \"female\""));
}

#[test]
fn test_session_round_trip_in_imperial() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut settings = AppSettings {
        units: Units::Imperial,
        ..Default::default()
    };
    let mut form = InputForm::from_settings(&settings);
    form.set(InputField::Height, 70.0);
    form.store(&mut settings);
    settings.prepare_for_exit();
    save_settings(&path, &settings).unwrap();

    // 70 in is 177.8 cm, stored as a whole number
    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded.height, 178.0);
    assert_eq!(loaded.units, Units::Imperial);
}

#[test]
fn test_forget_resets_body_values() {
    let mut settings = AppSettings {
        forget: true,
        mass: 95.0,
        waist: 101.0,
        ..Default::default()
    };
    settings.prepare_for_exit();
    assert_eq!(settings.mass, AppSettings::default().mass);
    assert_eq!(settings.waist, AppSettings::default().waist);
    assert!(settings.forget);
}
