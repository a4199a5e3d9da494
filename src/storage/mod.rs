//! Storage module for persisted settings.

pub mod config;

pub use config::{AppSettings, ConfigError, Mode, Units};
