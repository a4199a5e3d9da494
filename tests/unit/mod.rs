//! Unit test modules.

mod body_metrics_test;
mod classification_test;
mod results_test;
mod settings_test;
