//! Results panel.
//!
//! Turns a measurement snapshot into the rows a front end renders: value
//! text, feedback label and styling for each shown metric. The panel is
//! rebuilt wholesale on every input change and never patched in place.

use serde::Serialize;
use std::collections::HashMap;

use crate::metrics::calculator::{bri_is_undefined, BodyMeasurements};
use crate::metrics::error::MetricsResult;
use crate::metrics::thresholds::{classify_measurements, Classification, MetricId, Scale, Severity};
use crate::storage::config::Mode;
use crate::ui::theme;

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// Metric shown
    pub metric: MetricId,
    /// Scale used for classification
    pub scale: Scale,
    /// Row title
    pub title: &'static str,
    /// Tooltip text
    pub tooltip: &'static str,
    /// Value as displayed
    pub value: String,
    /// Feedback label
    pub label: &'static str,
    /// Feedback severity
    pub severity: Severity,
    /// Style class for the severity
    pub style: &'static str,
}

impl ResultRow {
    fn from_classification(classification: &Classification, whole: bool) -> Self {
        let metric = classification.metric;
        Self {
            metric,
            scale: classification.scale,
            title: metric.title(),
            tooltip: metric.description(),
            value: format_value(classification.value, whole),
            label: classification.label,
            severity: classification.severity,
            style: theme::style_class(classification.severity),
        }
    }

    /// Single-line text rendering, optionally coloured by severity.
    pub fn to_line(&self, color: bool) -> String {
        let feedback = if color {
            theme::severity_color(self.severity).paint(self.label)
        } else {
            self.label.to_string()
        };
        format!("{}: {} ({})", self.title, self.value, feedback)
    }
}

/// Format an already-rounded value for display.
///
/// Whole values print without a fraction (`25`, `0`); everything else keeps
/// at least one decimal (`25.0`, `0.5`, `3.36`).
pub fn format_value(value: f64, whole: bool) -> String {
    if whole {
        format!("{}", value as i64)
    } else {
        format!("{value:?}")
    }
}

/// Every result shown for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPanel {
    /// Mode the panel was built for
    pub mode: Mode,
    /// Rows in display order
    pub rows: Vec<ResultRow>,
}

impl ResultsPanel {
    /// Calculate, classify and format the results for a mode.
    pub fn build(measurements: &BodyMeasurements, mode: Mode) -> MetricsResult<Self> {
        let scales: &[Scale] = match mode {
            Mode::Basic => &[Scale::SimpleBmi],
            Mode::Advanced => &Scale::DETAILED,
        };

        let bri_fallback = bri_is_undefined(measurements.waist_cm, measurements.height_cm);
        let rows = classify_measurements(measurements, scales)?
            .iter()
            .map(|classification| {
                let whole = match classification.scale {
                    Scale::SimpleBmi => true,
                    Scale::BodyRoundness => bri_fallback,
                    _ => false,
                };
                ResultRow::from_classification(classification, whole)
            })
            .collect();

        Ok(Self { mode, rows })
    }

    /// Look up the row for a metric.
    pub fn row(&self, metric: MetricId) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }

    /// Rendered values keyed by metric.
    pub fn values(&self) -> HashMap<MetricId, String> {
        self.rows
            .iter()
            .map(|row| (row.metric, row.value.clone()))
            .collect()
    }

    /// Text to copy for a metric, as currently rendered.
    pub fn copy_text(&self, metric: MetricId) -> Option<String> {
        let value = self.values().remove(&metric);
        if let Some(value) = &value {
            tracing::info!("Copied result '{}'", value);
        }
        value
    }

    /// Multi-line text rendering.
    pub fn to_text(&self, color: bool) -> String {
        self.rows
            .iter()
            .map(|row| row.to_line(color))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
