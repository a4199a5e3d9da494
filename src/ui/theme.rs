//! Result styling.
//!
//! Maps a classification severity onto a style class name and a colour.

use serde::{Deserialize, Serialize};

use crate::metrics::thresholds::Severity;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Wrap text in a 24-bit ANSI foreground colour escape.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", self.r, self.g, self.b, text)
    }
}

/// Light blue (below healthy range)
pub const INFO: Color = Color::new(53, 132, 228);
/// Success color (green)
pub const SUCCESS: Color = Color::new(52, 168, 83);
/// Warning color (yellow/orange)
pub const WARNING: Color = Color::new(251, 188, 4);
/// Error color (red)
pub const ERROR: Color = Color::new(234, 67, 53);

/// Style class name for a severity.
pub fn style_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "light-blue",
        Severity::Success => "success",
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

/// Display colour for a severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => INFO,
        Severity::Success => SUCCESS,
        Severity::Warning => WARNING,
        Severity::Error => ERROR,
    }
}
