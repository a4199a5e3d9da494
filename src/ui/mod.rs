//! Presentation adapter between raw input state and rendered results.

pub mod form;
pub mod results;
pub mod theme;

pub use form::{InputField, InputForm, SpinRow};
pub use results::{ResultRow, ResultsPanel};
