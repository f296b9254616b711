//! Rendering boundary: option documents handed to the external chart library.

pub mod option;

pub use option::{chart_option, ChartSettings, LayoutMode};
