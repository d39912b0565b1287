//! Text metrics.
//!
//! Widgets size their popups and center their labels from measured text. Two
//! sources are provided: real font metrics through [`FontSystem`] and a fixed
//! per-character estimate through [`MonospaceMetrics`] for headless runs.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{MonospaceMetrics, TextMeasure};
