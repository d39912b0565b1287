//! Paint model shared between the UI and whatever presents the draw list.
//!
//! Colors are linear premultiplied RGBA. Parsing of `#RGB` / `#RRGGBB` strings
//! lives here so widgets only ever see resolved colors.

pub mod color;

pub use color::Color;
