//! Paint model: colors and the style strings a drawing context accepts.
//!
//! Frames carry colors as CSS-style strings (`"red"`, `"#9ACD32"`,
//! `"rgba(0, 0, 0, 0.5)"`). Parsing happens inside the drawing context that
//! needs actual channel values; the visualization core forwards strings as-is.

mod color;

pub use color::{Color, ColorParseError};
