//! Visualization core.
//!
//! [`ContinuousVisualization`] owns a drawing context, installs the
//! Cartesian flip on it once, and draws frames of normalized drawables.
//! [`SimpleContinuousModule`] acquires a surface from a display host and
//! exposes the per-frame entry points to the application.
//!
//! Convention:
//! - drawable positions are normalized, origin bottom-left, +Y up
//! - device position is `(x * width, y * height)` in user space; the context
//!   transform handles the flip
//! - radii are pixels and are never scaled by width or height

mod module;
mod visualization;

pub use module::SimpleContinuousModule;
pub use visualization::{ContinuousVisualization, DrawStats};
