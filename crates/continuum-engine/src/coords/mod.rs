//! Coordinate types shared by the drawing context and the visualization core.
//!
//! Two spaces are in play:
//! - normalized simulation space: `[0, 1] x [0, 1]`, origin bottom-left, +Y up
//! - device space: pixels, origin top-left, +Y down
//!
//! The bridge between them is a one-time [`flip_y`] transform installed on the
//! drawing context plus a per-object scale by the [`SurfaceSize`].

mod size;
mod transform;
mod vec2;

pub use resvg::tiny_skia::Transform;
pub use size::SurfaceSize;
pub use transform::{flip_y, map_point, mean_scale};
pub use vec2::Vec2;
