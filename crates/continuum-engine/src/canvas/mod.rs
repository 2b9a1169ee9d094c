//! Drawing-context abstraction and the tiny-skia raster backend.
//!
//! Responsibilities:
//! - define the 2D context operations the visualization core relies on
//!   ([`DrawingContext`]) with 2D-canvas semantics
//! - provide surfaces: [`RasterContext`] (pixels) and [`RecordingContext`]
//!   (call log)
//! - abstract surface acquisition behind [`DisplayHost`]
//!
//! Extending with a new backend:
//! - implement [`DrawingContext`] for the backend's context type
//! - implement [`DisplayHost`] for whatever creates those contexts

mod context;
mod error;
mod host;
mod raster;
mod recording;

pub use context::DrawingContext;
pub use error::SurfaceError;
pub use host::{DisplayHost, RasterHost, SharedRaster};
pub use raster::RasterContext;
pub use recording::{CanvasOp, RecordingContext};
