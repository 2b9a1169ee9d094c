//! Frame data model.
//!
//! Responsibilities:
//! - typed drawables, one variant per shape kind, each carrying exactly the
//!   fields its draw routine needs
//! - the two-level frame (groups of drawables)
//! - layer keys that order groups
//!
//! Extending with a new shape:
//! - add a payload type next to [`Circle`]
//! - add a variant to [`Drawable`] and a tag to [`ShapeKind`]
//! - teach `ingest` to decode it and `render` to draw it

mod drawable;
mod frame;
mod layer;

pub use drawable::{Circle, Drawable, ShapeKind};
pub use frame::{Frame, Group};
pub use layer::Layer;
