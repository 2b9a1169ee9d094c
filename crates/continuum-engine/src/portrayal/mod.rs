//! Producer side of the frame boundary: turning positioned agents into a
//! [`Frame`](crate::scene::Frame).
//!
//! A simulation describes each agent with a [`Portrayal`] (shape, size,
//! color, layer) and a position in its own continuous space. A
//! [`CanvasElement`] normalizes positions against the [`ContinuousSpace`]
//! extent and buckets drawables by layer.

mod element;
mod space;

pub use element::{CanvasElement, Portray, Portrayal};
pub use space::{ContinuousSpace, SpaceError};
