//! External data boundary: JSON frames in, typed [`Frame`]s out.
//!
//! Wire format (as produced by the simulation server):
//! - a frame is either an array of groups or an object mapping layer keys to
//!   groups; object keys are ordered numerically, non-numeric keys last
//! - a group is an array of portrayal objects
//! - a portrayal object has `Shape`, `x`, `y`, `r`, `Color`, `Filled` and an
//!   optional `Layer` (lower-case key aliases are accepted)
//!
//! `Filled` is coerced to a boolean here and nowhere else: JSON `true` or
//! the exact string `"true"` mean filled, anything else means outline only.
//!
//! Malformed objects are skipped with a warning; a malformed document is an
//! error.
//!
//! [`Frame`]: crate::scene::Frame

mod error;
mod wire;

pub use error::IngestError;
pub use wire::{frame_to_json, parse_frame, parse_frame_value, parse_frame_with_report, IngestReport};
