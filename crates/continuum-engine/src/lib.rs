//! Continuum engine crate.
//!
//! Renders frames of a continuous-space agent simulation onto a 2D surface
//! with a Cartesian (bottom-left origin, y-up) orientation.
//!
//! ```
//! use continuum_engine::canvas::RasterHost;
//! use continuum_engine::render::SimpleContinuousModule;
//! use continuum_engine::scene::{Drawable, Frame};
//!
//! let mut host = RasterHost::new();
//! let mut module = SimpleContinuousModule::new(&mut host, 100, 100, "world").unwrap();
//!
//! let frame = Frame::from_groups(vec![vec![Drawable::circle(0.5, 0.5, 10.0, "red", true)]]);
//! module.render(&frame);
//!
//! let surface = host.surface("world").unwrap().borrow();
//! assert!(!surface.is_blank());
//! ```

pub mod canvas;
pub mod coords;
pub mod ingest;
pub mod logging;
pub mod paint;
pub mod portrayal;
pub mod render;
pub mod scene;
