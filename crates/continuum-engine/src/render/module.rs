use crate::canvas::{DisplayHost, DrawingContext, SurfaceError};
use crate::coords::SurfaceSize;
use crate::scene::Frame;

use super::{ContinuousVisualization, DrawStats};

/// A visualization bound to one host surface.
///
/// The host is passed in explicitly; the module keeps only the surface it
/// was given.
#[derive(Debug)]
pub struct SimpleContinuousModule<C: DrawingContext> {
    element_id: String,
    visualization: ContinuousVisualization<C>,
}

impl<C: DrawingContext> SimpleContinuousModule<C> {
    /// Acquires a `width x height` surface tagged `element_id` from `host`.
    ///
    /// Fails if the dimensions are zero or the host cannot provide the surface.
    pub fn new<H>(host: &mut H, width: u32, height: u32, element_id: &str) -> Result<Self, SurfaceError>
    where
        H: DisplayHost<Surface = C> + ?Sized,
    {
        let size = SurfaceSize::new(width, height)?;
        let context = host.create_surface(element_id, size)?;

        log::debug!("continuous module `{element_id}` bound to {width}x{height} surface");

        Ok(Self {
            element_id: element_id.to_string(),
            visualization: ContinuousVisualization::new(size, context),
        })
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn visualization(&self) -> &ContinuousVisualization<C> {
        &self.visualization
    }

    /// Replaces the surface contents with `frame`.
    pub fn render(&mut self, frame: &Frame) -> DrawStats {
        self.visualization.reset_canvas();
        let stats = self.visualization.draw(frame);
        log::trace!(
            "`{}`: rendered {} drawables, skipped {}",
            self.element_id,
            stats.drawn,
            stats.skipped
        );
        stats
    }

    /// Blanks the surface without drawing.
    pub fn reset(&mut self) {
        self.visualization.reset_canvas();
    }
}
