use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::coords::{SurfaceSize, Transform};

use super::{DrawingContext, RasterContext, SurfaceError};

/// Creates drawing surfaces on demand.
///
/// A host owns whatever display area surfaces are embedded in. Each surface
/// is tagged with an element id that must be unique within the host.
pub trait DisplayHost {
    type Surface: DrawingContext;

    fn create_surface(&mut self, element_id: &str, size: SurfaceSize) -> Result<Self::Surface, SurfaceError>;
}

/// Shared handle to a raster surface.
///
/// The drawing side and the host both hold one; rendering is single-threaded
/// so a `RefCell` is enough.
#[derive(Debug, Clone)]
pub struct SharedRaster(Rc<RefCell<RasterContext>>);

impl SharedRaster {
    pub fn new(ctx: RasterContext) -> Self {
        Self(Rc::new(RefCell::new(ctx)))
    }

    /// Read access to the underlying pixels.
    ///
    /// # Panics
    /// Panics if called while a draw call on the same surface is in progress.
    pub fn borrow(&self) -> Ref<'_, RasterContext> {
        self.0.borrow()
    }
}

impl DrawingContext for SharedRaster {
    fn transform(&mut self, m: Transform) {
        self.0.borrow_mut().transform(m)
    }

    fn current_transform(&self) -> Transform {
        self.0.borrow().current_transform()
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.0.borrow_mut().clear_rect(x, y, w, h)
    }

    fn begin_path(&mut self) {
        self.0.borrow_mut().begin_path()
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32, anticlockwise: bool) {
        self.0.borrow_mut().arc(cx, cy, radius, start_angle, end_angle, anticlockwise)
    }

    fn close_path(&mut self) {
        self.0.borrow_mut().close_path()
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.0.borrow_mut().set_stroke_style(style)
    }

    fn stroke(&mut self) {
        self.0.borrow_mut().stroke()
    }

    fn set_fill_style(&mut self, style: &str) {
        self.0.borrow_mut().set_fill_style(style)
    }

    fn fill(&mut self) {
        self.0.borrow_mut().fill()
    }
}

/// In-memory display host backed by [`RasterContext`] surfaces.
#[derive(Debug, Default)]
pub struct RasterHost {
    surfaces: BTreeMap<String, SharedRaster>,
}

impl RasterHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self, element_id: &str) -> Option<&SharedRaster> {
        self.surfaces.get(element_id)
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl DisplayHost for RasterHost {
    type Surface = SharedRaster;

    fn create_surface(&mut self, element_id: &str, size: SurfaceSize) -> Result<SharedRaster, SurfaceError> {
        if element_id.trim().is_empty() {
            return Err(SurfaceError::InvalidElementId);
        }
        if self.surfaces.contains_key(element_id) {
            return Err(SurfaceError::DuplicateElement(element_id.to_string()));
        }

        let surface = SharedRaster::new(RasterContext::new(size)?);
        self.surfaces.insert(element_id.to_string(), surface.clone());

        log::debug!("created {}x{} raster surface `{element_id}`", size.width(), size.height());
        Ok(surface)
    }
}
