use crate::canvas::SurfaceError;

/// Pixel dimensions of a drawing surface.
///
/// Invariant: both dimensions are non-zero. Fields are private so a size,
/// once validated, cannot change for the lifetime of the owner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub const fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> u32 {
        self.height
    }

    #[inline]
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }
}
