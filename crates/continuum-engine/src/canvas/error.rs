/// Failure to acquire, size or export a drawing surface.
///
/// Acquisition errors are fatal for the caller: nothing can be rendered
/// without a surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("surface {width}x{height} is too large to allocate")]
    TooLarge { width: u32, height: u32 },

    #[error("element id must not be empty")]
    InvalidElementId,

    #[error("element `{0}` already exists on this host")]
    DuplicateElement(String),

    #[error("failed to export surface: {0}")]
    Export(#[from] image::ImageError),
}
