use crate::coords::Transform;

/// 2D drawing context with canvas semantics.
///
/// Conventions:
/// - coordinates passed to [`clear_rect`](Self::clear_rect) and [`arc`](Self::arc)
///   are in user space; the context applies its current transform
/// - [`transform`](Self::transform) post-multiplies the current transform, it
///   never replaces it
/// - style setters take CSS color strings; an unparseable style leaves the
///   previous style in place
/// - default stroke and fill style is opaque black, line width is 1 user unit
pub trait DrawingContext {
    /// Multiplies the current transform by `m`.
    fn transform(&mut self, m: Transform);

    fn current_transform(&self) -> Transform;

    /// Resets the given user-space rectangle to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Discards the current path.
    fn begin_path(&mut self);

    /// Adds a circular arc to the current path. Angles are in radians.
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32, anticlockwise: bool);

    /// Closes the current subpath with a straight segment back to its start.
    fn close_path(&mut self);

    fn set_stroke_style(&mut self, style: &str);

    /// Outlines the current path with the stroke style.
    fn stroke(&mut self);

    fn set_fill_style(&mut self, style: &str);

    /// Fills the current path with the fill style (non-zero winding).
    fn fill(&mut self);
}
