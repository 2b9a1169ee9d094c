use resvg::tiny_skia::{Point, Transform};

use super::Vec2;

/// Vertical flip + translate: user `(x, y)` lands at device `(x, height - y)`.
///
/// Turns a top-left/+Y-down raster into a bottom-left/+Y-up Cartesian plane.
/// No scaling is baked in.
#[inline]
pub fn flip_y(height: f32) -> Transform {
    Transform::from_row(1.0, 0.0, 0.0, -1.0, 0.0, height)
}

#[inline]
pub fn map_point(t: Transform, p: Vec2) -> Vec2 {
    let mut pt = Point::from_xy(p.x, p.y);
    t.map_point(&mut pt);
    Vec2::new(pt.x, pt.y)
}

/// Geometric mean of the axis scale factors; sizes line widths in device space.
#[inline]
pub fn mean_scale(t: Transform) -> f32 {
    (t.sx * t.sy - t.kx * t.ky).abs().sqrt()
}
