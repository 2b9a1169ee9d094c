use core::f32::consts::TAU;
use std::path::Path as FsPath;

use resvg::tiny_skia::{self, BlendMode, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::coords::{SurfaceSize, Vec2, map_point, mean_scale};
use crate::paint::Color;

use super::{DrawingContext, SurfaceError};

const LINE_WIDTH: f32 = 1.0;
/// Max distance (user units) between the cubic approximation and the true arc.
const ARC_TOLERANCE: f64 = 0.01;

/// Drawing context over a `tiny_skia::Pixmap`.
///
/// Path geometry is transformed into device space when it is added, so a
/// later `transform()` call does not move it. Stroke and fill are anti-aliased
/// and fill uses the non-zero winding rule.
#[derive(Debug, Clone)]
pub struct RasterContext {
    size: SurfaceSize,
    pixmap: Pixmap,
    transform: Transform,
    path: PathBuilder,
    subpath_open: bool,
    stroke_style: Color,
    fill_style: Color,
}

impl RasterContext {
    pub fn new(size: SurfaceSize) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(size.width(), size.height()).ok_or(SurfaceError::TooLarge {
            width: size.width(),
            height: size.height(),
        })?;
        Ok(Self {
            size,
            pixmap,
            transform: Transform::identity(),
            path: PathBuilder::new(),
            subpath_open: false,
            stroke_style: Color::BLACK,
            fill_style: Color::BLACK,
        })
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Pixel at device coordinates (origin top-left), un-premultiplied.
    /// `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    pub fn fill_style(&self) -> Color {
        self.fill_style
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.size.width(), self.size.height(), |x, y| {
            image::Rgba(self.pixel(x, y).unwrap_or(Color::TRANSPARENT).to_array())
        })
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<(), SurfaceError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(SurfaceError::from)
    }

    fn parse_style(style: &str, kind: &str) -> Option<Color> {
        match Color::parse(style) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("ignoring {kind} style: {e}");
                None
            }
        }
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = true;
        paint
    }

    fn device(&self, x: f64, y: f64) -> Vec2 {
        map_point(self.transform, Vec2::new(x as f32, y as f32))
    }
}

/// Signed sweep angle for a canvas `arc()` call.
///
/// A sweep of at least a full turn in the requested direction draws a full
/// circle; otherwise the sweep is reduced into `[0, TAU)` in that direction.
fn arc_sweep(start: f32, end: f32, anticlockwise: bool) -> f32 {
    if !anticlockwise {
        let delta = end - start;
        if delta >= TAU { TAU } else { delta.rem_euclid(TAU) }
    } else {
        let delta = start - end;
        if delta >= TAU { -TAU } else { -delta.rem_euclid(TAU) }
    }
}

impl DrawingContext for RasterContext {
    fn transform(&mut self, m: Transform) {
        self.transform = self.transform.pre_concat(m);
    }

    fn current_transform(&self) -> Transform {
        self.transform
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let t = self.transform;
        let corners = [(x, y), (x + w, y), (x, y + h), (x + w, y + h)].map(|(px, py)| map_point(t, Vec2::new(px, py)));

        let (w_px, h_px) = (self.size.width_f32(), self.size.height_f32());
        let left = corners.iter().map(|p| p.x).fold(f32::INFINITY, f32::min).max(0.0);
        let top = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).max(0.0);
        let right = corners.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max).min(w_px);
        let bottom = corners.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).min(h_px);

        if left <= 0.0 && top <= 0.0 && right >= w_px && bottom >= h_px {
            self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_ltrb(left, top, right, bottom) else { return };

        let mut paint = Paint::default();
        paint.blend_mode = BlendMode::Clear;
        paint.anti_alias = false;
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn begin_path(&mut self) {
        self.path = PathBuilder::new();
        self.subpath_open = false;
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32, anticlockwise: bool) {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite() && start_angle.is_finite() && end_angle.is_finite()) {
            return;
        }
        if radius < 0.0 {
            log::warn!("arc with negative radius {radius} ignored");
            return;
        }

        let arc = kurbo::Arc {
            center: kurbo::Point::new(cx as f64, cy as f64),
            radii: kurbo::Vec2::new(radius as f64, radius as f64),
            start_angle: start_angle as f64,
            sweep_angle: arc_sweep(start_angle, end_angle, anticlockwise) as f64,
            x_rotation: 0.0,
        };

        let start = self.device(
            arc.center.x + arc.radii.x * arc.start_angle.cos(),
            arc.center.y + arc.radii.y * arc.start_angle.sin(),
        );
        if self.subpath_open {
            self.path.line_to(start.x, start.y);
        } else {
            self.path.move_to(start.x, start.y);
            self.subpath_open = true;
        }

        for el in arc.append_iter(ARC_TOLERANCE) {
            if let kurbo::PathEl::CurveTo(p1, p2, p3) = el {
                let (a, b, c) = (self.device(p1.x, p1.y), self.device(p2.x, p2.y), self.device(p3.x, p3.y));
                self.path.cubic_to(a.x, a.y, b.x, b.y, c.x, c.y);
            }
        }
    }

    fn close_path(&mut self) {
        if self.subpath_open {
            self.path.close();
            self.subpath_open = false;
        }
    }

    fn set_stroke_style(&mut self, style: &str) {
        if let Some(c) = Self::parse_style(style, "stroke") {
            self.stroke_style = c;
        }
    }

    fn stroke(&mut self) {
        let Some(path) = self.path.clone().finish() else { return };
        let stroke = Stroke { width: LINE_WIDTH * mean_scale(self.transform), ..Stroke::default() };
        self.pixmap
            .stroke_path(&path, &Self::paint(self.stroke_style), &stroke, Transform::identity(), None);
    }

    fn set_fill_style(&mut self, style: &str) {
        if let Some(c) = Self::parse_style(style, "fill") {
            self.fill_style = c;
        }
    }

    fn fill(&mut self) {
        let Some(path) = self.path.clone().finish() else { return };
        self.pixmap
            .fill_path(&path, &Self::paint(self.fill_style), FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::flip_y;

    const RED: Color = Color::from_rgb(255, 0, 0);

    fn ctx(w: u32, h: u32) -> RasterContext {
        RasterContext::new(SurfaceSize::new(w, h).unwrap()).unwrap()
    }

    fn disc(c: &mut RasterContext, x: f32, y: f32, r: f32) {
        c.begin_path();
        c.arc(x, y, r, 0.0, TAU, false);
        c.close_path();
    }

    /// Some coverage, in a pure hue: anti-aliased edges only lower alpha.
    fn tinted(c: Option<Color>, rgb: [u8; 3]) -> bool {
        c.is_some_and(|c| c.a > 0 && [c.r, c.g, c.b] == rgb)
    }

    #[test]
    fn starts_blank() {
        let c = ctx(8, 4);
        assert!(c.is_blank());
        assert_eq!(c.data().len(), 8 * 4 * 4);
        assert_eq!(c.pixel(8, 0), None);
    }

    #[test]
    fn full_turn_sweep() {
        assert_eq!(arc_sweep(0.0, TAU, false), TAU);
        assert_eq!(arc_sweep(0.0, TAU, true), 0.0);
        assert_eq!(arc_sweep(TAU, 0.0, true), -TAU);
        assert!((arc_sweep(0.0, -1.0, false) - (TAU - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn fill_covers_interior_only() {
        let mut c = ctx(40, 40);
        c.set_fill_style("red");
        disc(&mut c, 20.0, 20.0, 5.0);
        c.fill();

        assert_eq!(c.pixel(20, 20), Some(RED));
        assert_eq!(c.pixel(19, 19), Some(RED));
        assert_eq!(c.pixel(20, 27), Some(Color::TRANSPARENT));
        assert_eq!(c.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn stroke_leaves_center_empty() {
        let mut c = ctx(40, 40);
        c.set_stroke_style("#00ff00");
        disc(&mut c, 20.0, 20.0, 10.0);
        c.stroke();

        assert_eq!(c.pixel(20, 20), Some(Color::TRANSPARENT));
        assert!(tinted(c.pixel(30, 20), [0, 255, 0]));
        assert!(tinted(c.pixel(20, 10), [0, 255, 0]));
    }

    #[test]
    fn sub_pixel_circle_still_marks_surface() {
        let mut c = ctx(20, 20);
        c.set_stroke_style("red");
        c.set_fill_style("red");
        disc(&mut c, 10.0, 10.0, 0.08);
        c.stroke();
        c.fill();
        assert!(!c.is_blank());
    }

    #[test]
    fn transform_flips_vertical_axis() {
        let mut c = ctx(10, 10);
        c.transform(flip_y(10.0));
        c.set_fill_style("blue");
        disc(&mut c, 2.0, 2.0, 1.5);
        c.fill();

        // User y = 2 is device y = 8.
        assert!(tinted(c.pixel(1, 7), [0, 0, 255]));
        assert_eq!(c.pixel(1, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn geometry_is_fixed_when_added() {
        let mut c = ctx(10, 10);
        c.set_fill_style("red");
        c.begin_path();
        c.arc(2.0, 2.0, 1.5, 0.0, TAU, false);
        c.transform(flip_y(10.0));
        c.fill();
        assert!(tinted(c.pixel(2, 2), [255, 0, 0]));
        assert_eq!(c.pixel(2, 7), Some(Color::TRANSPARENT));
    }

    #[test]
    fn clear_rect_respects_transform() {
        let mut c = ctx(10, 10);
        c.set_fill_style("black");
        disc(&mut c, 5.0, 5.0, 10.0);
        c.fill();
        assert!(!c.is_blank());

        c.transform(flip_y(10.0));
        // Bottom two user rows are the last two device rows.
        c.clear_rect(0.0, 0.0, 10.0, 2.0);
        assert_eq!(c.pixel(3, 9), Some(Color::TRANSPARENT));
        assert_eq!(c.pixel(3, 8), Some(Color::TRANSPARENT));
        assert_eq!(c.pixel(3, 7), Some(Color::BLACK));

        c.clear_rect(0.0, 0.0, 10.0, 10.0);
        assert!(c.is_blank());
    }

    #[test]
    fn clear_rect_outside_surface_is_noop() {
        let mut c = ctx(4, 4);
        c.set_fill_style("red");
        disc(&mut c, 2.0, 2.0, 5.0);
        c.fill();
        c.clear_rect(100.0, 100.0, 5.0, 5.0);
        assert_eq!(c.pixel(0, 0), Some(RED));
    }

    #[test]
    fn invalid_style_keeps_previous() {
        let mut c = ctx(4, 4);
        c.set_fill_style("red");
        c.set_fill_style("not-a-color");
        assert_eq!(c.fill_style(), RED);
    }

    #[test]
    fn negative_radius_adds_nothing() {
        let mut c = ctx(10, 10);
        disc(&mut c, 5.0, 5.0, -3.0);
        c.fill();
        c.stroke();
        assert!(c.is_blank());
    }

    #[test]
    fn fill_without_path_is_noop() {
        let mut c = ctx(4, 4);
        c.begin_path();
        c.fill();
        c.stroke();
        assert!(c.is_blank());
    }

    #[test]
    fn shapes_partially_off_surface_are_clipped() {
        let mut c = ctx(10, 10);
        c.set_fill_style("red");
        disc(&mut c, 0.0, 0.0, 4.0);
        c.fill();
        assert_eq!(c.pixel(0, 0), Some(RED));
        assert_eq!(c.pixel(9, 9), Some(Color::TRANSPARENT));
    }

    #[test]
    fn to_image_matches_pixels() {
        let mut c = ctx(6, 6);
        c.set_fill_style("white");
        disc(&mut c, 3.0, 3.0, 2.0);
        c.fill();
        let img = c.to_image();
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(3, 3).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
