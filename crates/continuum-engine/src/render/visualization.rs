use core::f32::consts::TAU;

use crate::canvas::DrawingContext;
use crate::coords::{SurfaceSize, flip_y};
use crate::scene::{Circle, Drawable, Frame};

/// Per-`draw` counters.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DrawStats {
    pub drawn: usize,
    /// Drawables with a shape tag this renderer does not draw.
    pub skipped: usize,
}

/// Maps normalized frames onto a drawing context with a y-up axis.
///
/// Invariant: the flip transform is applied to the context exactly once, in
/// [`new`](Self::new). Nothing else here calls `transform`.
#[derive(Debug)]
pub struct ContinuousVisualization<C: DrawingContext> {
    size: SurfaceSize,
    context: C,
}

impl<C: DrawingContext> ContinuousVisualization<C> {
    /// Takes ownership of a fresh, untransformed context over a surface of `size`.
    pub fn new(size: SurfaceSize, mut context: C) -> Self {
        debug_assert!(
            context.current_transform().is_identity(),
            "ContinuousVisualization::new: context already transformed"
        );
        context.transform(flip_y(size.height_f32()));
        Self { size, context }
    }

    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[inline]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Clears the whole surface and starts a fresh path. The transform is untouched.
    pub fn reset_canvas(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.size.width_f32(), self.size.height_f32());
        self.context.begin_path();
    }

    /// Draws every drawable in `frame` on top of the current surface contents.
    pub fn draw(&mut self, frame: &Frame) -> DrawStats {
        let mut stats = DrawStats::default();

        for drawable in frame.iter() {
            match drawable {
                Drawable::Circle(Circle { x, y, r, color, filled }) => {
                    self.draw_circle(*x, *y, *r, color, *filled);
                    stats.drawn += 1;
                }
                Drawable::Unknown { shape } => {
                    log::trace!("skipping drawable with unknown shape `{shape}`");
                    stats.skipped += 1;
                }
            }
        }

        stats
    }

    /// Strokes a circle and, if `filled`, fills it with the same color.
    ///
    /// `x`/`y` are normalized and scaled by the surface size; `r` is in pixels.
    pub fn draw_circle(&mut self, x: f32, y: f32, r: f32, color: &str, filled: bool) {
        let cx = x * self.size.width_f32();
        let cy = y * self.size.height_f32();

        let ctx = &mut self.context;
        ctx.begin_path();
        ctx.arc(cx, cy, r, 0.0, TAU, false);
        ctx.close_path();

        ctx.set_stroke_style(color);
        ctx.stroke();
        if filled {
            ctx.set_fill_style(color);
            ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasOp, RecordingContext};
    use crate::coords::Vec2;

    fn vis(w: u32, h: u32) -> ContinuousVisualization<RecordingContext> {
        ContinuousVisualization::new(SurfaceSize::new(w, h).unwrap(), RecordingContext::new())
    }

    #[test]
    fn new_applies_flip_once() {
        let v = vis(200, 100);
        assert_eq!(v.context().ops(), &[CanvasOp::Transform(flip_y(100.0))]);
    }

    #[test]
    fn reset_clears_full_surface_then_begins_path() {
        let mut v = vis(200, 100);
        v.reset_canvas();
        v.reset_canvas();
        let ops = &v.context().ops()[1..];
        let clear = CanvasOp::ClearRect {
            x: 0.0,
            y: 0.0,
            w: 200.0,
            h: 100.0,
            transform: flip_y(100.0),
        };
        assert_eq!(ops, &[clear.clone(), CanvasOp::BeginPath, clear, CanvasOp::BeginPath]);
    }

    #[test]
    fn outline_only_circle_never_fills() {
        let mut v = vis(100, 100);
        v.draw_circle(0.5, 0.5, 10.0, "blue", false);
        let ops = &v.context().ops()[1..];
        assert_eq!(ops.len(), 5);
        assert_eq!(ops[0], CanvasOp::BeginPath);
        assert!(matches!(ops[1], CanvasOp::Arc { radius, anticlockwise: false, .. } if radius == 10.0));
        assert_eq!(ops[2], CanvasOp::ClosePath);
        assert_eq!(ops[3], CanvasOp::SetStrokeStyle("blue".into()));
        assert_eq!(ops[4], CanvasOp::Stroke);
        assert_eq!(v.context().count(|op| matches!(op, CanvasOp::Fill)), 0);
    }

    #[test]
    fn filled_circle_strokes_and_fills_with_same_color() {
        let mut v = vis(100, 100);
        v.draw_circle(0.5, 0.5, 10.0, "#ff0000", true);
        let ops = &v.context().ops()[1..];
        assert_eq!(
            &ops[3..],
            &[
                CanvasOp::SetStrokeStyle("#ff0000".into()),
                CanvasOp::Stroke,
                CanvasOp::SetFillStyle("#ff0000".into()),
                CanvasOp::Fill,
            ]
        );
    }

    #[test]
    fn arc_is_a_full_turn_scaled_by_surface() {
        let mut v = vis(200, 100);
        v.draw_circle(0.1, 0.1, 3.0, "red", false);
        let arc = &v.context().ops()[2];
        let CanvasOp::Arc { center, radius, start_angle, end_angle, .. } = arc else {
            panic!("expected arc, got {arc:?}");
        };
        assert!((center.x - 20.0).abs() < 1e-4);
        assert!((center.y - 10.0).abs() < 1e-4);
        assert_eq!(*radius, 3.0);
        assert_eq!((*start_angle, *end_angle), (0.0, TAU));
        let device = arc.device_center().unwrap();
        assert!((device - Vec2::new(20.0, 90.0)).length_squared() < 1e-6);
    }

    #[test]
    fn draw_skips_unknown_shapes_and_continues() {
        let mut v = vis(100, 100);
        let frame = Frame::from_groups(vec![vec![
            Drawable::unknown("square"),
            Drawable::circle(0.2, 0.2, 1.0, "red", false),
        ]]);
        let stats = v.draw(&frame);
        assert_eq!(stats, DrawStats { drawn: 1, skipped: 1 });
        assert_eq!(v.context().count(|op| matches!(op, CanvasOp::Arc { .. })), 1);
    }

    #[test]
    fn draw_does_not_clear() {
        let mut v = vis(100, 100);
        v.draw(&Frame::from_groups(vec![vec![Drawable::circle(0.5, 0.5, 1.0, "red", false)]]));
        assert_eq!(v.context().count(|op| matches!(op, CanvasOp::ClearRect { .. })), 0);
    }
}
