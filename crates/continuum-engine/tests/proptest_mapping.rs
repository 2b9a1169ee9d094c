//! Property tests for the normalized-to-device mapping.
//!
//! These tests use `proptest` to generate positions and surface sizes and
//! check the y-up mapping and render determinism.

use continuum_engine::canvas::{CanvasOp, RasterContext, RecordingContext};
use continuum_engine::coords::SurfaceSize;
use continuum_engine::render::ContinuousVisualization;
use continuum_engine::scene::{Drawable, Frame};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f32> {
    (0u32..=10_000).prop_map(|v| v as f32 / 10_000.0)
}

fn recorded_arc(x: f32, y: f32, w: u32, h: u32) -> CanvasOp {
    let size = SurfaceSize::new(w, h).unwrap();
    let mut vis = ContinuousVisualization::new(size, RecordingContext::new());
    vis.draw_circle(x, y, 1.0, "red", false);
    vis.context()
        .ops()
        .iter()
        .find(|op| matches!(op, CanvasOp::Arc { .. }))
        .cloned()
        .unwrap()
}

fn circle_strategy() -> impl Strategy<Value = Drawable> {
    (unit(), unit(), 1u32..8, any::<bool>(), 0usize..4).prop_map(|(x, y, r, filled, c)| {
        let color = ["red", "rgba(0, 0, 255, 0.5)", "rgba(0, 255, 0, 0.5)", "black"][c];
        Drawable::circle(x, y, r as f32, color, filled)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn user_space_center_is_plain_scale(x in unit(), y in unit(), w in 1u32..2000, h in 1u32..2000) {
        let arc = recorded_arc(x, y, w, h);
        let CanvasOp::Arc { center, .. } = arc else { unreachable!() };
        prop_assert_eq!(center.x, x * w as f32);
        prop_assert_eq!(center.y, y * h as f32);
    }

    #[test]
    fn device_y_is_flipped(x in unit(), y in unit(), w in 1u32..2000, h in 1u32..2000) {
        let device = recorded_arc(x, y, w, h).device_center().unwrap();
        let tol = 1e-3 * h as f32;
        prop_assert!((device.x - x * w as f32).abs() <= tol.max(1e-3));
        prop_assert!((device.y - (h as f32 - y * h as f32)).abs() <= tol);
    }

    #[test]
    fn higher_y_is_higher_on_screen(x in unit(), y0 in unit(), y1 in unit(), h in 1u32..2000) {
        prop_assume!(y0 < y1);
        let low = recorded_arc(x, y0, 100, h).device_center().unwrap();
        let high = recorded_arc(x, y1, 100, h).device_center().unwrap();
        prop_assert!(high.y <= low.y);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn render_is_idempotent(groups in prop::collection::vec(prop::collection::vec(circle_strategy(), 0..4), 0..3)) {
        let frame = Frame::from_groups(groups);
        let size = SurfaceSize::new(32, 24).unwrap();

        let mut once = ContinuousVisualization::new(size, RasterContext::new(size).unwrap());
        once.reset_canvas();
        once.draw(&frame);

        let mut twice = ContinuousVisualization::new(size, RasterContext::new(size).unwrap());
        for _ in 0..2 {
            twice.reset_canvas();
            twice.draw(&frame);
        }

        prop_assert_eq!(once.context().data(), twice.context().data());
    }
}
