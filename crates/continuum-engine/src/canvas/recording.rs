use crate::coords::{Transform, Vec2, map_point};

use super::DrawingContext;

/// One recorded context call.
///
/// Geometry is kept in user space as passed, alongside the transform that
/// was in effect, so callers can check both what was asked and where it lands.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Transform(Transform),
    ClearRect { x: f32, y: f32, w: f32, h: f32, transform: Transform },
    BeginPath,
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
        transform: Transform,
    },
    ClosePath,
    SetStrokeStyle(String),
    Stroke,
    SetFillStyle(String),
    Fill,
}

impl CanvasOp {
    /// Device-space center of an `Arc` op.
    pub fn device_center(&self) -> Option<Vec2> {
        match self {
            CanvasOp::Arc { center, transform, .. } => Some(map_point(*transform, *center)),
            _ => None,
        }
    }
}

/// Context that draws nothing and logs every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    transform: Transform,
    ops: Vec<CanvasOp>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Returns and clears the recorded ops. The transform is kept.
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn count(&self, pred: impl Fn(&CanvasOp) -> bool) -> usize {
        self.ops.iter().filter(|&op| pred(op)).count()
    }
}

impl DrawingContext for RecordingContext {
    fn transform(&mut self, m: Transform) {
        self.transform = self.transform.pre_concat(m);
        self.ops.push(CanvasOp::Transform(m));
    }

    fn current_transform(&self) -> Transform {
        self.transform
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(CanvasOp::ClearRect { x, y, w, h, transform: self.transform });
    }

    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32, anticlockwise: bool) {
        self.ops.push(CanvasOp::Arc {
            center: Vec2::new(cx, cy),
            radius,
            start_angle,
            end_angle,
            anticlockwise,
            transform: self.transform,
        });
    }

    fn close_path(&mut self) {
        self.ops.push(CanvasOp::ClosePath);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(CanvasOp::SetStrokeStyle(style.to_string()));
    }

    fn stroke(&mut self) {
        self.ops.push(CanvasOp::Stroke);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(CanvasOp::SetFillStyle(style.to_string()));
    }

    fn fill(&mut self) {
        self.ops.push(CanvasOp::Fill);
    }
}
