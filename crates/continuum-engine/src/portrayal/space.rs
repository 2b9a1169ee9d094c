use crate::coords::Vec2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpaceError {
    #[error("space extent on {axis} must be positive and finite, got [{min}, {max}]")]
    EmptyExtent { axis: char, min: f32, max: f32 },
}

/// Rectangular continuous space of a simulation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContinuousSpace {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl ContinuousSpace {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Result<Self, SpaceError> {
        let check = |axis, min: f32, max: f32| {
            if min.is_finite() && max.is_finite() && max > min {
                Ok(())
            } else {
                Err(SpaceError::EmptyExtent { axis, min, max })
            }
        };
        check('x', x_min, x_max)?;
        check('y', y_min, y_max)?;
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    /// Space spanning `[0, width] x [0, height]`.
    pub fn with_size(width: f32, height: f32) -> Result<Self, SpaceError> {
        Self::new(0.0, width, 0.0, height)
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Maps a position to normalized `[0, 1]` coordinates. Out-of-extent
    /// positions map outside the unit square; nothing is clamped.
    pub fn normalize(&self, pos: Vec2) -> Vec2 {
        Vec2::new((pos.x - self.x_min) / self.width(), (pos.y - self.y_min) / self.height())
    }
}
