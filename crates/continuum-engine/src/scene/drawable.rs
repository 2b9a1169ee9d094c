use std::fmt;

/// Circle in normalized space.
///
/// `x`/`y` are expected in `[0, 1]` but not clamped. `r` is in pixels: it is
/// not scaled by the surface dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub color: String,
    pub filled: bool,
}

impl Circle {
    pub fn new(x: f32, y: f32, r: f32, color: impl Into<String>, filled: bool) -> Self {
        Self { x, y, r, color: color.into(), filled }
    }
}

/// One item of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Circle(Circle),
    /// Shape tag this crate does not know how to draw. Kept so frames from a
    /// newer producer still render their known shapes.
    Unknown { shape: String },
}

impl Drawable {
    pub fn circle(x: f32, y: f32, r: f32, color: impl Into<String>, filled: bool) -> Self {
        Drawable::Circle(Circle::new(x, y, r, color, filled))
    }

    pub fn unknown(shape: impl Into<String>) -> Self {
        Drawable::Unknown { shape: shape.into() }
    }

    /// Wire tag of this drawable.
    pub fn shape_tag(&self) -> &str {
        match self {
            Drawable::Circle(_) => ShapeKind::Circle.tag(),
            Drawable::Unknown { shape } => shape,
        }
    }
}

impl From<Circle> for Drawable {
    fn from(c: Circle) -> Self {
        Drawable::Circle(c)
    }
}

/// Shape tags this crate understands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
}

impl ShapeKind {
    /// Matches a wire tag exactly (tags are case-sensitive).
    pub fn from_tag(tag: &str) -> Option<ShapeKind> {
        match tag {
            "circle" => Some(ShapeKind::Circle),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
