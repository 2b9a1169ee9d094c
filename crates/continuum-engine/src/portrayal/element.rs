use std::collections::BTreeMap;

use crate::coords::Vec2;
use crate::scene::{Circle, Drawable, Frame, Group, Layer, ShapeKind};

use super::ContinuousSpace;

/// How one agent should look.
#[derive(Debug, Clone, PartialEq)]
pub struct Portrayal {
    pub shape: ShapeKind,
    /// Radius in pixels.
    pub r: f32,
    pub color: String,
    pub filled: bool,
    pub layer: Layer,
}

impl Portrayal {
    pub fn circle(r: f32, color: impl Into<String>, filled: bool, layer: impl Into<Layer>) -> Self {
        Self { shape: ShapeKind::Circle, r, color: color.into(), filled, layer: layer.into() }
    }

    /// The drawable for this portrayal at a normalized position.
    pub fn at(&self, normalized: Vec2) -> Drawable {
        match self.shape {
            ShapeKind::Circle => Drawable::Circle(Circle::new(
                normalized.x,
                normalized.y,
                self.r,
                self.color.clone(),
                self.filled,
            )),
        }
    }
}

/// Something a [`CanvasElement`] can place on a frame.
pub trait Portray {
    /// Position in simulation-space units.
    fn position(&self) -> Vec2;

    /// `None` hides the item from this frame.
    fn portrayal(&self) -> Option<Portrayal>;
}

/// Builds frames for a canvas showing a continuous space.
#[derive(Debug, Clone)]
pub struct CanvasElement {
    space: ContinuousSpace,
}

impl CanvasElement {
    pub fn new(space: ContinuousSpace) -> Self {
        Self { space }
    }

    pub fn space(&self) -> &ContinuousSpace {
        &self.space
    }

    /// One group per layer, ascending; item order is kept within a layer.
    pub fn build_frame<'a, P, I>(&self, items: I) -> Frame
    where
        P: Portray + ?Sized + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let mut layers: BTreeMap<Layer, Group> = BTreeMap::new();

        for item in items {
            let Some(portrayal) = item.portrayal() else { continue };
            let pos = self.space.normalize(item.position());
            layers.entry(portrayal.layer).or_default().push(portrayal.at(pos));
        }

        layers.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Agent {
        pos: Vec2,
        layer: i32,
        visible: bool,
    }

    impl Portray for Agent {
        fn position(&self) -> Vec2 {
            self.pos
        }

        fn portrayal(&self) -> Option<Portrayal> {
            self.visible.then(|| Portrayal::circle(5.0, "green", true, self.layer))
        }
    }

    fn agent(x: f32, y: f32, layer: i32) -> Agent {
        Agent { pos: Vec2::new(x, y), layer, visible: true }
    }

    #[test]
    fn groups_by_ascending_layer() {
        let element = CanvasElement::new(ContinuousSpace::with_size(600.0, 600.0).unwrap());
        let agents = [agent(300.0, 300.0, 2), agent(0.0, 0.0, 1), agent(600.0, 600.0, 2)];

        let frame = element.build_frame(&agents);

        assert_eq!(frame.groups().len(), 2);
        assert_eq!(frame.groups()[0], vec![Drawable::circle(0.0, 0.0, 5.0, "green", true)]);
        assert_eq!(
            frame.groups()[1],
            vec![
                Drawable::circle(0.5, 0.5, 5.0, "green", true),
                Drawable::circle(1.0, 1.0, 5.0, "green", true),
            ]
        );
    }

    #[test]
    fn hidden_items_are_omitted() {
        let element = CanvasElement::new(ContinuousSpace::with_size(10.0, 10.0).unwrap());
        let mut hidden = agent(1.0, 1.0, 0);
        hidden.visible = false;
        let frame = element.build_frame(&[hidden]);
        assert!(frame.is_empty());
        assert!(frame.groups().is_empty());
    }

    #[test]
    fn works_with_trait_objects() {
        let element = CanvasElement::new(ContinuousSpace::with_size(10.0, 10.0).unwrap());
        let items: Vec<Box<dyn Portray>> = vec![Box::new(agent(5.0, 5.0, 0))];
        let frame = element.build_frame(items.iter().map(|b| b.as_ref()));
        assert_eq!(frame.len(), 1);
    }
}
