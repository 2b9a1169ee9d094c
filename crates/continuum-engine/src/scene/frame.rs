use super::Drawable;

/// Drawables sharing a layer.
pub type Group = Vec<Drawable>;

/// One snapshot of everything to draw.
///
/// Two levels: groups, then drawables. Iteration visits every drawable
/// exactly once, group by group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    groups: Vec<Group>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn push_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drawable> {
        self.groups.iter().flatten()
    }

    /// Number of drawables across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Group> for Frame {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Frame::from_groups(iter.into_iter().collect())
    }
}
