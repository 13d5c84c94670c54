//! Unordered selections of cubelets.
//!
//! A [`Group`] borrows cubelets from the cube; it never owns them. Groups are
//! cheap views rebuilt on demand, so they always reflect the cube's current
//! slot assignment.

use log::{debug, warn};

use crate::color::Color;
use crate::cubelet::{Cubelet, CubeletType};
use crate::direction::Direction;
use crate::geometry::{Axis, Sense};

#[derive(Debug, Clone, Default)]
pub struct Group<'a> {
    cubelets: Vec<&'a Cubelet>,
}

impl<'a> Group<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends cubelets. Anything iterable over cubelet references works,
    /// including another group, so nested selections flatten naturally.
    pub fn add<I>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Cubelet>,
    {
        self.cubelets.extend(members);
        self
    }

    /// Removes every occurrence of each given cubelet, compared by identity.
    pub fn remove<I>(&mut self, members: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Cubelet>,
    {
        for member in members {
            self.cubelets.retain(|c| !std::ptr::eq(*c, member));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.cubelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubelets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Cubelet> + '_ {
        self.cubelets.iter().copied()
    }

    pub fn get(&self, index: usize) -> Option<&'a Cubelet> {
        self.cubelets.get(index).copied()
    }

    /// Identities of the members, in group order.
    pub fn ids(&self) -> Vec<usize> {
        self.iter().map(|c| c.id).collect()
    }

    fn count(&self, flagged: impl Fn(&Cubelet) -> bool) -> usize {
        self.iter().filter(|c| flagged(*c)).count()
    }

    /// Number of members mid-rotation.
    pub fn is_tweening(&self) -> usize {
        self.count(Cubelet::is_tweening)
    }

    /// Number of members engaged on `axis`.
    pub fn is_engaged_on(&self, axis: Axis) -> usize {
        self.count(|c| c.is_engaged(axis))
    }

    pub fn is_engaged_x(&self) -> usize {
        self.is_engaged_on(Axis::X)
    }

    pub fn is_engaged_y(&self) -> usize {
        self.is_engaged_on(Axis::Y)
    }

    pub fn is_engaged_z(&self) -> usize {
        self.is_engaged_on(Axis::Z)
    }

    /// Total engagement flags across all three axes.
    pub fn is_engaged(&self) -> usize {
        Axis::ALL.iter().map(|&a| self.is_engaged_on(a)).sum()
    }

    fn filter(&self, keep: impl Fn(&Cubelet) -> bool) -> Group<'a> {
        Group {
            cubelets: self.iter().filter(|c| keep(*c)).collect(),
        }
    }

    pub fn has_id(&self, id: usize) -> Option<&'a Cubelet> {
        self.iter().find(|c| c.id == id)
    }

    pub fn has_address(&self, address: usize) -> Option<&'a Cubelet> {
        self.iter().find(|c| c.address() == address)
    }

    pub fn has_type(&self, cubelet_type: CubeletType) -> Group<'a> {
        self.filter(|c| c.cubelet_type() == cubelet_type)
    }

    pub fn has_color(&self, color: Color) -> Group<'a> {
        self.filter(|c| c.has_color(color).is_some())
    }

    /// Members carrying all of the given colors.
    pub fn has_colors(&self, colors: &[Color]) -> Group<'a> {
        self.filter(|c| c.has_colors(colors))
    }

    /// Mean accumulated rotation about `axis`; zero for an empty group.
    pub fn average_rotation(&self, axis: Axis) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.iter().map(|c| c.rotation(axis) as i64).sum();
        sum as f64 / self.len() as f64
    }

    /// Unsigned distance from the average rotation to the next peg in the
    /// commanded sense.
    ///
    /// Anticlockwise requests that start on a peg still travel a full
    /// quarter turn, so an unspecified twist never degenerates into a no-op.
    pub fn distance_to_peg(&self, axis: Axis, sense: Sense) -> f64 {
        let current = self.average_rotation(axis);
        let mut distance = ((current + 90.0) / 90.0).floor() * 90.0 - current;
        if sense == Sense::Anticlockwise {
            distance -= 90.0;
            if distance == 0.0 {
                distance -= 90.0;
            }
        }
        debug!(
            "average rotation about {axis}: {current} | {sense} | distance to peg {distance} | target {}",
            current + distance
        );
        distance.abs()
    }

    /// True when every member shows the same color on `face`.
    pub fn is_solved(&self, face: Option<Direction>) -> bool {
        let Some(face) = face else {
            warn!("a face must be given when asking whether a group is solved");
            return false;
        };
        let mut colors = self.iter().map(|c| c.face(face).color);
        match colors.next() {
            Some(first) => colors.all(|c| c == first),
            None => true,
        }
    }

    pub fn average_opacity(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.iter().map(|c| c.appearance.opacity).sum::<f32>() / self.len() as f32
    }

    pub fn average_radius(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.iter().map(|c| c.appearance.radius).sum::<f32>() / self.len() as f32
    }
}

impl<'a> FromIterator<&'a Cubelet> for Group<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Cubelet>>(iter: I) -> Self {
        Group {
            cubelets: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for Group<'a> {
    type Item = &'a Cubelet;
    type IntoIter = std::vec::IntoIter<&'a Cubelet>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubelets.into_iter()
    }
}

impl<'a, 'g> IntoIterator for &'g Group<'a> {
    type Item = &'a Cubelet;
    type IntoIter = std::iter::Copied<std::slice::Iter<'g, &'a Cubelet>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cubelets.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, RED, WHITE};
    use crate::grid::SLOTS;

    fn solved() -> Vec<Cubelet> {
        (0..SLOTS).map(Cubelet::solved).collect()
    }

    #[test]
    fn test_add_flattens_and_remove_by_identity() {
        let cubelets = solved();
        let front: Group = cubelets[0..9].iter().collect();
        let mut group = Group::new();
        group.add(&front).add([&cubelets[13]]);
        assert_eq!(group.len(), 10);

        let mut duplicated = Group::new();
        duplicated.add(&group).add(&group);
        duplicated.remove(&front);
        assert_eq!(duplicated.ids(), vec![13, 13]);
    }

    #[test]
    fn test_peg_distance_at_rest() {
        let cubelets = solved();
        let group: Group = cubelets.iter().collect();
        for axis in Axis::ALL {
            assert_eq!(group.distance_to_peg(axis, Sense::Clockwise), 90.0);
            assert_eq!(group.distance_to_peg(axis, Sense::Anticlockwise), 90.0);
        }
    }

    #[test]
    fn test_peg_distance_mid_turn() {
        let mut cubelets = solved();
        for c in cubelets.iter_mut() {
            c.rotate(Axis::X, Sense::Clockwise, 30);
        }
        let group: Group = cubelets.iter().collect();
        assert_eq!(group.average_rotation(Axis::X), 30.0);
        assert_eq!(group.distance_to_peg(Axis::X, Sense::Clockwise), 60.0);
        assert_eq!(group.distance_to_peg(Axis::X, Sense::Anticlockwise), 30.0);
    }

    #[test]
    fn test_flag_counts() {
        let mut cubelets = solved();
        cubelets[2].rotate(Axis::Y, Sense::Clockwise, 90);
        cubelets[5].rotate(Axis::Y, Sense::Clockwise, 90);
        let group: Group = cubelets.iter().collect();
        assert_eq!(group.is_tweening(), 2);
        assert_eq!(group.is_engaged_y(), 2);
        assert_eq!(group.is_engaged_x(), 0);
        assert_eq!(group.is_engaged(), 2);
    }

    #[test]
    fn test_searches() {
        let cubelets = solved();
        let group: Group = cubelets.iter().collect();
        assert_eq!(group.has_type(CubeletType::Corner).len(), 8);
        assert_eq!(group.has_color(WHITE).len(), 9);
        assert_eq!(group.has_colors(&[WHITE, BLUE, RED]).ids(), vec![8]);
        assert_eq!(group.has_id(4).map(|c| c.address()), Some(4));
        assert_eq!(group.has_address(30).map(|c| c.id), None);
    }

    #[test]
    fn test_is_solved_requires_face() {
        let cubelets = solved();
        let front: Group = cubelets[0..9].iter().collect();
        assert!(front.is_solved(Some(Direction::Front)));
        assert!(!front.is_solved(Some(Direction::Up)));
        assert!(!front.is_solved(None));
    }
}
