//! Slices: 3x3 positional groupings of cubelets.
//!
//! Positions use compass names:
//!
//! ```text
//!   northWest | north  | northEast
//!   ----------+--------+----------
//!   west      | origin | east
//!   ----------+--------+----------
//!   southWest | south  | southEast
//! ```
//!
//! Every face of the cube is a slice, but the three inner slices (middle,
//! equator, standing) are not faces: their origin is the colorless core. A
//! slice learns whether it is a face by looking at its origin cubelet.

use std::ops::Deref;

use crate::color::Color;
use crate::cubelet::{Cubelet, CubeletType};
use crate::direction::Direction;
use crate::group::Group;

/// Compass names in slot order.
pub const COMPASS: [&str; 9] = [
    "northWest",
    "north",
    "northEast",
    "west",
    "origin",
    "east",
    "southWest",
    "south",
    "southEast",
];

/// Which sub-groups a slice exposes.
#[derive(Debug, Clone)]
pub enum Composition<'a> {
    /// Exactly one center: the slice is a face of the cube.
    Face {
        center: &'a Cubelet,
        corners: Group<'a>,
        cross: Group<'a>,
        ex: Group<'a>,
    },
    /// Zero or several centers.
    Inner { centers: Group<'a> },
}

#[derive(Debug, Clone)]
pub struct Slice<'a> {
    pub name: &'static str,
    cubelets: [&'a Cubelet; 9],
    group: Group<'a>,
    face: Option<Direction>,
    color: Option<Color>,
    composition: Composition<'a>,
}

impl<'a> Slice<'a> {
    /// Builds a slice from nine cubelets in compass order.
    pub fn new(name: &'static str, cubelets: [&'a Cubelet; 9]) -> Self {
        let group: Group<'a> = cubelets.iter().copied().collect();
        let origin = cubelets[4];

        let (face, color) = origin
            .faces()
            .iter()
            .enumerate()
            .find(|(_, f)| f.color.is_visible())
            .map(|(i, f)| (Direction::from_id(i), Some(f.color)))
            .unwrap_or((None, None));

        let centers = group.has_type(CubeletType::Center);
        let composition = match centers.get(0) {
            Some(center) if centers.len() == 1 => {
                let corners = group.has_type(CubeletType::Corner);
                let mut cross = Group::new();
                cross.add([center]).add(&group.has_type(CubeletType::Edge));
                let mut ex = Group::new();
                ex.add([center]).add(&corners);
                Composition::Face {
                    center,
                    corners,
                    cross,
                    ex,
                }
            }
            _ => Composition::Inner { centers },
        };

        Self {
            name,
            cubelets,
            group,
            face,
            color,
            composition,
        }
    }

    /// The direction this slice faces, if it is a face.
    pub fn face(&self) -> Option<Direction> {
        self.face
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_face(&self) -> bool {
        matches!(self.composition, Composition::Face { .. })
    }

    pub fn composition(&self) -> &Composition<'a> {
        &self.composition
    }

    pub fn at(&self, compass: usize) -> &'a Cubelet {
        self.cubelets[compass]
    }

    pub fn north_west(&self) -> &'a Cubelet {
        self.cubelets[0]
    }

    pub fn north(&self) -> &'a Cubelet {
        self.cubelets[1]
    }

    pub fn north_east(&self) -> &'a Cubelet {
        self.cubelets[2]
    }

    pub fn west(&self) -> &'a Cubelet {
        self.cubelets[3]
    }

    pub fn origin(&self) -> &'a Cubelet {
        self.cubelets[4]
    }

    pub fn east(&self) -> &'a Cubelet {
        self.cubelets[5]
    }

    pub fn south_west(&self) -> &'a Cubelet {
        self.cubelets[6]
    }

    pub fn south(&self) -> &'a Cubelet {
        self.cubelets[7]
    }

    pub fn south_east(&self) -> &'a Cubelet {
        self.cubelets[8]
    }

    fn pick(&self, slots: &[usize]) -> Group<'a> {
        slots.iter().map(|&i| self.cubelets[i]).collect()
    }

    pub fn up(&self) -> Group<'a> {
        self.pick(&[0, 1, 2])
    }

    pub fn equator(&self) -> Group<'a> {
        self.pick(&[3, 4, 5])
    }

    pub fn down(&self) -> Group<'a> {
        self.pick(&[6, 7, 8])
    }

    pub fn left(&self) -> Group<'a> {
        self.pick(&[0, 3, 6])
    }

    pub fn middle(&self) -> Group<'a> {
        self.pick(&[1, 4, 7])
    }

    pub fn right(&self) -> Group<'a> {
        self.pick(&[2, 5, 8])
    }

    /// The eight cubelets around the origin.
    pub fn ring(&self) -> Group<'a> {
        self.pick(&[0, 1, 2, 3, 5, 6, 7, 8])
    }

    /// Diagonal from northWest to southEast.
    pub fn dexter(&self) -> Group<'a> {
        self.pick(&[0, 4, 8])
    }

    /// Diagonal from northEast to southWest.
    pub fn sinister(&self) -> Group<'a> {
        self.pick(&[2, 4, 6])
    }

    pub fn edges(&self) -> Group<'a> {
        self.group.has_type(CubeletType::Edge)
    }

    pub fn center(&self) -> Option<&'a Cubelet> {
        match &self.composition {
            Composition::Face { center, .. } => Some(*center),
            Composition::Inner { .. } => None,
        }
    }

    pub fn corners(&self) -> Option<&Group<'a>> {
        match &self.composition {
            Composition::Face { corners, .. } => Some(corners),
            Composition::Inner { .. } => None,
        }
    }

    /// Center plus edges.
    pub fn cross(&self) -> Option<&Group<'a>> {
        match &self.composition {
            Composition::Face { cross, .. } => Some(cross),
            Composition::Inner { .. } => None,
        }
    }

    /// Center plus corners.
    pub fn ex(&self) -> Option<&Group<'a>> {
        match &self.composition {
            Composition::Face { ex, .. } => Some(ex),
            Composition::Inner { .. } => None,
        }
    }

    pub fn centers(&self) -> Option<&Group<'a>> {
        match &self.composition {
            Composition::Inner { centers } => Some(centers),
            Composition::Face { .. } => None,
        }
    }

    /// Compass name of a member cubelet, by identity.
    pub fn location(&self, cubelet: &Cubelet) -> Option<&'static str> {
        self.cubelets
            .iter()
            .position(|c| std::ptr::eq(*c, cubelet))
            .map(|i| COMPASS[i])
    }

    /// Compact grid of cubelet ids and the color each shows on `side`.
    ///
    /// `side` defaults to the slice's own face, then to front. When the side
    /// shown is not the slice's face, it is labeled under the name.
    pub fn inspect(&self, side: Option<Direction>) -> String {
        let side = side.or(self.face).unwrap_or(Direction::Front);
        let side_label = if Some(side) == self.face {
            String::new()
        } else {
            format!("{side}s")
        };
        let mut name: String = self.name[..1].to_uppercase();
        name.push_str(&self.name[1..]);

        let mut out = String::new();
        for row in 0..3 {
            let prefix = match row {
                0 => name.as_str(),
                1 => side_label.as_str(),
                _ => "",
            };
            out.push_str(&format!("{prefix:<10}"));
            let cells: Vec<String> = (0..3)
                .map(|column| {
                    let cubelet = self.cubelets[row * 3 + column];
                    let color = cubelet.face(side).color;
                    let initial = if color.is_visible() { color.initial } else { '-' };
                    format!("{:02}{}", cubelet.id, initial)
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }
}

impl<'a> Deref for Slice<'a> {
    type Target = Group<'a>;

    fn deref(&self) -> &Self::Target {
        &self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, WHITE};
    use crate::grid::SLOTS;

    fn solved() -> Vec<Cubelet> {
        (0..SLOTS).map(Cubelet::solved).collect()
    }

    fn slice<'a>(cubelets: &'a [Cubelet], name: &'static str, slots: [usize; 9]) -> Slice<'a> {
        Slice::new(name, slots.map(|s| &cubelets[s]))
    }

    #[test]
    fn test_face_slice_detection() {
        let cubelets = solved();
        let right = slice(&cubelets, "right", [2, 11, 20, 5, 14, 23, 8, 17, 26]);
        assert!(right.is_face());
        assert_eq!(right.face(), Some(Direction::Right));
        assert_eq!(right.color(), Some(BLUE));
        assert_eq!(right.center().map(|c| c.id), Some(14));
        assert_eq!(right.corners().map(Group::len), Some(4));
        assert_eq!(right.cross().map(Group::len), Some(5));
        assert_eq!(right.ex().map(Group::len), Some(5));
        assert!(right.centers().is_none());
        assert!(right.is_solved(right.face()));
    }

    #[test]
    fn test_inner_slice_has_centers() {
        let cubelets = solved();
        let middle = slice(&cubelets, "middle", [25, 22, 19, 16, 13, 10, 7, 4, 1]);
        assert!(!middle.is_face());
        assert_eq!(middle.face(), None);
        assert_eq!(middle.color(), None);
        assert_eq!(middle.centers().map(Group::len), Some(4));
        assert_eq!(middle.edges().len(), 4);
        assert!(middle.center().is_none());
    }

    #[test]
    fn test_rows_columns_and_diagonals() {
        let cubelets = solved();
        let front = slice(&cubelets, "front", [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(front.up().ids(), vec![0, 1, 2]);
        assert_eq!(front.equator().ids(), vec![3, 4, 5]);
        assert_eq!(front.down().ids(), vec![6, 7, 8]);
        assert_eq!(front.left().ids(), vec![0, 3, 6]);
        assert_eq!(front.middle().ids(), vec![1, 4, 7]);
        assert_eq!(front.right().ids(), vec![2, 5, 8]);
        assert_eq!(front.ring().len(), 8);
        assert_eq!(front.dexter().ids(), vec![0, 4, 8]);
        assert_eq!(front.sinister().ids(), vec![2, 4, 6]);
        assert_eq!(front.location(&cubelets[5]), Some("east"));
        assert_eq!(front.location(&cubelets[20]), None);
    }

    #[test]
    fn test_inspect_compact() {
        let cubelets = solved();
        let front = slice(&cubelets, "front", [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let expected = "\
Front     00W 01W 02W
          03W 04W 05W
          06W 07W 08W
";
        assert_eq!(front.inspect(None), expected);

        let shown = front.inspect(Some(Direction::Up));
        assert!(shown.starts_with("Front     00O 01O 02O\nups       03- 04- 05-\n"));
        assert_eq!(front.north().face(Direction::Front).color, WHITE);
    }
}
