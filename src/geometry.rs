//! Axes, rotation senses, and quarter-turn coordinate rotations.
//!
//! Coordinates are centered on the core cubelet: each component is one of
//! -1, 0, or 1, with x pointing right, y pointing up, and z pointing toward
//! the viewer (out of the front face).
//!
//! A clockwise turn about an axis is clockwise as seen when looking at the
//! cube from the positive end of that axis (from the right, the top, or the
//! front respectively).

use std::fmt;

/// Centered cubelet coordinate, each component in {-1, 0, 1}.
pub type Coord = (i32, i32, i32);

/// One of the three rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes a twist on this axis conflicts with.
    pub const fn orthogonal(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Picks this axis's component out of a coordinate.
    pub const fn component(self, (x, y, z): Coord) -> i32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }

    /// The letter used for whole-cube turns about this axis, with case
    /// encoding the sense.
    pub const fn letter(self, sense: Sense) -> char {
        match (self, sense) {
            (Axis::X, Sense::Clockwise) => 'X',
            (Axis::X, Sense::Anticlockwise) => 'x',
            (Axis::Y, Sense::Clockwise) => 'Y',
            (Axis::Y, Sense::Anticlockwise) => 'y',
            (Axis::Z, Sense::Clockwise) => 'Z',
            (Axis::Z, Sense::Anticlockwise) => 'z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter(Sense::Clockwise))
    }
}

/// Rotational sense, either about an axis or about a named face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sense {
    Clockwise,
    Anticlockwise,
}

impl Sense {
    /// +1 for clockwise, -1 for anticlockwise.
    pub const fn vector(self) -> i32 {
        match self {
            Sense::Clockwise => 1,
            Sense::Anticlockwise => -1,
        }
    }

    pub const fn flip(self) -> Self {
        match self {
            Sense::Clockwise => Sense::Anticlockwise,
            Sense::Anticlockwise => Sense::Clockwise,
        }
    }

    /// Combines two senses the way signs multiply.
    pub const fn compose(self, other: Sense) -> Self {
        match other {
            Sense::Clockwise => self,
            Sense::Anticlockwise => self.flip(),
        }
    }

    /// The sense from a letter's case: uppercase is clockwise.
    pub fn from_case(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            Sense::Clockwise
        } else {
            Sense::Anticlockwise
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Sense::Clockwise => "clockwise",
            Sense::Anticlockwise => "anticlockwise",
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rotates a coordinate a quarter turn about `axis`.
///
/// Clockwise maps, viewed from the positive end of each axis:
/// - X: (x, y, z) -> (x, z, -y)
/// - Y: (x, y, z) -> (-z, y, x)
/// - Z: (x, y, z) -> (y, -x, z)
///
/// The anticlockwise maps are their inverses.
pub const fn quarter_turn(axis: Axis, sense: Sense, (x, y, z): Coord) -> Coord {
    match (axis, sense) {
        (Axis::X, Sense::Clockwise) => (x, z, -y),
        (Axis::X, Sense::Anticlockwise) => (x, -z, y),
        (Axis::Y, Sense::Clockwise) => (-z, y, x),
        (Axis::Y, Sense::Anticlockwise) => (z, y, -x),
        (Axis::Z, Sense::Clockwise) => (y, -x, z),
        (Axis::Z, Sense::Anticlockwise) => (-y, x, z),
    }
}

/// Rotates a point by an arbitrary angle about `axis`.
///
/// Positive degrees turn clockwise in the same sense as [`quarter_turn`], so
/// `rotate_point(axis, 90.0, p)` agrees with a clockwise quarter turn for
/// integer points.
pub fn rotate_point(axis: Axis, degrees: f32, (x, y, z): (f32, f32, f32)) -> (f32, f32, f32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    match axis {
        Axis::X => (x, y * cos + z * sin, z * cos - y * sin),
        Axis::Y => (x * cos - z * sin, y, z * cos + x * sin),
        Axis::Z => (x * cos + y * sin, y * cos - x * sin, z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_coords() -> Vec<Coord> {
        let mut coords = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    coords.push((x, y, z));
                }
            }
        }
        coords
    }

    #[test]
    fn test_quarter_turns_invert() {
        for axis in Axis::ALL {
            for coord in all_coords() {
                let there = quarter_turn(axis, Sense::Clockwise, coord);
                let back = quarter_turn(axis, Sense::Anticlockwise, there);
                assert_eq!(back, coord, "{axis} turn did not invert at {coord:?}");
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for axis in Axis::ALL {
            for coord in all_coords() {
                let mut c = coord;
                for _ in 0..4 {
                    c = quarter_turn(axis, Sense::Clockwise, c);
                }
                assert_eq!(c, coord);
            }
        }
    }

    #[test]
    fn test_quarter_turn_preserves_axis_component() {
        for axis in Axis::ALL {
            for coord in all_coords() {
                let turned = quarter_turn(axis, Sense::Clockwise, coord);
                assert_eq!(axis.component(turned), axis.component(coord));
            }
        }
    }

    #[test]
    fn test_rotate_point_matches_quarter_turn() {
        for axis in Axis::ALL {
            for coord in all_coords() {
                let (x, y, z) = quarter_turn(axis, Sense::Clockwise, coord);
                let (px, py, pz) =
                    rotate_point(axis, 90.0, (coord.0 as f32, coord.1 as f32, coord.2 as f32));
                assert!(
                    (px - x as f32).abs() < 1e-5
                        && (py - y as f32).abs() < 1e-5
                        && (pz - z as f32).abs() < 1e-5,
                    "{axis} at {coord:?}: expected ({x},{y},{z}), got ({px},{py},{pz})"
                );
            }
        }
    }

    #[test]
    fn test_sense_algebra() {
        assert_eq!(Sense::Clockwise.vector(), 1);
        assert_eq!(Sense::Anticlockwise.vector(), -1);
        assert_eq!(Sense::Anticlockwise.compose(Sense::Anticlockwise), Sense::Clockwise);
        assert_eq!(Sense::Clockwise.compose(Sense::Anticlockwise), Sense::Anticlockwise);
        assert_eq!(Sense::from_case('R'), Sense::Clockwise);
        assert_eq!(Sense::from_case('r'), Sense::Anticlockwise);
    }
}
